use serde::Deserialize;
use ts_rs::TS;

/// 注册文件元数据请求。实际字节由客户端直传外部 blob 存储。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "file.ts")]
pub struct RegisterFileRequest {
    pub name: String,
    pub mime_type: String,
    pub size: i64,
}
