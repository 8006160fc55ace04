use serde::Deserialize;
use ts_rs::TS;

/// 创建分组请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct CreateGroupRequest {
    pub name: String,
    pub promotion: String,
}
