use serde::Deserialize;
use ts_rs::TS;

/// 发送私信请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct SendMessageRequest {
    pub recipient_id: i64,
    pub subject: String,
    pub content: String,
}
