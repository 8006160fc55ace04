use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 站内私信
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
