use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::messages::entities::Message;
use crate::models::users::entities::UserRole;

/// 私信收发双方的摘要信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct MessageParticipant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// 私信列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct MessageListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub message: Message,
    pub sender: Option<MessageParticipant>,
    pub recipient: Option<MessageParticipant>,
}

/// 私信列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "message.ts")]
pub struct MessageListResponse {
    pub items: Vec<MessageListItem>,
    pub pagination: PaginationInfo,
}
