use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::notifications::entities::{Notification, SystemEmail};

/// 通知列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

/// 未读数量响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// 系统邮件列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct SystemEmailListResponse {
    pub items: Vec<SystemEmail>,
    pub pagination: PaginationInfo,
}
