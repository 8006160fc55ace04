use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::notifications::entities::NotificationType;

/// 通知列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct NotificationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}

// 存储层创建通知的内部请求
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
}

// 存储层记录系统邮件的内部请求
#[derive(Debug, Clone)]
pub struct RecordEmailRequest {
    pub user_id: i64,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}
