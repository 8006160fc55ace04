//! 通知与站内信存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::entity::system_emails::{
    ActiveModel as EmailActiveModel, Column as EmailColumn, Entity as SystemEmails,
};
use crate::errors::{AcademiaError, Result};
use crate::models::{
    PaginationInfo,
    notifications::{
        entities::{Notification, SystemEmail},
        requests::{CreateNotificationRequest, RecordEmailRequest},
        responses::{NotificationListResponse, SystemEmailListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// 站内信统一发件人
const SYSTEM_SENDER: &str = "no-reply@academiapro.local";

impl SeaOrmStorage {
    /// 创建通知
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            title: Set(req.title),
            message: Set(req.message),
            notification_type: Set(req.notification_type.to_string()),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }

    /// 列出用户通知（分页）
    pub async fn list_notifications_with_pagination_impl(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
        unread_only: bool,
    ) -> Result<NotificationListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let mut select = Notifications::find().filter(Column::UserId.eq(user_id));

        if unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询通知页数失败: {e}")))?;

        let notifications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 用户未读通知数量
    pub async fn unread_notification_count_impl(&self, user_id: i64) -> Result<i64> {
        let count = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询未读数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 标记通知已读，user_id 过滤防止越权标记他人通知
    pub async fn mark_notification_read_impl(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(notification_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记用户所有通知已读
    pub async fn mark_all_notifications_read_impl(&self, user_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("标记全部已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 清空用户所有通知
    pub async fn clear_notifications_impl(&self, user_id: i64) -> Result<u64> {
        let result = Notifications::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("清空通知失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 记录站内信，不走真实 SMTP
    pub async fn record_system_email_impl(&self, req: RecordEmailRequest) -> Result<SystemEmail> {
        let now = chrono::Utc::now().timestamp();

        let model = EmailActiveModel {
            user_id: Set(req.user_id),
            sender: Set(SYSTEM_SENDER.to_string()),
            recipient: Set(req.recipient),
            subject: Set(req.subject),
            body: Set(req.body),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("记录站内信失败: {e}")))?;

        Ok(result.into_system_email())
    }

    /// 列出用户站内信（分页）
    pub async fn list_system_emails_with_pagination_impl(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<SystemEmailListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let select = SystemEmails::find()
            .filter(EmailColumn::UserId.eq(user_id))
            .order_by_desc(EmailColumn::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询站内信总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询站内信页数失败: {e}")))?;

        let emails = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询站内信列表失败: {e}")))?;

        Ok(SystemEmailListResponse {
            items: emails.into_iter().map(|m| m.into_system_email()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
