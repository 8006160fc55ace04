pub mod clear;
pub mod count;
pub mod emails;
pub mod list;
pub mod mark_all_read;
pub mod mark_read;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::pagination::PaginationQuery;
use crate::models::notifications::requests::NotificationListParams;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 当前用户的通知列表
    pub async fn list_notifications(
        &self,
        request: &HttpRequest,
        params: NotificationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request, params).await
    }

    /// 未读数量
    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        count::unread_count(self, request).await
    }

    /// 标记单条已读
    pub async fn mark_read(
        &self,
        request: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_read(self, request, notification_id).await
    }

    /// 全部标记已读
    pub async fn mark_all_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mark_all_read::mark_all_read(self, request).await
    }

    /// 清空当前用户的通知
    pub async fn clear_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        clear::clear_notifications(self, request).await
    }

    /// 当前用户的系统邮件记录
    pub async fn list_emails(
        &self,
        request: &HttpRequest,
        pagination: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        emails::list_emails(self, request, pagination).await
    }
}
