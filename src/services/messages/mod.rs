pub mod conversation;
pub mod list;
pub mod mark_all_read;
pub mod mark_read;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::pagination::PaginationQuery;
use crate::models::messages::requests::SendMessageRequest;
use crate::storage::Storage;

pub struct MessageService {
    storage: Option<Arc<dyn Storage>>,
}

impl MessageService {
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

    /// 当前用户收发的全部私信
    pub async fn list_messages(
        &self,
        request: &HttpRequest,
        pagination: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_messages(self, request, pagination).await
    }

    /// 与某个用户的对话
    pub async fn conversation(
        &self,
        request: &HttpRequest,
        peer_id: i64,
        pagination: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        conversation::conversation(self, request, peer_id, pagination).await
    }

    /// 发送私信
    pub async fn send_message(
        &self,
        request: &HttpRequest,
        req: SendMessageRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_message(self, request, req).await
    }

    /// 标记单条已读
    pub async fn mark_read(
        &self,
        request: &HttpRequest,
        message_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_read(self, request, message_id).await
    }

    /// 标记某发件人发来的全部私信已读
    pub async fn mark_conversation_read(
        &self,
        request: &HttpRequest,
        sender_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_all_read::mark_conversation_read(self, request, sender_id).await
    }
}
