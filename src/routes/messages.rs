use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::pagination::PaginationQuery;
use crate::models::messages::requests::SendMessageRequest;
use crate::services::MessageService;
use crate::utils::SafeIdI64;

// 懒加载的全局 MessageService 实例
static MESSAGE_SERVICE: Lazy<MessageService> = Lazy::new(MessageService::new_lazy);

pub async fn list_messages(
    req: HttpRequest,
    pagination: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .list_messages(&req, pagination.into_inner())
        .await
}

pub async fn send_message(
    req: HttpRequest,
    message_data: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .send_message(&req, message_data.into_inner())
        .await
}

pub async fn conversation(
    req: HttpRequest,
    peer_id: SafeIdI64,
    pagination: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .conversation(&req, peer_id.0, pagination.into_inner())
        .await
}

pub async fn mark_read(req: HttpRequest, message_id: SafeIdI64) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.mark_read(&req, message_id.0).await
}

pub async fn mark_conversation_read(
    req: HttpRequest,
    sender_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.mark_conversation_read(&req, sender_id.0).await
}

// 配置路由。私信对所有登录用户开放，只操作自己收发的数据。
pub fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/messages")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_messages))
            .route("", web::post().to(send_message))
            .route("/read-all/{id}", web::post().to(mark_conversation_read))
            .route("/{id}/read", web::post().to(mark_read))
            .route("/{id}", web::get().to(conversation)),
    );
}
