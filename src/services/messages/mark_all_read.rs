use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 标记某发件人发来的全部私信已读
/// POST /messages/read-all/{id}
pub async fn mark_conversation_read(
    service: &MessageService,
    request: &HttpRequest,
    sender_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    match storage.mark_conversation_read(user_id, sender_id).await {
        Ok(count) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty(format!("已标记 {count} 条私信为已读")))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("标记已读失败: {e}"),
            )),
        ),
    }
}
