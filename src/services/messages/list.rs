use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::common::pagination::PaginationQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 当前用户收发的全部私信，新的在前
/// GET /messages
pub async fn list_messages(
    service: &MessageService,
    request: &HttpRequest,
    pagination: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    match storage
        .list_messages_for_user(user_id, pagination.page, pagination.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取私信列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询私信失败: {e}"),
            )),
        ),
    }
}
