use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::notifications::requests::NotificationListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 当前用户的通知列表
/// GET /notifications
pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    params: NotificationListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    let unread_only = params.unread_only.unwrap_or(false);
    match storage
        .list_notifications_with_pagination(
            user_id,
            params.pagination.page,
            params.pagination.size,
            unread_only,
        )
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取通知列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询通知失败: {e}"),
            )),
        ),
    }
}
