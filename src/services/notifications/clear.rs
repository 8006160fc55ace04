use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 删除当前用户的全部通知
/// DELETE /notifications
pub async fn clear_notifications(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    match storage.clear_notifications(user_id).await {
        Ok(count) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!("已清空 {count} 条通知"))))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("清空通知失败: {e}"),
            )),
        ),
    }
}
