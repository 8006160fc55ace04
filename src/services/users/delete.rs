use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 停用用户。历史提交、成绩与审计记录全部保留。
/// DELETE /users/{id}（管理员）
pub async fn deactivate_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 管理员不能停用自己，避免把系统锁死
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "不能停用当前登录账号",
        )));
    }

    match storage.deactivate_user(user_id).await {
        Ok(true) => {
            if let Some(admin_id) = RequireJWT::extract_user_id(request) {
                record_audit(
                    &storage,
                    request,
                    admin_id,
                    "users.deactivate",
                    &user_id.to_string(),
                )
                .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("用户已停用")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("停用用户失败: {e}"),
            )),
        ),
    }
}
