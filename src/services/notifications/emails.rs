use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::common::pagination::PaginationQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 当前用户的系统邮件记录
/// GET /notifications/emails
pub async fn list_emails(
    service: &NotificationService,
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
        .list_system_emails_with_pagination(user_id, pagination.page, pagination.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取邮件记录成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询邮件记录失败: {e}"),
            )),
        ),
    }
}
