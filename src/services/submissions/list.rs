use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::{SubmissionListParams, SubmissionListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 按角色作用域列出提交
/// GET /submissions：学生只看自己的，教师只看自己作业下的，管理员看全部
pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    params: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    let mut query = SubmissionListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        assignment_id: params.assignment_id,
        status: params.status,
        ..Default::default()
    };

    match current_user.role {
        UserRole::Student => {
            query.student_id = Some(current_user.id);
        }
        UserRole::Teacher => {
            query.teacher_id = Some(current_user.id);
        }
        UserRole::Admin => {}
    }

    match storage.list_submissions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取提交列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交列表失败: {e}"),
            )),
        ),
    }
}
