use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::AssignmentListItem;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 作业详情
/// GET /assignments/{id}
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    // 学生只能看本分组的作业，教师只能看自己发布的
    match current_user.role {
        UserRole::Student => {
            if current_user.group_id != Some(assignment.group_id) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::GroupPermissionDenied,
                    "无权查看其他分组的作业",
                )));
            }
        }
        UserRole::Teacher => {
            if assignment.teacher_id != current_user.id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "无权查看其他教师的作业",
                )));
            }
        }
        UserRole::Admin => {}
    }

    let is_overdue = assignment.is_overdue_at(Utc::now());
    let item = AssignmentListItem {
        assignment,
        is_overdue,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(item, "获取作业详情成功")))
}
