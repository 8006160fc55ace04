use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};
use crate::models::assignments::responses::AssignmentListResponse;
use crate::models::common::pagination::PaginationInfo;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 按角色作用域列出作业
/// GET /assignments：学生看本分组，教师看自己发布的，管理员看全部
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    let mut query = AssignmentListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        subject_id: params.subject_id,
        search: params.search,
        ..Default::default()
    };

    match current_user.role {
        UserRole::Student => {
            // 无分组的学生看不到任何作业
            let Some(group_id) = current_user.group_id else {
                let empty = AssignmentListResponse {
                    items: Vec::new(),
                    pagination: PaginationInfo {
                        page: query.page.max(1),
                        page_size: query.size.clamp(1, 100),
                        total: 0,
                        total_pages: 0,
                    },
                };
                return Ok(HttpResponse::Ok().json(ApiResponse::success(empty, "获取作业列表成功")));
            };
            query.group_id = Some(group_id);
        }
        UserRole::Teacher => {
            query.teacher_id = Some(current_user.id);
        }
        UserRole::Admin => {}
    }

    match storage.list_assignments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取作业列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业列表失败: {e}"),
            )),
        ),
    }
}
