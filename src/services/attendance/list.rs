use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::{AttendanceListParams, AttendanceListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date_ymd;

/// 按角色作用域列出考勤记录
/// GET /attendance：学生只看自己的，教师和管理员按过滤条件查看
pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    params: AttendanceListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    let date = match params.date {
        Some(raw) => match validate_date_ymd(&raw) {
            Ok(normalized) => Some(normalized),
            Err(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationError,
                    "日期格式必须为 YYYY-MM-DD",
                )));
            }
        },
        None => None,
    };

    let mut query = AttendanceListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        subject_id: params.subject_id,
        student_id: params.student_id,
        date,
    };

    // 学生只能查自己的考勤
    if current_user.role == UserRole::Student {
        query.student_id = Some(current_user.id);
    }

    match storage.list_attendance_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取考勤列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考勤列表失败: {e}"),
            )),
        ),
    }
}
