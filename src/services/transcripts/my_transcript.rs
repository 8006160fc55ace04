use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::TranscriptService;
use super::compute::compute_transcript;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 当前学生的成绩单
/// GET /transcripts/me（学生）
pub async fn my_transcript(
    service: &TranscriptService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    build_transcript(&storage, user_id).await
}

/// 指定学生的成绩单
/// GET /transcripts/{student_id}（教师/管理员）
pub async fn student_transcript(
    service: &TranscriptService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) | Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    build_transcript(&storage, student_id).await
}

async fn build_transcript(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let subjects = match storage.list_subjects().await {
        Ok(subjects) => subjects,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };
    let entries = match storage.list_graded_entries_for_student(student_id).await {
        Ok(entries) => entries,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩失败: {e}"),
                )),
            );
        }
    };

    let transcript = compute_transcript(&subjects, &entries);
    Ok(HttpResponse::Ok().json(ApiResponse::success(transcript, "获取成绩单成功")))
}
