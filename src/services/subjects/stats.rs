use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::responses::SubjectStatsResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 查看科目下已评分提交的统计
/// GET /subjects/{id}/stats（教师/管理员）
pub async fn subject_stats(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };

    match storage.subject_graded_stats(subject_id).await {
        Ok((graded_count, average)) => {
            let stats = SubjectStatsResponse {
                subject_id: subject.id,
                subject_name: subject.name,
                graded_count,
                average,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "获取科目统计成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("统计科目成绩失败: {e}"),
            )),
        ),
    }
}
