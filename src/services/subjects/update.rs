use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 更新科目
/// PUT /subjects/{id}（管理员）
pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    req: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(coefficient) = req.coefficient
        && coefficient <= 0.0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "科目系数必须为正数",
        )));
    }

    // 改代码时检查唯一性
    if let Some(ref code) = req.code {
        match storage.get_subject_by_code(code).await {
            Ok(Some(existing)) if existing.id != subject_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectCodeAlreadyExists,
                    "该科目代码已存在",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询科目失败: {e}"),
                    ),
                ));
            }
        }
    }

    match storage.update_subject(subject_id, req).await {
        Ok(Some(subject)) => {
            if let Some(admin_id) = RequireJWT::extract_user_id(request) {
                record_audit(&storage, request, admin_id, "subjects.update", &subject.code).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "科目更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新科目失败: {e}"),
            )),
        ),
    }
}
