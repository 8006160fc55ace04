use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 创建科目
/// POST /subjects（管理员）
pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    req: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() || req.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "科目名称与代码不能为空",
        )));
    }
    if let Some(coefficient) = req.coefficient
        && coefficient <= 0.0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "科目系数必须为正数",
        )));
    }

    // 代码唯一
    match storage.get_subject_by_code(&req.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectCodeAlreadyExists,
                "该科目代码已存在",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(req).await {
        Ok(subject) => {
            if let Some(admin_id) = RequireJWT::extract_user_id(request) {
                record_audit(&storage, request, admin_id, "subjects.create", &subject.code).await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "科目创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建科目失败: {e}"),
            )),
        ),
    }
}
