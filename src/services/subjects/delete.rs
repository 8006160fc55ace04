use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 删除科目，其下作业与提交级联删除
/// DELETE /subjects/{id}（管理员）
pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            if let Some(admin_id) = RequireJWT::extract_user_id(request) {
                record_audit(
                    &storage,
                    request,
                    admin_id,
                    "subjects.delete",
                    &subject_id.to_string(),
                )
                .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("科目已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除科目失败: {e}"),
            )),
        ),
    }
}
