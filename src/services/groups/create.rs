use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::groups::requests::CreateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 创建分组
/// POST /groups（管理员）
pub async fn create_group(
    service: &GroupService,
    request: &HttpRequest,
    req: CreateGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() || req.promotion.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "分组名称与届别不能为空",
        )));
    }

    match storage.create_group(req).await {
        Ok(group) => {
            if let Some(admin_id) = RequireJWT::extract_user_id(request) {
                record_audit(&storage, request, admin_id, "groups.create", &group.name).await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(group, "分组创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建分组失败: {e}"),
            )),
        ),
    }
}
