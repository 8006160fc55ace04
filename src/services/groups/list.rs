use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode};

/// 列出全部分组
/// GET /groups
pub async fn list_groups(
    service: &GroupService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_groups().await {
        Ok(groups) => Ok(HttpResponse::Ok().json(ApiResponse::success(groups, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询分组列表失败: {e}"),
            )),
        ),
    }
}
