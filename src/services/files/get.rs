use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FileService;
use crate::models::{ApiResponse, ErrorCode};

/// 按 token 查询文件元数据
/// GET /files/{token}
pub async fn get_file(
    service: &FileService,
    request: &HttpRequest,
    token: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_file_by_token(token).await {
        Ok(Some(file)) => Ok(HttpResponse::Ok().json(ApiResponse::success(file, "获取文件成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "文件不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询文件失败: {e}"),
            )),
        ),
    }
}
