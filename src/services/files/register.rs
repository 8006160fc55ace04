use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FileService;
use crate::middlewares::RequireJWT;
use crate::models::files::requests::RegisterFileRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 注册文件元数据。字节由客户端直传外部 blob 存储，这里只登记引用。
/// POST /files
pub async fn register_file(
    service: &FileService,
    request: &HttpRequest,
    req: RegisterFileRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "文件名不能为空",
        )));
    }
    if req.size <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "文件大小必须为正数",
        )));
    }

    match storage.register_file(user_id, req).await {
        Ok(file) => Ok(HttpResponse::Created().json(ApiResponse::success(file, "文件注册成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("注册文件失败: {e}"),
            )),
        ),
    }
}
