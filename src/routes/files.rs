use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::files::requests::RegisterFileRequest;
use crate::services::FileService;
use crate::utils::SafeFileToken;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn register_file(
    req: HttpRequest,
    file_data: web::Json<RegisterFileRequest>,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.register_file(&req, file_data.into_inner()).await
}

pub async fn get_file(req: HttpRequest, token: SafeFileToken) -> ActixResult<HttpResponse> {
    FILE_SERVICE.get_file(&req, &token.0).await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RateLimit::file_register())
                    .route(web::post().to(register_file)),
            )
            .route("/{token}", web::get().to(get_file)),
    );
}
