use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::common::system::SystemStatusResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, AppStartTime};

pub async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("ok")))
}

pub async fn status(request: HttpRequest) -> ActixResult<HttpResponse> {
    let start_time = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);
    let status = SystemStatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: chrono::Utc::now()
            .signed_duration_since(start_time)
            .num_seconds(),
        start_time,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(status, "获取运行状态成功")))
}

// 配置路由。health 不鉴权，供部署探活使用。
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .route("/health", web::get().to(health))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::scope("/status")
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .route("", web::get().to(status)),
                    ),
            ),
    );
}
