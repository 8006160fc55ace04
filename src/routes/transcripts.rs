use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::TranscriptService;
use crate::utils::SafeIdI64;

// 懒加载的全局 TranscriptService 实例
static TRANSCRIPT_SERVICE: Lazy<TranscriptService> = Lazy::new(TranscriptService::new_lazy);

pub async fn my_transcript(req: HttpRequest) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE.my_transcript(&req).await
}

pub async fn student_transcript(
    req: HttpRequest,
    student_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE
        .student_transcript(&req, student_id.0)
        .await
}

// 配置路由
pub fn configure_transcript_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/transcripts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/me")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::get().to(my_transcript)),
            )
            .service(
                web::scope("/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(student_transcript)),
            ),
    );
}
