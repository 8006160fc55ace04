use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;
use crate::utils::SafeIdI64;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, subject_data.into_inner())
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIdI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.0, update_data.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIdI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

pub async fn subject_stats(req: HttpRequest, subject_id: SafeIdI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.subject_stats(&req, subject_id.0).await
}

// 配置路由。同一路径上不同方法的角色要求不同，用 method guard 区分。
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(create_subject)),
            )
            .route("", web::get().to(list_subjects))
            .service(
                web::scope("/{id}/stats")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(subject_stats)),
            )
            .service(
                web::scope("/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::put().to(update_subject))
                    .route("", web::delete().to(delete_subject)),
            ),
    );
}
