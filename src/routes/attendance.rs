use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{AttendanceListParams, RecordAttendanceRequest};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(
    req: HttpRequest,
    params: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&req, params.into_inner())
        .await
}

pub async fn record_attendance(
    req: HttpRequest,
    attendance_data: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_attendance(&req, attendance_data.into_inner())
        .await
}

// 配置路由。点名只开放给教师和管理员，查询对所有角色开放（学生只看自己）。
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::post().to(record_attendance)),
            )
            .route("", web::get().to(list_attendance)),
    );
}
