use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::RecordAttendanceRequest;
use crate::models::attendance::responses::AttendanceRecordedResponse;
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;
use crate::utils::validate::validate_date_ymd;

/// 批量登记考勤
/// POST /attendance（教师/管理员）
///
/// 同一学生同日同科目的记录会被覆盖，补点名直接重新提交即可。
/// 缺勤和迟到的学生收到提醒通知，通知失败不影响登记。
pub async fn record_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    req: RecordAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    // 1. 参数校验
    let date = match validate_date_ymd(&req.date) {
        Ok(normalized) => normalized,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationError,
                "日期格式必须为 YYYY-MM-DD",
            )));
        }
    };
    if req.records.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "考勤记录不能为空",
        )));
    }

    // 2. 科目必须存在，提醒文案要用科目名
    let subject = match storage.get_subject_by_id(req.subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };

    // 3. 每个登记对象必须是存在的学生
    for entry in &req.records {
        match storage.get_user_by_id(entry.student_id).await {
            Ok(Some(user)) if user.role == UserRole::Student => {}
            Ok(Some(_)) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationError,
                    format!("用户 {} 不是学生", entry.student_id),
                )));
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    format!("学生不存在: {}", entry.student_id),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询学生失败: {e}"),
                    )),
                );
            }
        }
    }

    // 4. 逐条 upsert
    let mut recorded = Vec::with_capacity(req.records.len());
    for entry in &req.records {
        match storage
            .record_attendance(
                current_user.id,
                entry.student_id,
                req.subject_id,
                &date,
                entry.status,
            )
            .await
        {
            Ok(record) => recorded.push(record),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("登记考勤失败: {e}"),
                    )),
                );
            }
        }
    }

    // 5. 缺勤和迟到的学生收到提醒。失败只记日志，不影响登记。
    for record in &recorded {
        if !record.status.needs_reminder() {
            continue;
        }
        let notify = CreateNotificationRequest {
            user_id: record.student_id,
            title: format!("考勤提醒：{}", record.status.label()),
            message: format!(
                "你在 {} 的「{}」课程中被记为{}。",
                record.date,
                subject.name,
                record.status.label()
            ),
            notification_type: NotificationType::Reminder,
        };
        if let Err(e) = storage.create_notification(notify).await {
            tracing::warn!(
                "Failed to notify student {} about attendance on {}: {}",
                record.student_id,
                record.date,
                e
            );
        }
    }

    record_audit(
        &storage,
        request,
        current_user.id,
        "attendance.record",
        &format!("subject={} date={} count={}", subject.id, date, recorded.len()),
    )
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceRecordedResponse { items: recorded },
        "考勤登记成功",
    )))
}
