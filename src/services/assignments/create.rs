use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::{CreateNotificationRequest, RecordEmailRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 发布作业
/// POST /assignments（教师/管理员）
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    // 1. 参数校验
    if req.title.trim().is_empty() || req.description.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "标题和描述不能为空",
        )));
    }
    if req.deadline <= Utc::now() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "截止时间必须晚于当前时间",
        )));
    }
    if let Some(max_size_mb) = req.max_size_mb
        && max_size_mb <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "文件大小上限必须为正数",
        )));
    }

    // 2. 归属的科目与分组必须存在
    match storage.get_subject_by_id(req.subject_id).await {
        Ok(Some(_)) => {}
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
    }
    let group = match storage.get_group_by_id(req.group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                "分组不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分组失败: {e}"),
                )),
            );
        }
    };

    // 3. 教师本人发布时忽略请求中的 teacher_id；管理员代发时必填
    let teacher_id = match current_user.role {
        UserRole::Teacher => current_user.id,
        UserRole::Admin => {
            let Some(teacher_id) = req.teacher_id else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationError,
                    "管理员发布作业时必须指定授课教师",
                )));
            };
            match storage.get_user_by_id(teacher_id).await {
                Ok(Some(teacher)) if teacher.role == UserRole::Teacher => teacher_id,
                Ok(Some(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::ValidationError,
                        "指定的用户不是教师",
                    )));
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::UserNotFound,
                        "指定的教师不存在",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询教师失败: {e}"),
                        ),
                    ));
                }
            }
        }
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "学生无权发布作业",
            )));
        }
    };

    let assignment = match storage.create_assignment(teacher_id, req).await {
        Ok(assignment) => assignment,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建作业失败: {e}"),
                )),
            );
        }
    };

    // 4. 向分组学生扇出通知与邮件。失败只记日志，不影响作业创建。
    match storage.list_group_students(assignment.group_id).await {
        Ok(students) => {
            for student in students {
                let notify = CreateNotificationRequest {
                    user_id: student.id,
                    title: format!("新作业：{}", assignment.title),
                    message: format!(
                        "分组 {} 发布了新作业「{}」，截止时间 {}",
                        group.name,
                        assignment.title,
                        assignment.deadline.format("%Y-%m-%d %H:%M UTC")
                    ),
                    notification_type: NotificationType::Assignment,
                };
                if let Err(e) = storage.create_notification(notify).await {
                    tracing::warn!(
                        "Failed to notify student {} about assignment {}: {}",
                        student.id,
                        assignment.id,
                        e
                    );
                }
                let email = RecordEmailRequest {
                    user_id: student.id,
                    recipient: student.email.clone(),
                    subject: format!("新作业：{}", assignment.title),
                    body: format!(
                        "{} 你好：\n\n新作业「{}」已发布，请在 {} 前完成提交。\n\n{}",
                        student.full_name(),
                        assignment.title,
                        assignment.deadline.format("%Y-%m-%d %H:%M UTC"),
                        assignment.description
                    ),
                };
                if let Err(e) = storage.record_system_email(email).await {
                    tracing::warn!(
                        "Failed to record email for student {} about assignment {}: {}",
                        student.id,
                        assignment.id,
                        e
                    );
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                "Failed to list students of group {} for assignment fan-out: {}",
                assignment.group_id,
                e
            );
        }
    }

    record_audit(
        &storage,
        request,
        current_user.id,
        "assignments.create",
        &assignment.id.to_string(),
    )
    .await;

    Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "作业发布成功")))
}
