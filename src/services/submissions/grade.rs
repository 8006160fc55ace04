use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::{CreateNotificationRequest, RecordEmailRequest};
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;
use crate::utils::validate::validate_grade;

/// 评分
/// POST /submissions/{id}/grade（作业教师本人或管理员）
///
/// 每次评分都追加一条 correction_history 记录，历史从不截断。
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "提交关联的作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && assignment.teacher_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能给自己作业下的提交评分",
        )));
    }

    if let Err(e) = validate_grade(req.grade) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeOutOfRange, e)));
    }

    // 批改文件（如有）必须已注册
    if let Some(token) = &req.correction_file_id {
        match storage.get_file_by_token(token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    format!("批改文件不存在: {token}"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询文件失败: {e}"),
                    )),
                );
            }
        }
    }

    let grade = req.grade;
    let graded = match storage
        .grade_submission(submission_id, current_user.id, req)
        .await
    {
        Ok(Some(graded)) => graded,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("评分失败: {e}"),
                )),
            );
        }
    };

    // 通知学生并记录邮件。失败只记日志，成绩已落库。
    let notify = CreateNotificationRequest {
        user_id: graded.student_id,
        title: format!("作业已评分：{}", assignment.title),
        message: format!("你的作业「{}」已评分：{grade}/20", assignment.title),
        notification_type: NotificationType::Grading,
    };
    if let Err(e) = storage.create_notification(notify).await {
        tracing::warn!(
            "Failed to notify student {} about grading of submission {}: {}",
            graded.student_id,
            graded.id,
            e
        );
    }
    match storage.get_user_by_id(graded.student_id).await {
        Ok(Some(student)) => {
            let email = RecordEmailRequest {
                user_id: student.id,
                recipient: student.email.clone(),
                subject: format!("作业已评分：{}", assignment.title),
                body: format!(
                    "{} 你好：\n\n你的作业「{}」已评分，成绩 {grade}/20。",
                    student.full_name(),
                    assignment.title
                ),
            };
            if let Err(e) = storage.record_system_email(email).await {
                tracing::warn!(
                    "Failed to record grading email for submission {}: {}",
                    graded.id,
                    e
                );
            }
        }
        Ok(None) => {
            tracing::warn!(
                "Student {} of submission {} no longer exists, skipping email",
                graded.student_id,
                graded.id
            );
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load student {} for grading email: {}",
                graded.student_id,
                e
            );
        }
    }

    record_audit(
        &storage,
        request,
        current_user.id,
        "submissions.grade",
        &submission_id.to_string(),
    )
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "评分成功")))
}
