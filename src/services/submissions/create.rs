use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::{CreateNotificationRequest, RecordEmailRequest};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 提交或重交作业
/// POST /submissions（学生）
///
/// 同一 (作业, 学生) 只保留一行：重交原地覆盖并递增 version，
/// 状态按当前时间重新计算，旧成绩保留不清除。
pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    // 1. 作业必须存在
    let assignment = match storage.get_assignment_by_id(req.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
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

    // 2. 只能提交本分组的作业
    if current_user.group_id != Some(assignment.group_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::GroupPermissionDenied,
            "只能提交本分组的作业",
        )));
    }

    // 3. 文件校验：token 必须已注册，扩展名与大小符合作业要求
    if req.file_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "提交必须包含至少一个文件",
        )));
    }
    for token in &req.file_ids {
        let file = match storage.get_file_by_token(token).await {
            Ok(Some(file)) => file,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    format!("文件不存在: {token}"),
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
        };
        let accepted = file
            .extension()
            .is_some_and(|ext| assignment.accepts_extension(&ext));
        if !accepted {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationError,
                format!(
                    "文件 {} 格式不被接受，允许的格式: {}",
                    file.name,
                    assignment.allowed_formats.join(", ")
                ),
            )));
        }
        if file.size > assignment.max_size_bytes() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationError,
                format!("文件 {} 超过大小上限 {} MB", file.name, assignment.max_size_mb),
            )));
        }
    }

    // 4. 状态按提交时刻计算，截止时刻本身不算迟交
    let status = SubmissionStatus::for_deadline(Utc::now(), assignment.deadline);

    // 5. 相似度检测：与同作业其他学生的提交说明比较。检测失败不阻塞提交。
    let plagiarism_score = match service.get_plagiarism_checker(request) {
        Some(checker) => match storage
            .list_peer_comments(assignment.id, current_user.id)
            .await
        {
            Ok(peers) => {
                let candidate = req.comment.as_deref().unwrap_or("");
                Some(checker.score(candidate, &peers))
            }
            Err(e) => {
                tracing::warn!(
                    "Plagiarism check skipped for assignment {}: {}",
                    assignment.id,
                    e
                );
                None
            }
        },
        None => None,
    };

    let (submission, is_resubmission) = match storage
        .upsert_submission(current_user.id, req, status, plagiarism_score)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存提交失败: {e}"),
                )),
            );
        }
    };

    // 6. 通知教师、给学生回执。失败只记日志。
    let notify = CreateNotificationRequest {
        user_id: assignment.teacher_id,
        title: format!("收到提交：{}", assignment.title),
        message: format!(
            "{} 提交了作业「{}」（第 {} 版，状态 {}）",
            current_user.full_name(),
            assignment.title,
            submission.version,
            submission.status
        ),
        notification_type: NotificationType::Submission,
    };
    if let Err(e) = storage.create_notification(notify).await {
        tracing::warn!(
            "Failed to notify teacher {} about submission {}: {}",
            assignment.teacher_id,
            submission.id,
            e
        );
    }
    let receipt = RecordEmailRequest {
        user_id: current_user.id,
        recipient: current_user.email.clone(),
        subject: format!("提交回执：{}", assignment.title),
        body: format!(
            "已收到你对作业「{}」的第 {} 次提交，当前状态：{}。",
            assignment.title, submission.version, submission.status
        ),
    };
    if let Err(e) = storage.record_system_email(receipt).await {
        tracing::warn!(
            "Failed to record receipt email for submission {}: {}",
            submission.id,
            e
        );
    }

    let action = if is_resubmission {
        "submissions.resubmit"
    } else {
        "submissions.create"
    };
    record_audit(
        &storage,
        request,
        current_user.id,
        action,
        &submission.id.to_string(),
    )
    .await;

    let message = if is_resubmission {
        "重交成功"
    } else {
        "提交成功"
    };
    Ok(HttpResponse::Created().json(ApiResponse::success(submission, message)))
}
