use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::SendMessageRequest;
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;

/// 发送私信
/// POST /messages
///
/// 收件人同时收到一条站内通知，通知失败不影响发送。
pub async fn send_message(
    service: &MessageService,
    request: &HttpRequest,
    req: SendMessageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录或登录已过期",
        )));
    };

    // 1. 参数校验
    if req.subject.trim().is_empty() || req.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "主题和内容不能为空",
        )));
    }

    // 2. 收件人必须存在
    match storage.get_user_by_id(req.recipient_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "收件人不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询收件人失败: {e}"),
                )),
            );
        }
    }

    let subject = req.subject.clone();
    let message = match storage.send_message(current_user.id, req).await {
        Ok(message) => message,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("发送私信失败: {e}"),
                )),
            );
        }
    };

    // 3. 通知收件人。失败只记日志，不影响发送。
    let notify = CreateNotificationRequest {
        user_id: message.recipient_id,
        title: format!("新消息来自 {}", current_user.full_name()),
        message: format!("主题：{subject}"),
        notification_type: NotificationType::Message,
    };
    if let Err(e) = storage.create_notification(notify).await {
        tracing::warn!(
            "Failed to notify user {} about message {}: {}",
            message.recipient_id,
            message.id,
            e
        );
    }

    record_audit(
        &storage,
        request,
        current_user.id,
        "messages.send",
        &message.id.to_string(),
    )
    .await;

    Ok(HttpResponse::Created().json(ApiResponse::success(message, "私信已发送")))
}
