use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::services::audit::record_audit;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

/// remember_me 时 refresh token 的有效期（天）
const REMEMBER_ME_DAYS: i64 = 30;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 根据邮箱获取用户
    match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => {
            // 2. 验证密码；停用账号与错误密码同样返回 401，不暴露区别
            if !user.is_active || !verify_password(&login_request.password, &user.password_hash) {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "邮箱或密码错误",
                )));
            }

            // 3. 更新最后登录时间
            let _ = storage.update_last_login(user.id).await;

            // 4. 生成令牌对
            let refresh_expiry = login_request
                .remember_me
                .unwrap_or(false)
                .then(|| chrono::Duration::days(REMEMBER_ME_DAYS));

            match JwtUtils::generate_token_pair(user.id, &user.role.to_string(), refresh_expiry) {
                Ok(token_pair) => {
                    tracing::info!("User {} logged in successfully", user.id);
                    record_audit(&storage, request, user.id, "auth.login", &user.email).await;

                    let refresh_cookie =
                        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                    let response = LoginResponse {
                        access_token: token_pair.access_token,
                        user,
                    };

                    Ok(HttpResponse::Ok()
                        .cookie(refresh_cookie)
                        .json(ApiResponse::success(response, "登录成功")))
                }
                Err(e) => {
                    tracing::error!("Failed to generate JWT token: {}", e);
                    Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "登录失败，无法生成令牌",
                        )),
                    )
                }
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "邮箱或密码错误",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("登录失败: {e}"),
            )),
        ),
    }
}
