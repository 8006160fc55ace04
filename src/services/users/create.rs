use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::audit::record_audit;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

/// 创建用户
/// POST /users（管理员）
pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    mut req: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 参数校验
    if let Err(e) = validate_email(&req.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, e)));
    }
    if let Err(e) = validate_password_simple(&req.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, e)));
    }
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "姓名不能为空",
        )));
    }

    // 2. 学生必须归属一个存在的分组，其他角色不挂分组
    match req.role {
        UserRole::Student => {
            let Some(group_id) = req.group_id else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationError,
                    "学生必须指定分组",
                )));
            };
            match storage.get_group_by_id(group_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::GroupNotFound,
                        "分组不存在",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询分组失败: {e}"),
                        ),
                    ));
                }
            }
        }
        _ => {
            req.group_id = None;
        }
    }

    // 3. 邮箱唯一
    match storage.get_user_by_email(&req.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "该邮箱已被注册",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    }

    // 4. 哈希密码后入库
    req.password = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建用户失败",
                )),
            );
        }
    };

    match storage.create_user(req).await {
        Ok(user) => {
            if let Some(admin_id) = RequireJWT::extract_user_id(request) {
                record_audit(&storage, request, admin_id, "users.create", &user.email).await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "用户创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建用户失败: {e}"),
            )),
        ),
    }
}
