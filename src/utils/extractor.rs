use std::future::{Ready, ready};

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path_error(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 路径参数 `{id}` 的安全提取器：必须是正整数，否则返回统一格式的 400。
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(SafeIdI64)
            .ok_or_else(|| bad_path_error("无效的 ID"));
        ready(parsed)
    }
}

/// 路径参数 `{token}` 的安全提取器：非空且不超过 64 字符。
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("token")
            .filter(|raw| !raw.is_empty() && raw.len() <= 64)
            .map(|raw| SafeFileToken(raw.to_string()))
            .ok_or_else(|| bad_path_error("无效的文件 token"));
        ready(parsed)
    }
}
