use serde::Deserialize;
use ts_rs::TS;

/// 登录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// 延长 refresh token 有效期
    pub remember_me: Option<bool>,
}
