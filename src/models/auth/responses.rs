use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::User;

/// 登录响应，refresh token 通过 HttpOnly Cookie 下发
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// 刷新令牌响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct RefreshResponse {
    pub access_token: String,
}
