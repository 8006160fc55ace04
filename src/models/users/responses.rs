use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::users::entities::User;

/// 用户列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}
