use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::UserRole;

/// 创建用户请求（管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    /// 学生必须归属一个分组
    pub group_id: Option<i64>,
}

/// 用户列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub group_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: i64,
    pub size: i64,
    pub role: Option<UserRole>,
    pub group_id: Option<i64>,
    pub search: Option<String>,
}

impl From<UserListParams> for UserListQuery {
    fn from(p: UserListParams) -> Self {
        Self {
            page: p.pagination.page,
            size: p.pagination.size,
            role: p.role,
            group_id: p.group_id,
            search: p.search,
        }
    }
}
