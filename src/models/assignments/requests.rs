use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-09-15T23:59:00Z"
    pub subject_id: i64,
    pub group_id: i64,
    /// 管理员代教师创建时必填，教师本人创建时忽略
    pub teacher_id: Option<i64>,
    pub allowed_formats: Option<Vec<String>>,
    pub max_size_mb: Option<i32>,
    pub statement_file_id: Option<String>,
}

/// 更新作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub subject_id: Option<i64>,
    pub group_id: Option<i64>,
    pub allowed_formats: Option<Vec<String>>,
    pub max_size_mb: Option<i32>,
    pub statement_file_id: Option<String>,
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub subject_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数，作用域过滤由业务层填好
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub page: i64,
    pub size: i64,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub group_id: Option<i64>,
    pub search: Option<String>,
}
