use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生分组（一个分组属于一个年级/批次）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub promotion: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
