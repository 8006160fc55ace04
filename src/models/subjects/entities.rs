use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 科目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: String,
    /// 成绩单加权系数
    pub coefficient: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
