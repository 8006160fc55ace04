use serde::Serialize;
use ts_rs::TS;

/// 成绩单中的单科行。只包含至少有一个已评分提交的科目。
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "transcript.ts")]
pub struct TranscriptRow {
    pub subject_id: i64,
    pub subject_name: String,
    pub subject_code: String,
    pub coefficient: f64,
    pub average: f64,
    pub grades_count: i64,
}

/// 学生成绩单
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "transcript.ts")]
pub struct TranscriptResponse {
    pub rows: Vec<TranscriptRow>,
    /// Σ(单科平均 × 系数) / Σ(系数)，没有任何已评分科目时为 None
    pub global_average: Option<f64>,
}
