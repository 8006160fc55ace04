use serde::Serialize;
use ts_rs::TS;

/// 科目统计（教师/管理员视角，跨学生）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct SubjectStatsResponse {
    pub subject_id: i64,
    pub subject_name: String,
    /// 已评分提交数
    pub graded_count: i64,
    /// 已评分提交的平均分，无数据时为 None
    pub average: Option<f64>,
}
