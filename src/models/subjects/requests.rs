use serde::Deserialize;
use ts_rs::TS;

/// 创建科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
    pub coefficient: Option<f64>,
}

/// 更新科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub coefficient: Option<f64>,
}
