use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::submissions::entities::Submission;

/// 提交者信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// 提交关联的作业信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionAssignmentInfo {
    pub id: i64,
    pub title: String,
    pub subject_id: i64,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

/// 提交列表项（包含提交者与作业信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub student: Option<SubmissionStudent>,
    pub assignment: Option<SubmissionAssignmentInfo>,
}

/// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}
