use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::submissions::entities::SubmissionStatus;

/// 创建/重交提交请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    /// 已注册文件的 token 列表，不能为空
    pub file_ids: Vec<String>,
    pub comment: Option<String>,
}

/// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct GradeSubmissionRequest {
    /// 0-20，步长 0.5
    pub grade: f64,
    pub comment: Option<String>,
    pub correction_file_id: Option<String>,
}

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub assignment_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

// 用于存储层的内部查询参数，作用域过滤由业务层填好
#[derive(Debug, Clone, Default)]
pub struct SubmissionListQuery {
    pub page: i64,
    pub size: i64,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
    /// 限定在某教师拥有的作业范围内（教师视角）
    pub teacher_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}
