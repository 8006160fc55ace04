use serde::Deserialize;
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceStatus;
use crate::models::common::pagination::PaginationQuery;

/// 考勤列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub subject_id: Option<i64>,
    pub student_id: Option<i64>,
    /// YYYY-MM-DD
    pub date: Option<String>,
}

// 存储层的考勤列表查询
#[derive(Debug, Clone, Default)]
pub struct AttendanceListQuery {
    pub page: i64,
    pub size: i64,
    pub subject_id: Option<i64>,
    pub student_id: Option<i64>,
    pub date: Option<String>,
}

/// 单个学生的考勤登记项
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

/// 批量登记考勤请求。教师对整组点名，一次提交当天的全部记录。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct RecordAttendanceRequest {
    pub subject_id: i64,
    /// YYYY-MM-DD
    pub date: String,
    pub records: Vec<AttendanceEntry>,
}
