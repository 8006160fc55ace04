use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::attendance::entities::AttendanceRecord;

/// 考勤关联的学生信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// 考勤关联的科目信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceSubjectInfo {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// 考勤列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub record: AttendanceRecord,
    pub student: Option<AttendanceStudent>,
    pub subject: Option<AttendanceSubjectInfo>,
}

/// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceListItem>,
    pub pagination: PaginationInfo,
}

/// 批量登记结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceRecordedResponse {
    pub items: Vec<AttendanceRecord>,
}
