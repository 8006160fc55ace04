use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;

/// 作业列表项，附带读取时计算的过期标记
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub is_overdue: bool,
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}
