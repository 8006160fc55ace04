use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "attendance.ts")]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
}

impl AttendanceStatus {
    /// 缺勤和迟到需要提醒学生本人
    pub fn needs_reminder(&self) -> bool {
        matches!(self, AttendanceStatus::Absent | AttendanceStatus::Late)
    }

    /// 提醒文案里的中文说法
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "出勤",
            AttendanceStatus::Absent => "缺勤",
            AttendanceStatus::Late => "迟到",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Late => "LATE",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRESENT" => Ok(AttendanceStatus::Present),
            "ABSENT" => Ok(AttendanceStatus::Absent),
            "LATE" => Ok(AttendanceStatus::Late),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

/// 考勤记录。同一 (学生, 科目, 日期) 只保留一行，重复登记覆盖状态。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    /// 考勤日期，YYYY-MM-DD
    pub date: String,
    pub status: AttendanceStatus,
    pub recorded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ] {
            let parsed = AttendanceStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
        assert!(AttendanceStatus::from_str("SLEEPING").is_err());
    }

    #[test]
    fn test_needs_reminder() {
        assert!(!AttendanceStatus::Present.needs_reminder());
        assert!(AttendanceStatus::Absent.needs_reminder());
        assert!(AttendanceStatus::Late.needs_reminder());
    }
}
