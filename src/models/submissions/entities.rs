use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "submission.ts")]
pub enum SubmissionStatus {
    Submitted, // 按时提交
    Late,      // 迟交
    Graded,    // 已评分
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const LATE: &'static str = "LATE";
    pub const GRADED: &'static str = "GRADED";

    /// 根据截止时间计算提交状态。每次提交/重交都重新计算，从不沿用旧值。
    pub fn for_deadline(now: DateTime<Utc>, deadline: DateTime<Utc>) -> Self {
        if now > deadline {
            SubmissionStatus::Late
        } else {
            SubmissionStatus::Submitted
        }
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::LATE => Ok(SubmissionStatus::Late),
            SubmissionStatus::GRADED => Ok(SubmissionStatus::Graded),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: SUBMITTED, LATE, GRADED"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Late => write!(f, "{}", SubmissionStatus::LATE),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(SubmissionStatus::Submitted),
            "LATE" => Ok(SubmissionStatus::Late),
            "GRADED" => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 一次评分的历史记录，追加写入，从不截断
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct CorrectionRecord {
    pub grade: f64,
    pub comment: Option<String>,
    pub graded_by: i64,
    pub graded_at: DateTime<Utc>,
}

/// 提交实体。每个 (assignment_id, student_id) 至多一行，
/// 重交原地更新并递增 version。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    /// 外部 blob 存储的文件 token，有序
    pub file_ids: Vec<String>,
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
    /// 从 1 开始，每次重交 +1
    pub version: i32,
    pub status: SubmissionStatus,
    /// 相似度指标，0-100
    pub plagiarism_score: Option<f64>,
    /// 0-20。重交后不清除，可能与非 GRADED 状态并存（见产品待定项）
    pub grade: Option<f64>,
    pub grade_comment: Option<String>,
    pub correction_file_id: Option<String>,
    pub correction_history: Vec<CorrectionRecord>,
    pub graded_by: Option<i64>,
    pub graded_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_for_deadline() {
        let deadline = Utc::now();
        assert_eq!(
            SubmissionStatus::for_deadline(deadline - Duration::hours(1), deadline),
            SubmissionStatus::Submitted
        );
        assert_eq!(
            SubmissionStatus::for_deadline(deadline + Duration::hours(1), deadline),
            SubmissionStatus::Late
        );
        // 截止时刻本身不算迟交
        assert_eq!(
            SubmissionStatus::for_deadline(deadline, deadline),
            SubmissionStatus::Submitted
        );
    }

    #[test]
    fn test_status_round_trip() {
        use std::str::FromStr;
        for status in [
            SubmissionStatus::Submitted,
            SubmissionStatus::Late,
            SubmissionStatus::Graded,
        ] {
            assert_eq!(
                SubmissionStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
        assert!(SubmissionStatus::from_str("PENDING").is_err());
    }
}
