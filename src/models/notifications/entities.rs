use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "notification.ts")]
pub enum NotificationType {
    Assignment, // 新作业发布
    Submission, // 学生提交了作业
    Grading,    // 作业已评分
    Reminder,   // 考勤等提醒
    Message,    // 站内私信
    System,     // 其他系统通知
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotificationType::Assignment => "ASSIGNMENT",
            NotificationType::Submission => "SUBMISSION",
            NotificationType::Grading => "GRADING",
            NotificationType::Reminder => "REMINDER",
            NotificationType::Message => "MESSAGE",
            NotificationType::System => "SYSTEM",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASSIGNMENT" => Ok(NotificationType::Assignment),
            "SUBMISSION" => Ok(NotificationType::Submission),
            "GRADING" => Ok(NotificationType::Grading),
            "REMINDER" => Ok(NotificationType::Reminder),
            "MESSAGE" => Ok(NotificationType::Message),
            "SYSTEM" => Ok(NotificationType::System),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

/// 站内通知
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 系统邮件记录（通知的第二通道，仅落库，不做真实投递）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct SystemEmail {
    pub id: i64,
    pub user_id: i64,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_notification_type_round_trip() {
        for ty in [
            NotificationType::Assignment,
            NotificationType::Submission,
            NotificationType::Grading,
            NotificationType::Reminder,
            NotificationType::Message,
            NotificationType::System,
        ] {
            assert_eq!(NotificationType::from_str(&ty.to_string()).unwrap(), ty);
        }
        assert!(NotificationType::from_str("CARRIER_PIGEON").is_err());
    }
}
