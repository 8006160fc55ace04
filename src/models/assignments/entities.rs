use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 作业定义
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub group_id: i64,
    /// 允许的文件扩展名（小写，不带点）
    pub allowed_formats: Vec<String>,
    pub max_size_mb: i32,
    /// 题面文件，外部 blob 存储的不透明 token
    pub statement_file_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 是否已过截止时间。派生属性，读取时计算，从不落库。
    pub fn is_overdue_at(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        now > self.deadline
    }

    /// 单个文件的字节数上限
    pub fn max_size_bytes(&self) -> i64 {
        self.max_size_mb as i64 * 1024 * 1024
    }

    /// 扩展名是否在白名单内（两侧均大小写不敏感）
    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext = ext.to_ascii_lowercase();
        self.allowed_formats
            .iter()
            .any(|f| f.to_ascii_lowercase() == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample(deadline: chrono::DateTime<Utc>) -> Assignment {
        Assignment {
            id: 1,
            title: "TP1".into(),
            description: "desc".into(),
            deadline,
            subject_id: 1,
            teacher_id: 1,
            group_id: 1,
            allowed_formats: vec!["pdf".into(), "zip".into()],
            max_size_mb: 10,
            statement_file_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overdue_is_derived() {
        let now = Utc::now();
        let a = sample(now + Duration::hours(1));
        assert!(!a.is_overdue_at(now));
        assert!(a.is_overdue_at(now + Duration::hours(2)));
    }

    #[test]
    fn test_accepts_extension_case_insensitive() {
        let a = sample(Utc::now());
        assert!(a.accepts_extension("PDF"));
        assert!(a.accepts_extension("zip"));
        assert!(!a.accepts_extension("exe"));
    }

    #[test]
    fn test_accepts_extension_uppercase_stored_format() {
        let mut a = sample(Utc::now());
        a.allowed_formats = vec!["PDF".into()];
        assert!(a.accepts_extension("pdf"));
        assert!(a.accepts_extension("PDF"));
        assert!(!a.accepts_extension("zip"));
    }

    #[test]
    fn test_max_size_bytes() {
        let a = sample(Utc::now());
        assert_eq!(a.max_size_bytes(), 10 * 1024 * 1024);
    }
}
