//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assignments;
pub mod attendance_records;
pub mod audit_logs;
pub mod files;
pub mod groups;
pub mod messages;
pub mod notifications;
pub mod subjects;
pub mod submissions;
pub mod system_emails;
pub mod users;

/// 实体层的 i64 Unix 秒转业务层 UTC 时间
pub(crate) fn ts_to_datetime(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp(ts, 0).unwrap_or_default()
}
