pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod files;
pub mod groups;
pub mod messages;
pub mod notifications;
pub mod subjects;
pub mod submissions;
pub mod transcripts;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于运行状态上报
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
