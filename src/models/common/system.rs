use serde::Serialize;
use ts_rs::TS;

/// 运行状态
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct SystemStatusResponse {
    pub version: String,
    pub uptime_seconds: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
}
