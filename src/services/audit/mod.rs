//! 审计辅助
//!
//! 审计是尽力而为的旁路写入：失败只记日志，绝不让业务操作回滚。

use std::sync::Arc;

use actix_web::HttpRequest;
use tracing::warn;

use crate::storage::Storage;

/// 追加一条审计记录，失败时 warn 并继续
pub async fn record_audit(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    user_id: i64,
    action: &str,
    details: &str,
) {
    let ip_address = request
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Err(e) = storage
        .record_audit_log(user_id, action, details, ip_address)
        .await
    {
        warn!("Audit log write failed for action '{}': {}", action, e);
    }
}
