//! 审计日志存储操作

use super::SeaOrmStorage;
use crate::entity::audit_logs::ActiveModel;
use crate::errors::{AcademiaError, Result};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 追加一条审计记录
    pub async fn record_audit_log_impl(
        &self,
        user_id: i64,
        action: &str,
        details: &str,
        ip_address: Option<String>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            action: Set(action.to_string()),
            details: Set(details.to_string()),
            ip_address: Set(ip_address),
            created_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("写入审计日志失败: {e}")))?;

        Ok(())
    }
}
