//! 文件元数据存储操作
//!
//! 只登记元数据，字节内容由客户端直传外部 blob 存储。

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Column, Entity as Files};
use crate::errors::{AcademiaError, Result};
use crate::models::files::{entities::File, requests::RegisterFileRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl SeaOrmStorage {
    /// 登记文件元数据，生成不透明 token
    pub async fn register_file_impl(&self, user_id: i64, req: RegisterFileRequest) -> Result<File> {
        let now = chrono::Utc::now().timestamp();
        let token = Uuid::new_v4().to_string();

        let model = ActiveModel {
            token: Set(token),
            name: Set(req.name),
            mime_type: Set(req.mime_type),
            size: Set(req.size),
            uploaded_by: Set(user_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("登记文件失败: {e}")))?;

        Ok(result.into_file())
    }

    /// 通过 token 获取文件
    pub async fn get_file_by_token_impl(&self, token: &str) -> Result<Option<File>> {
        let result = Files::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }
}
