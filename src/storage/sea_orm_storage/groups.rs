use super::SeaOrmStorage;
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::errors::{AcademiaError, Result};
use crate::models::groups::{entities::Group, requests::CreateGroupRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建分组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            promotion: Set(req.promotion),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("创建分组失败: {e}")))?;

        Ok(result.into_group())
    }

    /// 通过 ID 获取分组
    pub async fn get_group_by_id_impl(&self, id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 列出全部分组
    pub async fn list_groups_impl(&self) -> Result<Vec<Group>> {
        let results = Groups::find()
            .order_by_desc(Column::Promotion)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询分组列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_group()).collect())
    }
}
