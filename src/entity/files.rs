//! 文件元数据实体

use sea_orm::entity::prelude::*;

use crate::models::files::entities::File;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub token: String,
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub uploaded_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_file(self) -> File {
        File {
            id: self.id,
            token: self.token,
            name: self.name,
            mime_type: self.mime_type,
            size: self.size,
            uploaded_by: self.uploaded_by,
            created_at: super::ts_to_datetime(self.created_at),
        }
    }
}
