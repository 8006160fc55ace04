//! 通知实体

use sea_orm::entity::prelude::*;
use std::str::FromStr;

use crate::models::notifications::entities::{Notification, NotificationType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_notification(self) -> Notification {
        Notification {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            notification_type: NotificationType::from_str(&self.notification_type)
                .unwrap_or(NotificationType::System),
            is_read: self.is_read,
            created_at: super::ts_to_datetime(self.created_at),
        }
    }
}
