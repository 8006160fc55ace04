//! 系统邮件实体

use sea_orm::entity::prelude::*;

use crate::models::notifications::entities::SystemEmail;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "system_emails")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
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
    pub fn into_system_email(self) -> SystemEmail {
        SystemEmail {
            id: self.id,
            user_id: self.user_id,
            sender: self.sender,
            recipient: self.recipient,
            subject: self.subject,
            body: self.body,
            created_at: super::ts_to_datetime(self.created_at),
        }
    }
}
