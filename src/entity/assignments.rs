//! 作业实体

use sea_orm::entity::prelude::*;

use crate::models::assignments::entities::Assignment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub deadline: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub group_id: i64,
    /// JSON 数组，如 ["pdf","zip"]
    #[sea_orm(column_type = "Text")]
    pub allowed_formats: String,
    pub max_size_mb: i32,
    pub statement_file_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id"
    )]
    Group,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> Assignment {
        Assignment {
            id: self.id,
            title: self.title,
            description: self.description,
            deadline: super::ts_to_datetime(self.deadline),
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            group_id: self.group_id,
            allowed_formats: serde_json::from_str(&self.allowed_formats).unwrap_or_default(),
            max_size_mb: self.max_size_mb,
            statement_file_id: self.statement_file_id,
            created_at: super::ts_to_datetime(self.created_at),
            updated_at: super::ts_to_datetime(self.updated_at),
        }
    }
}
