//! 提交实体

use sea_orm::entity::prelude::*;
use std::str::FromStr;

use crate::models::submissions::entities::{Submission, SubmissionStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    /// JSON 数组，有序的文件 token
    #[sea_orm(column_type = "Text")]
    pub file_ids: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub submitted_at: i64,
    pub version: i32,
    pub status: String,
    pub plagiarism_score: Option<f64>,
    pub grade: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub grade_comment: Option<String>,
    pub correction_file_id: Option<String>,
    /// JSON 数组，追加写入的评分历史
    #[sea_orm(column_type = "Text", nullable)]
    pub correction_history: Option<String>,
    pub graded_by: Option<i64>,
    pub graded_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> Submission {
        Submission {
            id: self.id,
            assignment_id: self.assignment_id,
            student_id: self.student_id,
            file_ids: serde_json::from_str(&self.file_ids).unwrap_or_default(),
            comment: self.comment,
            submitted_at: super::ts_to_datetime(self.submitted_at),
            version: self.version,
            status: SubmissionStatus::from_str(&self.status)
                .unwrap_or(SubmissionStatus::Submitted),
            plagiarism_score: self.plagiarism_score,
            grade: self.grade,
            grade_comment: self.grade_comment,
            correction_file_id: self.correction_file_id,
            correction_history: self
                .correction_history
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok())
                .unwrap_or_default(),
            graded_by: self.graded_by,
            graded_at: self.graded_at.map(super::ts_to_datetime),
        }
    }
}
