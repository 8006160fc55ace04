use super::SeaOrmStorage;
use crate::entity::assignments::Column as AssignmentColumn;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{AcademiaError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use crate::models::submissions::entities::SubmissionStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

/// 科目默认系数
const DEFAULT_COEFFICIENT: f64 = 1.0;

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            coefficient: Set(req.coefficient.unwrap_or(DEFAULT_COEFFICIENT)),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 通过代码获取科目
    pub async fn get_subject_by_code_impl(&self, code: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let results = Subjects::find()
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(coefficient) = update.coefficient {
            model.coefficient = Set(coefficient);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目（级联删除其作业与提交）
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 某科目下已评分提交的 (数量, 平均分)
    pub async fn subject_graded_stats_impl(&self, subject_id: i64) -> Result<(i64, Option<f64>)> {
        let grades: Vec<f64> = Submissions::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::submissions::Relation::Assignment.def(),
            )
            .filter(AssignmentColumn::SubjectId.eq(subject_id))
            .filter(SubmissionColumn::Status.eq(SubmissionStatus::Graded.to_string()))
            .filter(SubmissionColumn::Grade.is_not_null())
            .select_only()
            .column(SubmissionColumn::Grade)
            .into_tuple::<Option<f64>>()
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询科目成绩失败: {e}")))?
            .into_iter()
            .flatten()
            .collect();

        // SQL 层不做聚合，保持跨数据库的浮点行为一致
        let count = grades.len() as i64;
        let average = if grades.is_empty() {
            None
        } else {
            Some(grades.iter().sum::<f64>() / count as f64)
        };

        Ok((count, average))
    }
}
