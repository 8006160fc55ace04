//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{AcademiaError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListItem, AssignmentListResponse},
    },
};
use crate::utils::escape_like_pattern;
use crate::utils::validate::normalize_allowed_formats;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

/// 未指定时的默认允许格式
const DEFAULT_ALLOWED_FORMATS: &[&str] = &["pdf", "docx", "doc", "zip", "rar", "7z"];
/// 未指定时的默认附件大小上限（MB）
const DEFAULT_MAX_SIZE_MB: i32 = 50;

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        // 格式白名单一律以小写落库
        let formats = req
            .allowed_formats
            .map(normalize_allowed_formats)
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_ALLOWED_FORMATS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });
        let formats_json = serde_json::to_string(&formats)
            .map_err(|e| AcademiaError::serialization(format!("序列化允许格式失败: {e}")))?;

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.timestamp()),
            subject_id: Set(req.subject_id),
            teacher_id: Set(teacher_id),
            group_id: Set(req.group_id),
            allowed_formats: Set(formats_json),
            max_size_mb: Set(req.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB)),
            statement_file_id: Set(req.statement_file_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业，作用域过滤由业务层填进 query
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Assignments::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(group_id) = query.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        // 截止时间近的排前面
        select = select.order_by_asc(Column::Deadline);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询作业列表失败: {e}")))?;

        // 过期标记在读取时计算，不落库
        let now = chrono::Utc::now();
        let items = assignments
            .into_iter()
            .map(|m| {
                let assignment = m.into_assignment();
                let is_overdue = assignment.is_overdue_at(now);
                AssignmentListItem {
                    assignment,
                    is_overdue,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(deadline) = update.deadline {
            model.deadline = Set(deadline.timestamp());
        }
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(group_id) = update.group_id {
            model.group_id = Set(group_id);
        }
        if let Some(formats) = update.allowed_formats {
            let formats = normalize_allowed_formats(formats);
            let formats_json = serde_json::to_string(&formats)
                .map_err(|e| AcademiaError::serialization(format!("序列化允许格式失败: {e}")))?;
            model.allowed_formats = Set(formats_json);
        }
        if let Some(max_size_mb) = update.max_size_mb {
            model.max_size_mb = Set(max_size_mb);
        }
        if let Some(statement_file_id) = update.statement_file_id {
            model.statement_file_id = Set(Some(statement_file_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除作业，提交随外键级联删除
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
