//! 提交存储操作
//!
//! 每个 (assignment_id, student_id) 至多一行，由复合唯一索引保证。
//! 首交与重交走同一个事务化 upsert。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions, Relation};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{AcademiaError, Result};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{CorrectionRecord, Submission, SubmissionStatus},
        requests::{CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListQuery},
        responses::{
            SubmissionAssignmentInfo, SubmissionListItem, SubmissionListResponse,
            SubmissionStudent,
        },
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建或重交提交
    ///
    /// 事务内检查现有行：不存在则插入 version=1，存在则覆盖文件、
    /// 说明、提交时间、状态与相似度分，version+1。成绩字段不动，
    /// 旧成绩在重交后仍然可见。
    pub async fn upsert_submission_impl(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
        status: SubmissionStatus,
        plagiarism_score: Option<f64>,
    ) -> Result<(Submission, bool)> {
        let now = chrono::Utc::now().timestamp();
        let file_ids_json = serde_json::to_string(&req.file_ids)
            .map_err(|e| AcademiaError::serialization(format!("序列化文件列表失败: {e}")))?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Submissions::find()
            .filter(Column::AssignmentId.eq(req.assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&txn)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询现有提交失败: {e}")))?;

        let (result, is_resubmission) = match existing {
            Some(model) => {
                let version = model.version + 1;
                let mut active = model.into_active_model();
                active.file_ids = Set(file_ids_json);
                active.comment = Set(req.comment);
                active.submitted_at = Set(now);
                active.version = Set(version);
                active.status = Set(status.to_string());
                active.plagiarism_score = Set(plagiarism_score);

                let updated = active
                    .update(&txn)
                    .await
                    .map_err(|e| AcademiaError::database_operation(format!("重交失败: {e}")))?;
                (updated, true)
            }
            None => {
                let model = ActiveModel {
                    assignment_id: Set(req.assignment_id),
                    student_id: Set(student_id),
                    file_ids: Set(file_ids_json),
                    comment: Set(req.comment),
                    submitted_at: Set(now),
                    version: Set(1),
                    status: Set(status.to_string()),
                    plagiarism_score: Set(plagiarism_score),
                    ..Default::default()
                };

                let inserted = model
                    .insert(&txn)
                    .await
                    .map_err(|e| AcademiaError::database_operation(format!("创建提交失败: {e}")))?;
                (inserted, false)
            }
        };

        txn.commit()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((result.into_submission(), is_resubmission))
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 分页列出提交，附带提交者与作业信息
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Submissions::find();

        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        // 教师视角：只看自己作业范围内的提交
        if let Some(teacher_id) = query.teacher_id {
            select = select
                .join(JoinType::InnerJoin, Relation::Assignment.def())
                .filter(AssignmentColumn::TeacherId.eq(teacher_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询提交页数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询提交列表失败: {e}")))?;

        // 批量查询学生信息
        let student_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.student_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let students = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询学生信息失败: {e}")))?;
        let student_map: HashMap<i64, _> = students.into_iter().map(|u| (u.id, u)).collect();

        // 批量查询作业信息
        let assignment_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.assignment_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let assignments = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询作业信息失败: {e}")))?;
        let assignment_map: HashMap<i64, _> =
            assignments.into_iter().map(|a| (a.id, a)).collect();

        let items = submissions
            .into_iter()
            .map(|s| {
                let student = student_map.get(&s.student_id).map(|u| SubmissionStudent {
                    id: u.id,
                    first_name: u.first_name.clone(),
                    last_name: u.last_name.clone(),
                    email: u.email.clone(),
                });
                let assignment =
                    assignment_map
                        .get(&s.assignment_id)
                        .map(|a| SubmissionAssignmentInfo {
                            id: a.id,
                            title: a.title.clone(),
                            subject_id: a.subject_id,
                            deadline: crate::entity::ts_to_datetime(a.deadline),
                        });
                SubmissionListItem {
                    submission: s.into_submission(),
                    student,
                    assignment,
                }
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 评分
    ///
    /// 事务内读改写：写入成绩字段，状态置为 GRADED，并把本次评分
    /// 追加进 correction_history。重复评分覆盖当前成绩，但历史保留
    /// 每一次记录。
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grader_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        let graded_at = chrono::Utc::now();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(model) = Submissions::find_by_id(submission_id)
            .one(&txn)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询提交失败: {e}")))?
        else {
            txn.rollback()
                .await
                .map_err(|e| AcademiaError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        };

        let mut history: Vec<CorrectionRecord> = model
            .correction_history
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();
        history.push(CorrectionRecord {
            grade: req.grade,
            comment: req.comment.clone(),
            graded_by: grader_id,
            graded_at,
        });
        let history_json = serde_json::to_string(&history)
            .map_err(|e| AcademiaError::serialization(format!("序列化评分历史失败: {e}")))?;

        let mut active = model.into_active_model();
        active.grade = Set(Some(req.grade));
        active.grade_comment = Set(req.comment);
        active.correction_file_id = Set(req.correction_file_id);
        active.correction_history = Set(Some(history_json));
        active.status = Set(SubmissionStatus::Graded.to_string());
        active.graded_by = Set(Some(grader_id));
        active.graded_at = Set(Some(graded_at.timestamp()));

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("写入评分失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }

    /// 同作业下其他学生的提交说明文本
    pub async fn list_peer_comments_impl(
        &self,
        assignment_id: i64,
        exclude_student_id: i64,
    ) -> Result<Vec<String>> {
        let results: Vec<Option<String>> = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.ne(exclude_student_id))
            .select_only()
            .column(Column::Comment)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询同作业提交失败: {e}")))?;

        Ok(results.into_iter().flatten().collect())
    }

    /// 某学生所有已评分提交的 (科目 ID, 成绩)
    pub async fn list_graded_entries_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<(i64, f64)>> {
        let rows: Vec<(i64, Option<f64>)> = Submissions::find()
            .join(JoinType::InnerJoin, Relation::Assignment.def())
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(SubmissionStatus::Graded.to_string()))
            .filter(Column::Grade.is_not_null())
            .select_only()
            .column(AssignmentColumn::SubjectId)
            .column(Column::Grade)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(subject_id, grade)| grade.map(|g| (subject_id, g)))
            .collect())
    }
}
