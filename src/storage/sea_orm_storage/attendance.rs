//! 考勤存储操作
//!
//! 同一 (student_id, subject_id, date) 至多一行，由复合唯一索引保证。
//! 重复登记走事务化 upsert，覆盖已有状态。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{AcademiaError, Result};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::{AttendanceRecord, AttendanceStatus},
        requests::AttendanceListQuery,
        responses::{
            AttendanceListItem, AttendanceListResponse, AttendanceStudent, AttendanceSubjectInfo,
        },
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 登记单条考勤，已有记录时覆盖状态
    pub async fn record_attendance_impl(
        &self,
        recorded_by: i64,
        student_id: i64,
        subject_id: i64,
        date: &str,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = AttendanceRecords::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::Date.eq(date))
            .one(&txn)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                active.status = Set(status.to_string());
                active.recorded_by = Set(recorded_by);
                active.updated_at = Set(now);

                active
                    .update(&txn)
                    .await
                    .map_err(|e| AcademiaError::database_operation(format!("更新考勤失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(student_id),
                    subject_id: Set(subject_id),
                    date: Set(date.to_string()),
                    status: Set(status.to_string()),
                    recorded_by: Set(recorded_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model
                    .insert(&txn)
                    .await
                    .map_err(|e| AcademiaError::database_operation(format!("登记考勤失败: {e}")))?
            }
        };

        txn.commit()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_attendance_record())
    }

    /// 分页列出考勤记录，附带学生与科目信息
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = AttendanceRecords::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(ref date) = query.date {
            select = select.filter(Column::Date.eq(date.as_str()));
        }

        // 最近的日期排前面
        select = select.order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询考勤页数失败: {e}")))?;

        let records = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询考勤列表失败: {e}")))?;

        // 批量查询学生信息
        let student_ids: Vec<i64> = records
            .iter()
            .map(|r| r.student_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let students = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询学生信息失败: {e}")))?;
        let student_map: HashMap<i64, _> = students.into_iter().map(|u| (u.id, u)).collect();

        // 批量查询科目信息
        let subject_ids: Vec<i64> = records
            .iter()
            .map(|r| r.subject_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let subjects = Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("查询科目信息失败: {e}")))?;
        let subject_map: HashMap<i64, _> = subjects.into_iter().map(|s| (s.id, s)).collect();

        let items = records
            .into_iter()
            .map(|r| {
                let student = student_map.get(&r.student_id).map(|u| AttendanceStudent {
                    id: u.id,
                    first_name: u.first_name.clone(),
                    last_name: u.last_name.clone(),
                });
                let subject = subject_map.get(&r.subject_id).map(|s| AttendanceSubjectInfo {
                    id: s.id,
                    name: s.name.clone(),
                    code: s.code.clone(),
                });
                AttendanceListItem {
                    record: r.into_attendance_record(),
                    student,
                    subject,
                }
            })
            .collect();

        Ok(AttendanceListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
