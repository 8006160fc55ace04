use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    attendance::{
        entities::{AttendanceRecord, AttendanceStatus},
        requests::AttendanceListQuery,
        responses::AttendanceListResponse,
    },
    files::{entities::File, requests::RegisterFileRequest},
    groups::{entities::Group, requests::CreateGroupRequest},
    messages::{entities::Message, requests::SendMessageRequest, responses::MessageListResponse},
    notifications::{
        entities::{Notification, SystemEmail},
        requests::{CreateNotificationRequest, RecordEmailRequest},
        responses::{NotificationListResponse, SystemEmailListResponse},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段已是 Argon2 哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过 ID 获取用户
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 分页列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 列出某分组的全部学生（通知扇出用）
    async fn list_group_students(&self, group_id: i64) -> Result<Vec<User>>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 停用用户（保留历史提交与成绩）
    async fn deactivate_user(&self, id: i64) -> Result<bool>;
    // 统计用户数量（首次启动播种管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 分组管理方法
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group>;
    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>>;
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    // 某科目下已评分提交的 (数量, 平均分)
    async fn subject_graded_stats(&self, subject_id: i64) -> Result<(i64, Option<f64>)>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 级联删除作业下所有提交
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 提交管理方法
    // 同一 (assignment, student) 只保留一行：首交插入 version=1，
    // 重交原地覆盖内容并递增 version。返回 (提交, 是否重交)。
    async fn upsert_submission(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
        status: SubmissionStatus,
        plagiarism_score: Option<f64>,
    ) -> Result<(Submission, bool)>;
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 评分：写入成绩并把本次评分追加进 correction_history
    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>>;
    // 同作业下其他学生的提交说明文本（相似度检测用）
    async fn list_peer_comments(
        &self,
        assignment_id: i64,
        exclude_student_id: i64,
    ) -> Result<Vec<String>>;
    // 某学生所有已评分提交的 (科目 ID, 成绩)
    async fn list_graded_entries_for_student(&self, student_id: i64) -> Result<Vec<(i64, f64)>>;

    /// 通知管理方法
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
        unread_only: bool,
    ) -> Result<NotificationListResponse>;
    async fn unread_notification_count(&self, user_id: i64) -> Result<i64>;
    async fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64>;
    async fn clear_notifications(&self, user_id: i64) -> Result<u64>;
    // 站内信记录（不真正发信）
    async fn record_system_email(&self, req: RecordEmailRequest) -> Result<SystemEmail>;
    async fn list_system_emails_with_pagination(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<SystemEmailListResponse>;

    /// 考勤管理方法
    // 分页列出考勤记录，作用域过滤由业务层填进 query
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 登记单条考勤：同 (学生, 科目, 日期) 已有记录时覆盖状态
    async fn record_attendance(
        &self,
        recorded_by: i64,
        student_id: i64,
        subject_id: i64,
        date: &str,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord>;

    /// 站内私信方法
    // 当前用户收发的全部私信（分页，新的在前）
    async fn list_messages_for_user(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse>;
    // 与某个用户的对话（分页，旧的在前）
    async fn list_conversation(
        &self,
        user_id: i64,
        peer_id: i64,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse>;
    async fn send_message(&self, sender_id: i64, req: SendMessageRequest) -> Result<Message>;
    // 标记单条已读，recipient_id 过滤防止越权
    async fn mark_message_read(&self, recipient_id: i64, message_id: i64) -> Result<bool>;
    // 标记某发件人发来的全部私信已读
    async fn mark_conversation_read(&self, recipient_id: i64, sender_id: i64) -> Result<u64>;

    /// 文件元数据方法
    async fn register_file(&self, user_id: i64, req: RegisterFileRequest) -> Result<File>;
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;

    /// 审计日志
    async fn record_audit_log(
        &self,
        user_id: i64,
        action: &str,
        details: &str,
        ip_address: Option<String>,
    ) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
