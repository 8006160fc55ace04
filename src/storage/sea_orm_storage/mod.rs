//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod audit_logs;
mod files;
mod groups;
mod messages;
mod notifications;
mod subjects;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{AcademiaError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AcademiaError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AcademiaError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AcademiaError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AcademiaError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AcademiaError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_group_students(&self, group_id: i64) -> Result<Vec<User>> {
        self.list_group_students_impl(group_id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn deactivate_user(&self, id: i64) -> Result<bool> {
        self.deactivate_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 分组模块
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(id).await
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.list_groups_impl().await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(code).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn subject_graded_stats(&self, subject_id: i64) -> Result<(i64, Option<f64>)> {
        self.subject_graded_stats_impl(subject_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
        status: SubmissionStatus,
        plagiarism_score: Option<f64>,
    ) -> Result<(Submission, bool)> {
        self.upsert_submission_impl(student_id, req, status, plagiarism_score)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, grader_id, req)
            .await
    }

    async fn list_peer_comments(
        &self,
        assignment_id: i64,
        exclude_student_id: i64,
    ) -> Result<Vec<String>> {
        self.list_peer_comments_impl(assignment_id, exclude_student_id)
            .await
    }

    async fn list_graded_entries_for_student(&self, student_id: i64) -> Result<Vec<(i64, f64)>> {
        self.list_graded_entries_for_student_impl(student_id).await
    }

    // 通知模块
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
        self.create_notification_impl(req).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
        unread_only: bool,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, page, size, unread_only)
            .await
    }

    async fn unread_notification_count(&self, user_id: i64) -> Result<i64> {
        self.unread_notification_count_impl(user_id).await
    }

    async fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(user_id, notification_id)
            .await
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(user_id).await
    }

    async fn clear_notifications(&self, user_id: i64) -> Result<u64> {
        self.clear_notifications_impl(user_id).await
    }

    async fn record_system_email(&self, req: RecordEmailRequest) -> Result<SystemEmail> {
        self.record_system_email_impl(req).await
    }

    async fn list_system_emails_with_pagination(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<SystemEmailListResponse> {
        self.list_system_emails_with_pagination_impl(user_id, page, size)
            .await
    }

    // 考勤模块
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn record_attendance(
        &self,
        recorded_by: i64,
        student_id: i64,
        subject_id: i64,
        date: &str,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord> {
        self.record_attendance_impl(recorded_by, student_id, subject_id, date, status)
            .await
    }

    // 私信模块
    async fn list_messages_for_user(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse> {
        self.list_messages_for_user_impl(user_id, page, size).await
    }

    async fn list_conversation(
        &self,
        user_id: i64,
        peer_id: i64,
        page: i64,
        size: i64,
    ) -> Result<MessageListResponse> {
        self.list_conversation_impl(user_id, peer_id, page, size)
            .await
    }

    async fn send_message(&self, sender_id: i64, req: SendMessageRequest) -> Result<Message> {
        self.send_message_impl(sender_id, req).await
    }

    async fn mark_message_read(&self, recipient_id: i64, message_id: i64) -> Result<bool> {
        self.mark_message_read_impl(recipient_id, message_id).await
    }

    async fn mark_conversation_read(&self, recipient_id: i64, sender_id: i64) -> Result<u64> {
        self.mark_conversation_read_impl(recipient_id, sender_id)
            .await
    }

    // 文件模块
    async fn register_file(&self, user_id: i64, req: RegisterFileRequest) -> Result<File> {
        self.register_file_impl(user_id, req).await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }

    // 审计模块
    async fn record_audit_log(
        &self,
        user_id: i64,
        action: &str,
        details: &str,
        ip_address: Option<String>,
    ) -> Result<()> {
        self.record_audit_log_impl(user_id, action, details, ip_address)
            .await
    }
}
