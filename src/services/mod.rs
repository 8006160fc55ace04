pub mod assignments;
pub mod attendance;
pub mod audit;
pub mod auth;
pub mod files;
pub mod groups;
pub mod messages;
pub mod notifications;
pub mod subjects;
pub mod submissions;
pub mod transcripts;
pub mod users;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use files::FileService;
pub use groups::GroupService;
pub use messages::MessageService;
pub use notifications::NotificationService;
pub use subjects::SubjectService;
pub use submissions::SubmissionService;
pub use transcripts::TranscriptService;
pub use users::UserService;
