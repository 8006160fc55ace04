pub mod assignments;

pub mod attendance;

pub mod auth;

pub mod files;

pub mod groups;

pub mod messages;

pub mod notifications;

pub mod subjects;

pub mod submissions;

pub mod system;

pub mod transcripts;

pub mod users;

pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use files::configure_file_routes;
pub use groups::configure_group_routes;
pub use messages::configure_message_routes;
pub use notifications::configure_notification_routes;
pub use subjects::configure_subject_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
pub use transcripts::configure_transcript_routes;
pub use users::configure_user_routes;
