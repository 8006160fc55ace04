use serde::Serialize;
use ts_rs::TS;

/// 业务错误码，随 ApiResponse 一起返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求参数错误
    BadRequest = 4000,
    ValidationError = 4001,
    GradeOutOfRange = 4002,

    // 认证与授权
    Unauthorized = 4010,
    Forbidden = 4030,
    GroupPermissionDenied = 4031,

    // 资源不存在
    NotFound = 4040,
    UserNotFound = 4041,
    AssignmentNotFound = 4042,
    SubmissionNotFound = 4043,
    SubjectNotFound = 4044,
    GroupNotFound = 4045,
    FileNotFound = 4046,
    NotificationNotFound = 4047,
    MessageNotFound = 4048,

    // 冲突
    Conflict = 4090,
    EmailAlreadyExists = 4091,
    SubjectCodeAlreadyExists = 4092,

    // 限流
    TooManyRequests = 4290,

    // 服务端错误
    InternalServerError = 5000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::ValidationError as i32, 4001);
        assert_eq!(ErrorCode::SubmissionNotFound as i32, 4043);
        assert_eq!(ErrorCode::InternalServerError as i32, 5000);
    }
}
