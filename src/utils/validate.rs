use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 成绩满分
pub const GRADE_MAX: f64 = 20.0;
/// 成绩步进
pub const GRADE_STEP: f64 = 0.5;

/// 验证成绩：区间 [0, 20]，且必须是 0.5 的整数倍
pub fn validate_grade(grade: f64) -> Result<(), String> {
    if !grade.is_finite() {
        return Err("Grade must be a finite number".to_string());
    }
    if !(0.0..=GRADE_MAX).contains(&grade) {
        return Err(format!("Grade must be between 0 and {GRADE_MAX}"));
    }
    let steps = grade / GRADE_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(format!("Grade must be a multiple of {GRADE_STEP}"));
    }
    Ok(())
}

/// 验证并规范化 YYYY-MM-DD 日期字符串
pub fn validate_date_ymd(date: &str) -> Result<String, String> {
    chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("Invalid date '{date}', expected YYYY-MM-DD"))
}

/// 规范化允许的文件格式列表：去空白、去前导点、统一小写，丢弃空项
pub fn normalize_allowed_formats(formats: Vec<String>) -> Vec<String> {
    formats
        .into_iter()
        .map(|f| f.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|f| !f.is_empty())
        .collect()
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password", "12345678", "123456789", "qwerty123", "admin123", "password1", "Password1",
        "Qwerty123", "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_grades() {
        assert!(validate_grade(0.0).is_ok());
        assert!(validate_grade(0.5).is_ok());
        assert!(validate_grade(13.5).is_ok());
        assert!(validate_grade(20.0).is_ok());
    }

    #[test]
    fn test_grade_out_of_range() {
        assert!(validate_grade(-0.5).is_err());
        assert!(validate_grade(20.5).is_err());
        assert!(validate_grade(f64::NAN).is_err());
    }

    #[test]
    fn test_grade_not_on_step() {
        assert!(validate_grade(12.3).is_err());
        assert!(validate_grade(0.25).is_err());
        assert!(validate_grade(19.99).is_err());
    }

    #[test]
    fn test_validate_date_ymd() {
        assert_eq!(validate_date_ymd("2026-03-01").unwrap(), "2026-03-01");
        assert_eq!(validate_date_ymd(" 2026-03-01 ").unwrap(), "2026-03-01");
        assert!(validate_date_ymd("2026-13-01").is_err());
        assert!(validate_date_ymd("01/03/2026").is_err());
        assert!(validate_date_ymd("not a date").is_err());
    }

    #[test]
    fn test_normalize_allowed_formats_lowercases() {
        let out = normalize_allowed_formats(vec!["PDF".into(), ".Zip".into(), " docx ".into()]);
        assert_eq!(out, vec!["pdf", "zip", "docx"]);
    }

    #[test]
    fn test_normalize_allowed_formats_drops_empty() {
        let out = normalize_allowed_formats(vec!["".into(), "  ".into(), ".".into(), "rar".into()]);
        assert_eq!(out, vec!["rar"]);
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("alice.martin@univ-example.fr").is_ok());
        assert!(validate_email("t.dupont@example.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
