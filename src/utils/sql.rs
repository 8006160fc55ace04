/// 转义 LIKE 模式中的通配符，用户输入只做字面匹配
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent_and_underscore() {
        assert_eq!(escape_like_pattern("a%b_c"), "a\\%b\\_c");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("a\\%"), "a\\\\\\%");
    }

    #[test]
    fn test_plain_input_untouched() {
        assert_eq!(escape_like_pattern("analyse"), "analyse");
    }
}
