use once_cell::sync::Lazy;
use regex::Regex;

use super::random_code::generate_random_code;

/// 随机后缀长度
const SUFFIX_LEN: usize = 6;

static CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]+-[A-Z]+-\d{4}-[A-Z0-9]+-(SEM[1-8]|ALL)-[A-Z0-9]{6}$")
        .expect("Invalid verification code regex")
});

/// 成绩单学期段：单学期 "Sem-3" -> "SEM3"，全学期汇总 -> "ALL"
pub fn semester_segment(semester: Option<&str>) -> String {
    match semester {
        Some(label) => label.replace('-', "").to_uppercase(),
        None => "ALL".to_string(),
    }
}

/// 生成验证码：{prefix}-{year}-{注册号}-{学期段}-{6位随机码}
///
/// 随机段每次调用都不同；唯一性由存储层的唯一索引兜底，冲突时重新生成。
pub fn generate_verification_code(
    prefix: &str,
    year: i32,
    registration_number: &str,
    semester: Option<&str>,
) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        prefix,
        year,
        registration_number.to_uppercase(),
        semester_segment(semester),
        generate_random_code(SUFFIX_LEN)
    )
}

/// 公开查询入口的格式预检，不命中直接按无效处理，不查库
pub fn looks_like_verification_code(code: &str) -> bool {
    code.len() <= 64 && CODE_RE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_format_single_semester() {
        let code = generate_verification_code("BA-TR", 2025, "21L31A0501", Some("Sem-3"));
        assert!(code.starts_with("BA-TR-2025-21L31A0501-SEM3-"));
        assert_eq!(code.len(), "BA-TR-2025-21L31A0501-SEM3-".len() + 6);
        assert!(looks_like_verification_code(&code));
    }

    #[test]
    fn code_format_all_semesters() {
        let code = generate_verification_code("BA-TR", 2025, "21L31A0501", None);
        assert!(code.starts_with("BA-TR-2025-21L31A0501-ALL-"));
        assert!(looks_like_verification_code(&code));
    }

    #[test]
    fn codes_differ_between_calls() {
        let a = generate_verification_code("BA-TR", 2025, "21L31A0501", Some("Sem-1"));
        let b = generate_verification_code("BA-TR", 2025, "21L31A0501", Some("Sem-1"));
        // 随机段一致的概率可以忽略
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!looks_like_verification_code(""));
        assert!(!looks_like_verification_code("BA-TR-2025"));
        assert!(!looks_like_verification_code(
            "ba-tr-2025-21l31a0501-sem3-abc123"
        ));
        assert!(!looks_like_verification_code(
            "BA-TR-2025-21L31A0501-SEM9-ABC123"
        ));
        assert!(!looks_like_verification_code(
            "BA-TR-2025-21L31A0501-SEM3-ABC12"
        ));
    }

    #[test]
    fn semester_segment_mapping() {
        assert_eq!(semester_segment(Some("Sem-1")), "SEM1");
        assert_eq!(semester_segment(Some("Sem-8")), "SEM8");
        assert_eq!(semester_segment(None), "ALL");
    }
}
