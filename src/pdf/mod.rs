//! 成绩单 PDF 渲染
//!
//! 输出 A4 版面：院校抬头、身份信息块、分页成果表格、总分与等级、
//! 验证二维码与验证码明文、免签声明页脚。渲染完全离线，不访问网络，
//! 二维码只编码验证 URL。

mod transcript;

pub use transcript::{TranscriptIdentity, TranscriptRenderOptions, TranscriptRenderer};

/// PDF 文件名：单学期 `{prefix}_{注册号}_{学期}_{学年}.pdf`，
/// 全学期汇总 `{prefix}_{注册号}_All_Semesters.pdf`
pub fn transcript_file_name(
    file_prefix: &str,
    registration_number: &str,
    semester: Option<&str>,
    academic_year: Option<&str>,
) -> String {
    match (semester, academic_year) {
        (Some(semester), Some(year)) => {
            format!("{file_prefix}_{registration_number}_{semester}_{year}.pdf")
        }
        (Some(semester), None) => {
            format!("{file_prefix}_{registration_number}_{semester}.pdf")
        }
        _ => format!("{file_prefix}_{registration_number}_All_Semesters.pdf"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_single_semester() {
        assert_eq!(
            transcript_file_name("Transcript", "21L31A0501", Some("Sem-3"), Some("2024-25")),
            "Transcript_21L31A0501_Sem-3_2024-25.pdf"
        );
    }

    #[test]
    fn file_name_all_semesters() {
        assert_eq!(
            transcript_file_name("Transcript", "21L31A0501", None, None),
            "Transcript_21L31A0501_All_Semesters.pdf"
        );
    }
}
