use serde::{Deserialize, Serialize};

// 学生档案（成绩单页眉所需的全部身份信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub user_id: i64,
    /// 学籍注册号，全局唯一，出现在验证码中
    pub registration_number: String,
    pub student_name: String,
    pub school: String,
    pub program: String,
    /// 入学年份（公历年），用于推算学期序号
    pub entry_year: i32,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl StudentProfile {
    /// 档案是否已完整到可以生成成绩单
    pub fn is_complete(&self) -> bool {
        !self.registration_number.trim().is_empty()
            && !self.student_name.trim().is_empty()
            && !self.school.trim().is_empty()
            && !self.program.trim().is_empty()
            && self.entry_year > 0
    }
}
