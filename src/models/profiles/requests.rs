use serde::Deserialize;

// 档案创建/更新请求（upsert 语义）
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfileRequest {
    pub registration_number: String,
    pub student_name: String,
    pub school: String,
    pub program: String,
    pub entry_year: i32,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
}
