use serde::{Deserialize, Serialize};

// 成绩单中的成果快照（生成时冻结，后续成果变更不影响已签发文档）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptAchievement {
    pub achievement_id: i64,
    pub title: String,
    pub category: String,
    pub level: String,
    pub rank: String,
    pub points: i32,
    pub semester: String,
    pub academic_year: String,
}

// 成绩单实体（append-only，签发即终版）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub id: i64,
    pub student_id: i64,
    /// None 表示全学期汇总成绩单
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub total_points: i32,
    pub grade: String,
    pub verification_code: String,
    pub achievements: Vec<TranscriptAchievement>,
    pub is_final: bool,
    pub generated_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Transcript {
    /// 公开验证页使用的 URL
    pub fn verify_url(&self, base: &str) -> String {
        format!("{}/verify-transcript/{}", base, self.verification_code)
    }
}
