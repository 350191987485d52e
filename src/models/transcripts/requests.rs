use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 成绩单生成请求。学年标签不在请求里：服务端按学期与入学年份还原。
#[derive(Debug, Deserialize)]
pub struct GenerateTranscriptRequest {
    /// 目标学期（如 "Sem-3"）；None 时生成全学期汇总
    pub semester: Option<String>,
}

// 成绩单落库数据（服务层已完成资格校验与编码）
#[derive(Debug, Clone)]
pub struct NewTranscript {
    pub student_id: i64,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub total_points: i32,
    pub grade: String,
    pub verification_code: String,
    pub achievements: Vec<crate::models::transcripts::entities::TranscriptAchievement>,
    pub generated_by: i64,
}

// 历史成绩单列表查询（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TranscriptListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub semester: Option<String>,
}

// 历史成绩单列表查询
#[derive(Debug, Deserialize)]
pub struct TranscriptListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub semester: Option<String>,
}
