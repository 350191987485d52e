use super::entities::{Transcript, TranscriptAchievement};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 单个成绩单响应
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: Transcript,
    pub verify_url: String,
}

// 历史成绩单列表响应
#[derive(Debug, Serialize)]
pub struct TranscriptListResponse {
    pub items: Vec<Transcript>,
    pub pagination: PaginationInfo,
}

// 公开验证响应（只暴露验证页需要的字段，不含内部 ID）
#[derive(Debug, Serialize)]
pub struct TranscriptVerificationResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<TranscriptAchievement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TranscriptVerificationResponse {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            student_name: None,
            registration_number: None,
            school: None,
            program: None,
            semester: None,
            academic_year: None,
            total_points: None,
            grade: None,
            achievements: None,
            generated_at: None,
        }
    }
}
