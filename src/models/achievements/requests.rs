use super::entities::{
    AchievementCategory, AchievementRank, AchievementStatus, CompetitionLevel, CompetitionScope,
};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 成果提交请求；calculated_points / semester / academic_year 由服务端推算
#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    pub title: String,
    pub category: AchievementCategory,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
    pub level: CompetitionLevel,
    pub rank: AchievementRank,
    pub scope: CompetitionScope,
    pub description: Option<String>,
    /// ISO 8601 日期（YYYY-MM-DD）
    pub achievement_date: chrono::NaiveDate,
    /// 证书文件的下载令牌（先走文件上传接口）
    pub certificate_token: Option<String>,
    /// 手工指定学期（如 "Sem-3"）；仅当 transcript.allow_semester_override 开启时生效
    pub semester: Option<String>,
}

// 成果列表查询参数
#[derive(Debug, Deserialize)]
pub struct AchievementListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub semester: Option<String>,
    pub category: Option<AchievementCategory>,
    pub status: Option<AchievementStatus>,
}

// 审核队列查询参数（教师/系主任面板）
#[derive(Debug, Deserialize)]
pub struct ReviewQueueParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<AchievementStatus>,
    pub semester: Option<String>,
}

// 成果落库数据（服务层已补全派生字段）
#[derive(Debug, Clone)]
pub struct NewAchievement {
    pub student_id: i64,
    pub title: String,
    pub category: AchievementCategory,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
    pub level: CompetitionLevel,
    pub rank: AchievementRank,
    pub scope: CompetitionScope,
    pub description: Option<String>,
    pub achievement_date: chrono::NaiveDate,
    pub calculated_points: i32,
    pub category_code: String,
    pub semester: String,
    pub academic_year: String,
    pub certificate_token: Option<String>,
}

// 成果列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AchievementListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub semester: Option<String>,
    pub category: Option<AchievementCategory>,
    pub status: Option<AchievementStatus>,
}

// 审核动作
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Recommend,
    Reject,
    Approve,
}

// 审核请求
#[derive(Debug, Deserialize)]
pub struct ReviewAchievementRequest {
    pub action: ReviewAction,
    pub remark: Option<String>,
}
