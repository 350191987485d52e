use super::entities::Achievement;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 单条成果响应
#[derive(Debug, Serialize)]
pub struct AchievementResponse {
    pub achievement: Achievement,
}

// 成果列表响应
#[derive(Debug, Serialize)]
pub struct AchievementListResponse {
    pub items: Vec<Achievement>,
    pub pagination: PaginationInfo,
}

// 学生看板统计
#[derive(Debug, Serialize)]
pub struct AchievementStatsResponse {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub total_points_approved: i64,
}
