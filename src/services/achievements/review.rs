use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AchievementService;
use crate::middlewares::RequireJWT;
use crate::models::achievements::entities::AchievementStatus;
use crate::models::achievements::requests::{ReviewAchievementRequest, ReviewAction};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 审核动作映射到目标状态。
/// 教师只能 recommend/reject（初审），系主任只能 approve/reject（终审）。
fn target_status(role: &UserRole, action: ReviewAction) -> Option<AchievementStatus> {
    match (role, action) {
        (UserRole::Faculty, ReviewAction::Recommend) => Some(AchievementStatus::FacultyRecommended),
        (UserRole::Faculty, ReviewAction::Reject) => Some(AchievementStatus::FacultyRejected),
        (UserRole::Hod, ReviewAction::Approve) => Some(AchievementStatus::HodApproved),
        (UserRole::Hod, ReviewAction::Reject) => Some(AchievementStatus::HodRejected),
        // 管理员可以代行任一阶段
        (UserRole::Admin, ReviewAction::Recommend) => Some(AchievementStatus::FacultyRecommended),
        (UserRole::Admin, ReviewAction::Approve) => Some(AchievementStatus::HodApproved),
        (UserRole::Admin, ReviewAction::Reject) => None, // 需要根据当前状态判定，见下
        _ => None,
    }
}

pub async fn handle_review(
    service: &AchievementService,
    achievement_id: i64,
    review_request: ReviewAchievementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let achievement = match storage.get_achievement_by_id(achievement_id).await {
        Ok(Some(achievement)) => achievement,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AchievementNotFound,
                "成果记录不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成果记录失败: {e}"),
                )),
            );
        }
    };

    // 管理员的 reject 按当前阶段落到对应的拒绝状态
    let next = match target_status(&current_user.role, review_request.action) {
        Some(status) => status,
        None if current_user.role == UserRole::Admin
            && review_request.action == ReviewAction::Reject =>
        {
            match achievement.status {
                AchievementStatus::Pending => AchievementStatus::FacultyRejected,
                AchievementStatus::FacultyRecommended => AchievementStatus::HodRejected,
                _ => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::InvalidReviewTransition,
                        format!("记录已处于终态 {}", achievement.status),
                    )));
                }
            }
        }
        None => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "该审核动作不在您的权限范围内",
            )));
        }
    };

    // 状态机校验：非法迁移一律拒绝
    if !achievement.status.can_transition_to(next) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidReviewTransition,
            format!("不允许从 {} 迁移到 {}", achievement.status, next),
        )));
    }

    match storage
        .update_achievement_review(
            achievement_id,
            next,
            review_request.remark,
            current_user.id,
        )
        .await
    {
        Ok(Some(updated)) => {
            tracing::info!(
                "Achievement {} reviewed by {} ({}): {} -> {}",
                achievement_id,
                current_user.id,
                current_user.role,
                achievement.status,
                updated.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "审核完成")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AchievementNotFound,
            "成果记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入审核结果失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_actions_map_to_first_stage() {
        assert_eq!(
            target_status(&UserRole::Faculty, ReviewAction::Recommend),
            Some(AchievementStatus::FacultyRecommended)
        );
        assert_eq!(
            target_status(&UserRole::Faculty, ReviewAction::Reject),
            Some(AchievementStatus::FacultyRejected)
        );
        assert_eq!(target_status(&UserRole::Faculty, ReviewAction::Approve), None);
    }

    #[test]
    fn hod_actions_map_to_final_stage() {
        assert_eq!(
            target_status(&UserRole::Hod, ReviewAction::Approve),
            Some(AchievementStatus::HodApproved)
        );
        assert_eq!(
            target_status(&UserRole::Hod, ReviewAction::Reject),
            Some(AchievementStatus::HodRejected)
        );
        assert_eq!(target_status(&UserRole::Hod, ReviewAction::Recommend), None);
    }

    #[test]
    fn students_cannot_review() {
        assert_eq!(target_status(&UserRole::Student, ReviewAction::Approve), None);
        assert_eq!(
            target_status(&UserRole::Student, ReviewAction::Recommend),
            None
        );
    }
}
