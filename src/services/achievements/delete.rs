use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AchievementService;
use crate::middlewares::RequireJWT;
use crate::models::achievements::entities::AchievementStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 学生只能撤回自己的、仍在 pending 的记录。
/// 进入审核流程后的记录不可删除，保证审核留痕。
pub async fn handle_delete(
    service: &AchievementService,
    achievement_id: i64,
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

    if current_user.role != UserRole::Admin && achievement.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "无权删除该成果记录",
        )));
    }

    if achievement.status != AchievementStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AchievementNotEditable,
            "记录已进入审核流程，不可删除",
        )));
    }

    match storage.delete_achievement(achievement_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("成果记录已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AchievementNotFound,
            "成果记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除成果记录失败: {e}"),
            )),
        ),
    }
}
