use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AchievementService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_achievement(
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

    match storage.get_achievement_by_id(achievement_id).await {
        Ok(Some(achievement)) => {
            // 学生只能看自己的记录，审核角色可以看全部
            if current_user.role == UserRole::Student && achievement.student_id != current_user.id
            {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "无权查看该成果记录",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                achievement,
                "Achievement retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AchievementNotFound,
            "成果记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成果记录失败: {e}"),
            )),
        ),
    }
}
