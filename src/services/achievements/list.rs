use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AchievementService;
use crate::middlewares::RequireJWT;
use crate::models::achievements::entities::AchievementStatus;
use crate::models::achievements::requests::{
    AchievementListParams, AchievementListQuery, ReviewQueueParams,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 学生查看自己的成果列表
pub async fn list_own_achievements(
    service: &AchievementService,
    params: AchievementListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let query = AchievementListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id: Some(student_id),
        semester: params.semester,
        category: params.category,
        status: params.status,
    };

    match storage.list_achievements_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Achievements retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成果列表失败: {e}"),
            )),
        ),
    }
}

/// 审核队列。教师默认看 pending，系主任默认看 faculty_recommended；
/// 显式传入的 status 过滤只允许本角色能处理的阶段。
pub async fn list_review_queue(
    service: &AchievementService,
    params: ReviewQueueParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let role = match RequireJWT::extract_user_role(request) {
        Some(role) => role,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let status = match (&role, params.status) {
        // 管理员不限制阶段
        (UserRole::Admin, status) => status,
        (UserRole::Faculty, None) => Some(AchievementStatus::Pending),
        (UserRole::Faculty, Some(AchievementStatus::Pending)) => Some(AchievementStatus::Pending),
        (UserRole::Hod, None) => Some(AchievementStatus::FacultyRecommended),
        (UserRole::Hod, Some(AchievementStatus::FacultyRecommended)) => {
            Some(AchievementStatus::FacultyRecommended)
        }
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "该审核阶段不在您的权限范围内",
            )));
        }
    };

    let query = AchievementListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id: None,
        semester: params.semester,
        category: None,
        status,
    };

    match storage.list_achievements_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Review queue retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询审核队列失败: {e}"),
            )),
        ),
    }
}
