use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::achievements::requests::{
    AchievementListParams, CreateAchievementRequest, ReviewAchievementRequest, ReviewQueueParams,
};
use crate::models::users::entities::UserRole;
use crate::services::AchievementService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AchievementService 实例
static ACHIEVEMENT_SERVICE: Lazy<AchievementService> = Lazy::new(AchievementService::new_lazy);

pub async fn create_achievement(
    req: HttpRequest,
    data: web::Json<CreateAchievementRequest>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .create_achievement(data.into_inner(), &req)
        .await
}

pub async fn list_own_achievements(
    req: HttpRequest,
    query: web::Query<AchievementListParams>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .list_own_achievements(query.into_inner(), &req)
        .await
}

pub async fn get_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE.get_stats(&req).await
}

pub async fn list_review_queue(
    req: HttpRequest,
    query: web::Query<ReviewQueueParams>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .list_review_queue(query.into_inner(), &req)
        .await
}

pub async fn get_achievement(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE.get_achievement(id.0, &req).await
}

pub async fn review_achievement(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<ReviewAchievementRequest>,
) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE
        .review_achievement(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_achievement(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE.delete_achievement(id.0, &req).await
}

// 配置路由
//
// 注意注册顺序：固定路径（/stats、/review-queue）必须排在 /{id} 之前，
// 否则会被当成 id 解析。
pub fn configure_achievement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/achievements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/stats")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::get().to(get_stats)),
            )
            .service(
                web::scope("/review-queue")
                    .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles()))
                    .route("", web::get().to(list_review_queue)),
            )
            .service(
                web::scope("/{id}/review")
                    .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles()))
                    .route("", web::post().to(review_achievement)),
            )
            .service(
                // 详情与撤回的归属校验在服务层完成
                web::resource("/{id}")
                    .route(web::get().to(get_achievement))
                    .route(web::delete().to(delete_achievement)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::post().to(create_achievement))
                    .route("", web::get().to(list_own_achievements)),
            ),
    );
}
