use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::profiles::requests::UpsertProfileRequest;
use crate::models::users::entities::UserRole;
use crate::services::ProfileService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ProfileService 实例
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

pub async fn get_own_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_own_profile(&req).await
}

pub async fn upsert_own_profile(
    req: HttpRequest,
    profile: web::Json<UpsertProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .upsert_own_profile(profile.into_inner(), &req)
        .await
}

pub async fn get_profile(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_profile(user_id.0, &req).await
}

// 配置路由
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profile")
            .wrap(middlewares::RequireJWT)
            .service(
                // 学生维护自己的档案；是否为学生在服务层校验
                web::resource("")
                    .route(web::get().to(get_own_profile))
                    .route(web::put().to(upsert_own_profile)),
            )
            .service(
                // 审核面板按学生 ID 查档案
                web::scope("/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles()))
                    .route("", web::get().to(get_profile)),
            ),
    );
}
