use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;

use super::ProfileService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, profiles::requests::UpsertProfileRequest, users::entities::UserRole,
};
use crate::utils::validate::validate_registration_number;

pub async fn upsert_own_profile(
    service: &ProfileService,
    mut profile: UpsertProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 档案属于学生，其他角色没有可维护的档案
    if RequireJWT::extract_user_role(request) != Some(UserRole::Student) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有学生可以维护档案",
        )));
    }

    // 注册号会进入验证码与 PDF 文件名，统一成大写后再校验
    profile.registration_number = profile.registration_number.trim().to_uppercase();
    if let Err(msg) = validate_registration_number(&profile.registration_number) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let current_year = chrono::Utc::now().year();
    if profile.entry_year < 2000 || profile.entry_year > current_year {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "入学年份不合法",
        )));
    }

    // 注册号全局唯一
    match storage
        .get_profile_by_registration(&profile.registration_number)
        .await
    {
        Ok(Some(existing)) if existing.user_id != user_id => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "该注册号已被其他账号使用",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询档案失败: {e}"),
                )),
            );
        }
    }

    match storage.upsert_profile(user_id, profile).await {
        Ok(saved) => Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "档案保存成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("保存档案失败: {e}"),
            )),
        ),
    }
}
