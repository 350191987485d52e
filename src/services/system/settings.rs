use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{DynamicConfig, SystemService};
use crate::middlewares::RequireJWT;
use crate::models::system::entities::{KnownSettingKey, SettingValueType};
use crate::models::{
    ApiResponse, ErrorCode,
    system::{
        requests::UpdateSettingRequest,
        responses::{AdminSettingsListResponse, SettingResponse, SystemSettingsResponse},
    },
};
use crate::storage::Storage;
use crate::utils::SafeSettingKey;

/// 获取公开系统设置（只读）
pub async fn get_settings(
    service: &SystemService,
    _req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let response = SystemSettingsResponse {
        system_name: DynamicConfig::system_name().await,
        max_file_size: DynamicConfig::upload_max_size().await as u64,
        allowed_file_types: DynamicConfig::upload_allowed_types().await,
        environment: config.app.environment.clone(),
        log_level: config.app.log_level.clone(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Settings retrieved successfully",
    )))
}

/// 获取所有管理员配置
pub async fn get_admin_settings(
    _req: HttpRequest,
    storage: web::Data<Arc<dyn Storage>>,
) -> ActixResult<HttpResponse> {
    let settings = match storage.list_all_settings().await {
        Ok(s) => s,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取配置列表失败: {e}"),
                )),
            );
        }
    };

    let response = AdminSettingsListResponse { settings };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Admin settings retrieved successfully",
    )))
}

/// 按声明的类型校验配置值
fn validate_setting_value(key: &KnownSettingKey, value: &str) -> Result<(), String> {
    match key.value_type() {
        SettingValueType::String => {
            // 枚举取值的键单独限定
            if *key == KnownSettingKey::TranscriptEligibilityScope
                && !matches!(value, "semester" | "semester_category")
            {
                return Err(format!(
                    "配置 {} 只接受 semester 或 semester_category",
                    key.as_str()
                ));
            }
            Ok(())
        }
        SettingValueType::Integer => value
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| format!("配置 {} 需要整数值", key.as_str())),
        SettingValueType::Boolean => value
            .parse::<bool>()
            .map(|_| ())
            .map_err(|_| format!("配置 {} 需要布尔值 true/false", key.as_str())),
        SettingValueType::JsonArray => serde_json::from_str::<Vec<String>>(value)
            .map(|_| ())
            .map_err(|_| format!("配置 {} 需要 JSON 字符串数组", key.as_str())),
    }
}

/// 更新单个配置
pub async fn update_setting(
    req: HttpRequest,
    path: SafeSettingKey,
    body: web::Json<UpdateSettingRequest>,
    storage: web::Data<Arc<dyn Storage>>,
) -> ActixResult<HttpResponse> {
    let key = path.0;

    // 获取当前用户 ID
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "用户未登录",
                )),
            );
        }
    };

    // 值类型校验（提取器已保证 key 合法）
    let known_key: KnownSettingKey = match key.parse() {
        Ok(k) => k,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error_empty(ErrorCode::SettingNotFound, msg)));
        }
    };
    if let Err(msg) = validate_setting_value(&known_key, &body.value) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_empty(ErrorCode::SettingValueInvalid, msg)));
    }

    // 更新配置
    let setting = match storage.update_setting(&key, &body.value, user_id).await {
        Ok(s) => s,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新配置失败: {e}"),
                )),
            );
        }
    };

    // 更新缓存
    DynamicConfig::update(&key, &body.value).await;

    let response = SettingResponse { setting };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Setting updated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_setting_rejects_garbage() {
        let key = KnownSettingKey::UploadMaxSize;
        assert!(validate_setting_value(&key, "10485760").is_ok());
        assert!(validate_setting_value(&key, "ten megabytes").is_err());
    }

    #[test]
    fn boolean_setting_only_accepts_true_false() {
        let key = KnownSettingKey::TranscriptAllowSemesterOverride;
        assert!(validate_setting_value(&key, "true").is_ok());
        assert!(validate_setting_value(&key, "false").is_ok());
        assert!(validate_setting_value(&key, "yes").is_err());
    }

    #[test]
    fn eligibility_scope_is_an_enum() {
        let key = KnownSettingKey::TranscriptEligibilityScope;
        assert!(validate_setting_value(&key, "semester").is_ok());
        assert!(validate_setting_value(&key, "semester_category").is_ok());
        assert!(validate_setting_value(&key, "yearly").is_err());
    }

    #[test]
    fn json_array_setting_requires_string_array() {
        let key = KnownSettingKey::UploadAllowedTypes;
        assert!(validate_setting_value(&key, r#"[".pdf", ".png"]"#).is_ok());
        assert!(validate_setting_value(&key, ".pdf,.png").is_err());
    }
}
