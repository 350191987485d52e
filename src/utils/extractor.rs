//! 路径参数安全提取器
//!
//! 统一在进入业务逻辑前做格式校验，非法参数直接返回 400 JSON 响应，
//! 避免在每个服务函数里重复 parse。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 路径中的 `{id}`，必须是正整数
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) if id > 0 => Ok(SafeIDI64(id)),
                _ => Err(bad_request("Invalid id in path: must be a positive integer")),
            },
            None => Err(bad_request("Missing id in path")),
        };
        ready(result)
    }
}

/// 路径中的 `{token}`，文件下载令牌（UUID 格式）
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("token") {
            Some(raw) if uuid::Uuid::parse_str(raw).is_ok() => Ok(SafeFileToken(raw.to_string())),
            Some(_) => Err(bad_request("Invalid file token in path")),
            None => Err(bad_request("Missing file token in path")),
        };
        ready(result)
    }
}

/// 路径中的 `{key}`，必须是已知配置键
pub struct SafeSettingKey(pub String);

impl FromRequest for SafeSettingKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        use crate::models::system::entities::KnownSettingKey;

        let result = match req.match_info().get("key") {
            Some(raw) => match raw.parse::<KnownSettingKey>() {
                Ok(key) => Ok(SafeSettingKey(key.as_str().to_string())),
                Err(_) => Err(bad_request("Unknown setting key in path")),
            },
            None => Err(bad_request("Missing setting key in path")),
        };
        ready(result)
    }
}

/// 路径中的 `{code}`，成绩单验证码。格式不符直接拒绝，不触发数据库查询。
pub struct SafeVerificationCode(pub String);

impl FromRequest for SafeVerificationCode {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        use crate::utils::verify_code::looks_like_verification_code;

        let result = match req.match_info().get("code") {
            Some(raw) if looks_like_verification_code(raw) => {
                Ok(SafeVerificationCode(raw.to_string()))
            }
            Some(_) => Err(bad_request("Invalid verification code format")),
            None => Err(bad_request("Missing verification code in path")),
        };
        ready(result)
    }
}
