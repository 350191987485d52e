use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TranscriptService;
use crate::middlewares::RequireJWT;
use crate::models::transcripts::entities::Transcript;
use crate::models::transcripts::responses::TranscriptResponse;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};

/// 学生只能访问自己的成绩单，审核角色与管理员可访问全部
pub(crate) fn can_access(user: &User, transcript: &Transcript) -> bool {
    user.role != UserRole::Student || transcript.student_id == user.id
}

pub async fn get_transcript(
    service: &TranscriptService,
    transcript_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.get_transcript_by_id(transcript_id).await {
        Ok(Some(transcript)) => {
            if !can_access(&current_user, &transcript) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "无权查看该成绩单",
                )));
            }
            let verify_url = transcript.verify_url(&config.transcript.verify_base_url);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TranscriptResponse {
                    transcript,
                    verify_url,
                },
                "Transcript retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TranscriptNotFound,
            "成绩单不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩单失败: {e}"),
            )),
        ),
    }
}
