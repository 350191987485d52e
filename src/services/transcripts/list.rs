use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TranscriptService;
use crate::middlewares::RequireJWT;
use crate::models::transcripts::requests::{TranscriptListParams, TranscriptListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_own_transcripts(
    service: &TranscriptService,
    params: TranscriptListParams,
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

    let query = TranscriptListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id: Some(student_id),
        semester: params.semester,
    };

    match storage.list_transcripts_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Transcripts retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩单列表失败: {e}"),
            )),
        ),
    }
}
