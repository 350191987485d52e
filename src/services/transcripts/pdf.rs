use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};

use super::TranscriptService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::pdf::{TranscriptIdentity, TranscriptRenderOptions, TranscriptRenderer,
    transcript_file_name};

pub async fn handle_download_pdf(
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

    let transcript = match storage.get_transcript_by_id(transcript_id).await {
        Ok(Some(transcript)) => transcript,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TranscriptNotFound,
                "成绩单不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩单失败: {e}"),
                )),
            );
        }
    };

    if !super::detail::can_access(&current_user, &transcript) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "无权下载该成绩单",
        )));
    }

    // 页眉身份信息来自学生档案
    let profile = match storage.get_profile(transcript.student_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ProfileNotFound,
                "成绩单对应的学生档案缺失",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询档案失败: {e}"),
                )),
            );
        }
    };

    let renderer = TranscriptRenderer::new(TranscriptRenderOptions {
        institution_name: config.transcript.institution_name.clone(),
        institution_subtitle: config.transcript.institution_subtitle.clone(),
        document_title: config.transcript.document_title.clone(),
        verify_base_url: config.transcript.verify_base_url.clone(),
    });

    let identity = TranscriptIdentity {
        student_name: profile.student_name.clone(),
        registration_number: profile.registration_number.clone(),
        school: profile.school.clone(),
        program: profile.program.clone(),
        father_name: profile.father_name.clone(),
        mother_name: profile.mother_name.clone(),
    };

    let bytes = match renderer.render(&identity, &transcript) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("PDF render failed for transcript {}: {}", transcript.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "成绩单 PDF 渲染失败",
                )),
            );
        }
    };

    let file_name = transcript_file_name(
        &config.transcript.file_prefix,
        &profile.registration_number,
        transcript.semester.as_deref(),
        transcript.academic_year.as_deref(),
    );

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "application/pdf"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(bytes))
}
