use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::transcripts::requests::{GenerateTranscriptRequest, TranscriptListParams};
use crate::models::users::entities::UserRole;
use crate::services::TranscriptService;
use crate::utils::{SafeIDI64, SafeVerificationCode};

// 懒加载的全局 TranscriptService 实例
static TRANSCRIPT_SERVICE: Lazy<TranscriptService> = Lazy::new(TranscriptService::new_lazy);

pub async fn generate_transcript(
    req: HttpRequest,
    data: web::Json<GenerateTranscriptRequest>,
) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE
        .generate_transcript(data.into_inner(), &req)
        .await
}

pub async fn list_own_transcripts(
    req: HttpRequest,
    query: web::Query<TranscriptListParams>,
) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE
        .list_own_transcripts(query.into_inner(), &req)
        .await
}

pub async fn get_transcript(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE.get_transcript(id.0, &req).await
}

pub async fn download_pdf(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE.download_pdf(id.0, &req).await
}

pub async fn verify_transcript(
    req: HttpRequest,
    code: SafeVerificationCode,
) -> ActixResult<HttpResponse> {
    TRANSCRIPT_SERVICE.verify_transcript(code.0, &req).await
}

// 配置路由
//
// /verify-transcript 是公开端点，不挂 JWT 中间件，供外部机构核验。
pub fn configure_transcript_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/transcripts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/generate")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::post().to(generate_transcript)),
            )
            .route("/{id}/pdf", web::get().to(download_pdf))
            .route("/{id}", web::get().to(get_transcript))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::get().to(list_own_transcripts)),
            ),
    );
    cfg.service(
        web::scope("/api/v1/verify-transcript")
            .route("/{code}", web::get().to(verify_transcript)),
    );
}
