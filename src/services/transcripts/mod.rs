pub mod detail;
pub mod generate;
pub mod list;
pub mod pdf;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::transcripts::requests::{GenerateTranscriptRequest, TranscriptListParams};
use crate::storage::Storage;

pub struct TranscriptService {
    storage: Option<Arc<dyn Storage>>,
}

impl TranscriptService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 生成成绩单（append-only：每次生成一条新记录）
    pub async fn generate_transcript(
        &self,
        generate_request: GenerateTranscriptRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::handle_generate(self, generate_request, request).await
    }

    // 当前学生的历史成绩单
    pub async fn list_own_transcripts(
        &self,
        params: TranscriptListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_own_transcripts(self, params, request).await
    }

    // 成绩单详情
    pub async fn get_transcript(
        &self,
        transcript_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_transcript(self, transcript_id, request).await
    }

    // 下载成绩单 PDF
    pub async fn download_pdf(
        &self,
        transcript_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pdf::handle_download_pdf(self, transcript_id, request).await
    }

    // 公开验证入口（无需认证）
    pub async fn verify_transcript(
        &self,
        verification_code: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::handle_verify(self, verification_code, request).await
    }
}
