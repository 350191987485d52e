pub mod get;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::profiles::requests::UpsertProfileRequest;
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
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

    // 获取当前学生的档案
    pub async fn get_own_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_own_profile(self, request).await
    }

    // 创建或更新当前学生的档案
    pub async fn upsert_own_profile(
        &self,
        profile: UpsertProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_own_profile(self, profile, request).await
    }

    // 按用户 ID 获取档案（审核面板用）
    pub async fn get_profile(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_profile(self, user_id, request).await
    }
}
