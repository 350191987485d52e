pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod review;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::achievements::requests::{
    AchievementListParams, CreateAchievementRequest, ReviewAchievementRequest, ReviewQueueParams,
};
use crate::storage::Storage;

pub struct AchievementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AchievementService {
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

    // 学生提交成果
    pub async fn create_achievement(
        &self,
        create_request: CreateAchievementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, create_request, request).await
    }

    // 学生查看自己的成果列表
    pub async fn list_own_achievements(
        &self,
        params: AchievementListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_own_achievements(self, params, request).await
    }

    // 审核队列（教师看 pending，系主任看 faculty_recommended）
    pub async fn list_review_queue(
        &self,
        params: ReviewQueueParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_review_queue(self, params, request).await
    }

    // 成果详情
    pub async fn get_achievement(
        &self,
        achievement_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_achievement(self, achievement_id, request).await
    }

    // 审核动作（推荐/拒绝/批准）
    pub async fn review_achievement(
        &self,
        achievement_id: i64,
        review_request: ReviewAchievementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        review::handle_review(self, achievement_id, review_request, request).await
    }

    // 学生撤回未进入审核的记录
    pub async fn delete_achievement(
        &self,
        achievement_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, achievement_id, request).await
    }

    // 学生看板统计
    pub async fn get_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_stats(self, request).await
    }
}
