//! 成绩单存储实现（append-only）

use super::SeaOrmStorage;
use crate::entity::transcripts::{ActiveModel, Column, Entity as Transcripts};
use crate::errors::{BAPortalError, Result};
use crate::models::{
    PaginationInfo,
    transcripts::{
        entities::Transcript,
        requests::{NewTranscript, TranscriptListQuery},
        responses::TranscriptListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 签发成绩单。验证码撞上唯一索引时映射为 VerificationCodeConflict，
    /// 由服务层换码重试。
    pub async fn create_transcript_impl(&self, new: NewTranscript) -> Result<Transcript> {
        let now = chrono::Utc::now().timestamp();

        let achievements_json = serde_json::to_string(&new.achievements)
            .map_err(|e| BAPortalError::serialization(format!("序列化成果快照失败: {e}")))?;

        let model = ActiveModel {
            student_id: Set(new.student_id),
            semester: Set(new.semester),
            academic_year: Set(new.academic_year),
            total_points: Set(new.total_points),
            grade: Set(new.grade),
            verification_code: Set(new.verification_code),
            achievements_json: Set(achievements_json),
            is_final: Set(true),
            generated_by: Set(new.generated_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            let message = e.to_string();
            if message.to_lowercase().contains("unique") {
                BAPortalError::verification_code_conflict(message)
            } else {
                BAPortalError::database_operation(format!("签发成绩单失败: {message}"))
            }
        })?;

        Ok(result.into_transcript())
    }

    /// 通过 ID 获取成绩单
    pub async fn get_transcript_by_id_impl(&self, id: i64) -> Result<Option<Transcript>> {
        let result = Transcripts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成绩单失败: {e}")))?;

        Ok(result.map(|m| m.into_transcript()))
    }

    /// 公开验证入口：按验证码查找
    pub async fn get_transcript_by_code_impl(
        &self,
        verification_code: &str,
    ) -> Result<Option<Transcript>> {
        let result = Transcripts::find()
            .filter(Column::VerificationCode.eq(verification_code))
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成绩单失败: {e}")))?;

        Ok(result.map(|m| m.into_transcript()))
    }

    /// 分页列出历史成绩单
    pub async fn list_transcripts_with_pagination_impl(
        &self,
        query: TranscriptListQuery,
    ) -> Result<TranscriptListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Transcripts::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成绩单总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成绩单页数失败: {e}")))?;

        let transcripts = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成绩单列表失败: {e}")))?;

        Ok(TranscriptListResponse {
            items: transcripts
                .into_iter()
                .map(|m| m.into_transcript())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
