//! 成果记录存储实现

use super::SeaOrmStorage;
use crate::entity::achievements::{ActiveModel, Column, Entity as Achievements};
use crate::errors::{BAPortalError, Result};
use crate::models::{
    PaginationInfo,
    achievements::{
        entities::{Achievement, AchievementStatus},
        requests::{AchievementListQuery, NewAchievement},
        responses::{AchievementListResponse, AchievementStatsResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建成果记录，初始状态 pending
    pub async fn create_achievement_impl(&self, new: NewAchievement) -> Result<Achievement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(new.student_id),
            title: Set(new.title),
            category: Set(new.category.to_string()),
            event_type: Set(new.event_type),
            organizer: Set(new.organizer),
            level: Set(new.level.to_string()),
            rank: Set(new.rank.to_string()),
            scope: Set(new.scope.to_string()),
            description: Set(new.description),
            calculated_points: Set(new.calculated_points),
            category_code: Set(new.category_code),
            achievement_date: Set(new.achievement_date),
            semester: Set(new.semester),
            academic_year: Set(new.academic_year),
            status: Set(AchievementStatus::Pending.to_string()),
            certificate_token: Set(new.certificate_token),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("创建成果记录失败: {e}")))?;

        Ok(result.into_achievement())
    }

    /// 通过 ID 获取成果记录
    pub async fn get_achievement_by_id_impl(&self, id: i64) -> Result<Option<Achievement>> {
        let result = Achievements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成果记录失败: {e}")))?;

        Ok(result.map(|m| m.into_achievement()))
    }

    /// 分页列出成果记录
    pub async fn list_achievements_with_pagination_impl(
        &self,
        query: AchievementListQuery,
    ) -> Result<AchievementListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Achievements::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category.to_string()));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成果总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成果页数失败: {e}")))?;

        let achievements = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成果列表失败: {e}")))?;

        Ok(AchievementListResponse {
            items: achievements
                .into_iter()
                .map(|m| m.into_achievement())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 成绩单范围内的全部记录（不分页，资格校验和组装用）
    pub async fn list_achievements_for_transcript_impl(
        &self,
        student_id: i64,
        semester: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Achievement>> {
        let mut select = Achievements::find().filter(Column::StudentId.eq(student_id));

        if let Some(semester) = semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(category) = category {
            select = select.filter(Column::Category.eq(category));
        }

        let records = select
            .order_by_asc(Column::AchievementDate)
            .all(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成果记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_achievement()).collect())
    }

    /// 写入审核结果。根据目标状态决定写教师列还是系主任列。
    pub async fn update_achievement_review_impl(
        &self,
        id: i64,
        status: AchievementStatus,
        remark: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Achievement>> {
        let existing = Achievements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询成果记录失败: {e}")))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let mut active: ActiveModel = model.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(now);

        match status {
            AchievementStatus::FacultyRecommended | AchievementStatus::FacultyRejected => {
                active.faculty_remark = Set(remark);
                active.faculty_reviewed_by = Set(Some(reviewer_id));
                active.faculty_reviewed_at = Set(Some(now));
            }
            AchievementStatus::HodApproved | AchievementStatus::HodRejected => {
                active.hod_remark = Set(remark);
                active.hod_reviewed_by = Set(Some(reviewer_id));
                active.hod_reviewed_at = Set(Some(now));
            }
            AchievementStatus::Pending => {
                return Err(BAPortalError::validation(
                    "审核结果不允许回退到 pending".to_string(),
                ));
            }
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("更新审核结果失败: {e}")))?;

        Ok(Some(updated.into_achievement()))
    }

    /// 删除成果记录
    pub async fn delete_achievement_impl(&self, id: i64) -> Result<bool> {
        let result = Achievements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("删除成果记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生看板统计
    pub async fn achievement_stats_impl(&self, student_id: i64) -> Result<AchievementStatsResponse> {
        let records = self
            .list_achievements_for_transcript_impl(student_id, None, None)
            .await?;

        let total = records.len() as i64;
        let pending = records.iter().filter(|a| !a.status.is_terminal()).count() as i64;
        let approved = records.iter().filter(|a| a.status.is_approved()).count() as i64;
        let rejected = records
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    AchievementStatus::FacultyRejected | AchievementStatus::HodRejected
                )
            })
            .count() as i64;
        let total_points_approved = records
            .iter()
            .filter(|a| a.status.is_approved())
            .map(|a| a.calculated_points as i64)
            .sum();

        Ok(AchievementStatsResponse {
            total,
            pending,
            approved,
            rejected,
            total_points_approved,
        })
    }
}
