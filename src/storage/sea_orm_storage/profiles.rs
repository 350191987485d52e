//! 学生档案存储实现

use super::SeaOrmStorage;
use crate::entity::profiles::{ActiveModel, Column, Entity as Profiles};
use crate::errors::{BAPortalError, Result};
use crate::models::profiles::{entities::StudentProfile, requests::UpsertProfileRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建或更新学生档案（user_id 为主键，存在即覆盖）
    pub async fn upsert_profile_impl(
        &self,
        user_id: i64,
        req: UpsertProfileRequest,
    ) -> Result<StudentProfile> {
        let now = chrono::Utc::now().timestamp();

        let existing = Profiles::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询档案失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let created_at = model.created_at;
                let mut active: ActiveModel = model.into();
                active.registration_number = Set(req.registration_number);
                active.student_name = Set(req.student_name);
                active.school = Set(req.school);
                active.program = Set(req.program);
                active.entry_year = Set(req.entry_year);
                active.father_name = Set(req.father_name);
                active.mother_name = Set(req.mother_name);
                active.created_at = Set(created_at);
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| BAPortalError::database_operation(format!("更新档案失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    user_id: Set(user_id),
                    registration_number: Set(req.registration_number),
                    student_name: Set(req.student_name),
                    school: Set(req.school),
                    program: Set(req.program),
                    entry_year: Set(req.entry_year),
                    father_name: Set(req.father_name),
                    mother_name: Set(req.mother_name),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| BAPortalError::database_operation(format!("创建档案失败: {e}")))?
            }
        };

        Ok(result.into_profile())
    }

    /// 获取学生档案
    pub async fn get_profile_impl(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        let result = Profiles::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询档案失败: {e}")))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 通过注册号获取档案
    pub async fn get_profile_by_registration_impl(
        &self,
        registration_number: &str,
    ) -> Result<Option<StudentProfile>> {
        let result = Profiles::find()
            .filter(Column::RegistrationNumber.eq(registration_number))
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("查询档案失败: {e}")))?;

        Ok(result.map(|m| m.into_profile()))
    }
}
