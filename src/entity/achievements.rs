//! 成果记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub category: String,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
    pub level: String,
    pub rank: String,
    pub scope: String,
    pub description: Option<String>,
    pub calculated_points: i32,
    pub category_code: String,
    pub achievement_date: Date,
    pub semester: String,
    pub academic_year: String,
    pub status: String,
    pub certificate_token: Option<String>,
    pub faculty_remark: Option<String>,
    pub faculty_reviewed_by: Option<i64>,
    pub faculty_reviewed_at: Option<i64>,
    pub hod_remark: Option<String>,
    pub hod_reviewed_by: Option<i64>,
    pub hod_reviewed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_achievement(self) -> crate::models::achievements::entities::Achievement {
        use crate::models::achievements::entities::{
            Achievement, AchievementCategory, AchievementRank, AchievementStatus, CompetitionLevel,
            CompetitionScope,
        };
        use chrono::{DateTime, Utc};

        Achievement {
            id: self.id,
            student_id: self.student_id,
            title: self.title,
            category: self
                .category
                .parse::<AchievementCategory>()
                .unwrap_or(AchievementCategory::Technical),
            event_type: self.event_type,
            organizer: self.organizer,
            level: self
                .level
                .parse::<CompetitionLevel>()
                .unwrap_or(CompetitionLevel::College),
            rank: self
                .rank
                .parse::<AchievementRank>()
                .unwrap_or(AchievementRank::Participant),
            scope: self
                .scope
                .parse::<CompetitionScope>()
                .unwrap_or(CompetitionScope::Zonal),
            description: self.description,
            achievement_date: self.achievement_date,
            calculated_points: self.calculated_points,
            category_code: self.category_code,
            semester: self.semester,
            academic_year: self.academic_year,
            certificate_token: self.certificate_token,
            status: self
                .status
                .parse::<AchievementStatus>()
                .unwrap_or(AchievementStatus::Pending),
            faculty_remark: self.faculty_remark,
            faculty_reviewed_by: self.faculty_reviewed_by,
            faculty_reviewed_at: self
                .faculty_reviewed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            hod_remark: self.hod_remark,
            hod_reviewed_by: self.hod_reviewed_by,
            hod_reviewed_at: self
                .hod_reviewed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
