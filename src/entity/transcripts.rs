//! 成绩单实体（append-only，无更新路径）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transcripts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub total_points: i32,
    pub grade: String,
    #[sea_orm(unique)]
    pub verification_code: String,
    /// 生成时冻结的成果快照，JSON 数组
    pub achievements_json: String,
    pub is_final: bool,
    pub generated_by: i64,
    pub created_at: i64,
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
    pub fn into_transcript(self) -> crate::models::transcripts::entities::Transcript {
        use crate::models::transcripts::entities::Transcript;
        use chrono::{DateTime, Utc};

        let achievements = serde_json::from_str(&self.achievements_json).unwrap_or_default();

        Transcript {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            academic_year: self.academic_year,
            total_points: self.total_points,
            grade: self.grade,
            verification_code: self.verification_code,
            achievements,
            is_final: self.is_final,
            generated_by: self.generated_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
