//! 学生档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub student_name: String,
    pub school: String,
    pub program: String,
    pub entry_year: i32,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_profile(self) -> crate::models::profiles::entities::StudentProfile {
        use crate::models::profiles::entities::StudentProfile;
        use chrono::{DateTime, Utc};

        StudentProfile {
            user_id: self.user_id,
            registration_number: self.registration_number,
            student_name: self.student_name,
            school: self.school,
            program: self.program,
            entry_year: self.entry_year,
            father_name: self.father_name,
            mother_name: self.mother_name,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
