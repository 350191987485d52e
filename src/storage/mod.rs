use std::sync::Arc;

use crate::models::{
    achievements::{
        entities::{Achievement, AchievementStatus},
        requests::{AchievementListQuery, NewAchievement},
        responses::{AchievementListResponse, AchievementStatsResponse},
    },
    files::entities::File,
    profiles::{entities::StudentProfile, requests::UpsertProfileRequest},
    system::entities::{SettingValueType, SystemSetting},
    transcripts::{
        entities::Transcript,
        requests::{NewTranscript, TranscriptListQuery},
        responses::TranscriptListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学生档案方法
    // 创建或更新档案
    async fn upsert_profile(
        &self,
        user_id: i64,
        profile: UpsertProfileRequest,
    ) -> Result<StudentProfile>;
    // 获取档案
    async fn get_profile(&self, user_id: i64) -> Result<Option<StudentProfile>>;
    // 通过注册号获取档案
    async fn get_profile_by_registration(
        &self,
        registration_number: &str,
    ) -> Result<Option<StudentProfile>>;

    /// 成果记录方法
    // 创建成果记录
    async fn create_achievement(&self, achievement: NewAchievement) -> Result<Achievement>;
    // 通过ID获取成果记录
    async fn get_achievement_by_id(&self, id: i64) -> Result<Option<Achievement>>;
    // 分页列出成果记录（学生视角或审核队列）
    async fn list_achievements_with_pagination(
        &self,
        query: AchievementListQuery,
    ) -> Result<AchievementListResponse>;
    // 列出进入成绩单范围的全部记录（不分页）
    async fn list_achievements_for_transcript(
        &self,
        student_id: i64,
        semester: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Achievement>>;
    // 写入审核结果
    async fn update_achievement_review(
        &self,
        id: i64,
        status: AchievementStatus,
        remark: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Achievement>>;
    // 删除成果记录
    async fn delete_achievement(&self, id: i64) -> Result<bool>;
    // 学生看板统计
    async fn achievement_stats(&self, student_id: i64) -> Result<AchievementStatsResponse>;

    /// 成绩单方法（append-only，没有更新与删除）
    // 签发成绩单；验证码唯一索引冲突映射为 VerificationCodeConflict
    async fn create_transcript(&self, transcript: NewTranscript) -> Result<Transcript>;
    // 通过ID获取成绩单
    async fn get_transcript_by_id(&self, id: i64) -> Result<Option<Transcript>>;
    // 公开验证入口
    async fn get_transcript_by_code(&self, verification_code: &str) -> Result<Option<Transcript>>;
    // 历史成绩单
    async fn list_transcripts_with_pagination(
        &self,
        query: TranscriptListQuery,
    ) -> Result<TranscriptListResponse>;

    /// 文件管理方法
    // 上传文件
    async fn upload_file(
        &self,
        download_token: &str,
        file_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;

    /// 系统设置方法
    // 获取所有设置
    async fn list_all_settings(&self) -> Result<Vec<SystemSetting>>;
    // 通过 key 获取设置
    async fn get_setting_by_key(&self, key: &str) -> Result<Option<SystemSetting>>;
    // 更新设置
    async fn update_setting(&self, key: &str, value: &str, user_id: i64)
    -> Result<SystemSetting>;
    // 不存在时写入默认值（启动播种用）
    async fn ensure_setting(
        &self,
        key: &str,
        value: &str,
        value_type: SettingValueType,
        description: &str,
    ) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
