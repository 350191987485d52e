//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod achievements;
mod files;
mod profiles;
mod system_settings;
mod transcripts;
mod users;

use crate::config::AppConfig;
use crate::errors::{BAPortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| BAPortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| BAPortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| BAPortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(BAPortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生档案模块
    async fn upsert_profile(
        &self,
        user_id: i64,
        profile: UpsertProfileRequest,
    ) -> Result<StudentProfile> {
        self.upsert_profile_impl(user_id, profile).await
    }

    async fn get_profile(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        self.get_profile_impl(user_id).await
    }

    async fn get_profile_by_registration(
        &self,
        registration_number: &str,
    ) -> Result<Option<StudentProfile>> {
        self.get_profile_by_registration_impl(registration_number)
            .await
    }

    // 成果记录模块
    async fn create_achievement(&self, achievement: NewAchievement) -> Result<Achievement> {
        self.create_achievement_impl(achievement).await
    }

    async fn get_achievement_by_id(&self, id: i64) -> Result<Option<Achievement>> {
        self.get_achievement_by_id_impl(id).await
    }

    async fn list_achievements_with_pagination(
        &self,
        query: AchievementListQuery,
    ) -> Result<AchievementListResponse> {
        self.list_achievements_with_pagination_impl(query).await
    }

    async fn list_achievements_for_transcript(
        &self,
        student_id: i64,
        semester: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Achievement>> {
        self.list_achievements_for_transcript_impl(student_id, semester, category)
            .await
    }

    async fn update_achievement_review(
        &self,
        id: i64,
        status: AchievementStatus,
        remark: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Achievement>> {
        self.update_achievement_review_impl(id, status, remark, reviewer_id)
            .await
    }

    async fn delete_achievement(&self, id: i64) -> Result<bool> {
        self.delete_achievement_impl(id).await
    }

    async fn achievement_stats(&self, student_id: i64) -> Result<AchievementStatsResponse> {
        self.achievement_stats_impl(student_id).await
    }

    // 成绩单模块
    async fn create_transcript(&self, transcript: NewTranscript) -> Result<Transcript> {
        self.create_transcript_impl(transcript).await
    }

    async fn get_transcript_by_id(&self, id: i64) -> Result<Option<Transcript>> {
        self.get_transcript_by_id_impl(id).await
    }

    async fn get_transcript_by_code(&self, verification_code: &str) -> Result<Option<Transcript>> {
        self.get_transcript_by_code_impl(verification_code).await
    }

    async fn list_transcripts_with_pagination(
        &self,
        query: TranscriptListQuery,
    ) -> Result<TranscriptListResponse> {
        self.list_transcripts_with_pagination_impl(query).await
    }

    // 文件模块
    async fn upload_file(
        &self,
        download_token: &str,
        file_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.upload_file_impl(download_token, file_name, file_size, file_type, user_id)
            .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }

    // 系统设置模块
    async fn list_all_settings(&self) -> Result<Vec<SystemSetting>> {
        self.list_all_settings_impl().await
    }

    async fn get_setting_by_key(&self, key: &str) -> Result<Option<SystemSetting>> {
        self.get_setting_by_key_impl(key).await
    }

    async fn update_setting(
        &self,
        key: &str,
        value: &str,
        user_id: i64,
    ) -> Result<SystemSetting> {
        self.update_setting_impl(key, value, user_id).await
    }

    async fn ensure_setting(
        &self,
        key: &str,
        value: &str,
        value_type: SettingValueType,
        description: &str,
    ) -> Result<()> {
        self.ensure_setting_impl(key, value, value_type, description)
            .await
    }
}
