//! 系统设置存储实现

use sea_orm::{ActiveModelTrait, EntityTrait, Order, QueryOrder, Set};

use crate::entity::prelude::SystemSettings;
use crate::errors::{BAPortalError, Result};
use crate::models::system::entities::{SettingValueType, SystemSetting};

use super::SeaOrmStorage;

impl SeaOrmStorage {
    /// 获取所有设置
    pub(crate) async fn list_all_settings_impl(&self) -> Result<Vec<SystemSetting>> {
        let settings = SystemSettings::find()
            .order_by(crate::entity::system_settings::Column::Key, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("获取设置列表失败: {e}")))?;

        Ok(settings.into_iter().map(|s| s.into_setting()).collect())
    }

    /// 通过 key 获取设置
    pub(crate) async fn get_setting_by_key_impl(&self, key: &str) -> Result<Option<SystemSetting>> {
        let setting = SystemSettings::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("获取设置失败: {e}")))?;

        Ok(setting.map(|s| s.into_setting()))
    }

    /// 更新设置
    pub(crate) async fn update_setting_impl(
        &self,
        key: &str,
        value: &str,
        user_id: i64,
    ) -> Result<SystemSetting> {
        let now = chrono::Utc::now().timestamp();

        // 获取当前设置
        let existing = SystemSettings::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("获取设置失败: {e}")))?
            .ok_or_else(|| BAPortalError::not_found(format!("配置项不存在: {key}")))?;

        let mut active_model: crate::entity::system_settings::ActiveModel = existing.into();
        active_model.value = Set(value.to_string());
        active_model.updated_at = Set(now);
        active_model.updated_by = Set(Some(user_id));

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("更新设置失败: {e}")))?;

        Ok(updated.into_setting())
    }

    /// 不存在时写入默认值（启动播种用）
    pub(crate) async fn ensure_setting_impl(
        &self,
        key: &str,
        value: &str,
        value_type: SettingValueType,
        description: &str,
    ) -> Result<()> {
        let existing = SystemSettings::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("获取设置失败: {e}")))?;

        if existing.is_some() {
            return Ok(());
        }

        let now = chrono::Utc::now().timestamp();
        let model = crate::entity::system_settings::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            value_type: Set(value_type.to_string()),
            description: Set(Some(description.to_string())),
            updated_at: Set(now),
            updated_by: Set(None),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| BAPortalError::database_operation(format!("写入默认设置失败: {e}")))?;

        Ok(())
    }
}
