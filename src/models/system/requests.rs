use serde::Deserialize;

/// 更新配置请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingRequest {
    pub value: String,
}
