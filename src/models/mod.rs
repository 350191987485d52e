pub mod achievements;
pub mod auth;
pub mod common;
pub mod files;
pub mod profiles;
pub mod system;
pub mod transcripts;
pub mod users;

pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;

/// 程序启动时间（用于运行状态接口与启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码（HTTP 响应 code 字段）
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    InternalServerError = 1000,
    Unauthorized = 1001,
    AuthFailed = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    BadRequest = 1005,

    // 用户与档案
    UserAlreadyExists = 2001,
    UserNotFound = 2002,
    ProfileNotFound = 2003,
    ProfileIncomplete = 2004,

    // 成果记录
    AchievementNotFound = 3001,
    PointsRuleNotFound = 3002,
    InvalidReviewTransition = 3003,
    AchievementNotEditable = 3004,

    // 成绩单
    TranscriptNotFound = 4001,
    TranscriptNotEligible = 4002,
    VerificationCodeInvalid = 4003,
    VerificationCodeConflict = 4004,

    // 文件
    FileNotFound = 5001,
    FileUploadFailed = 5002,
    FileTypeNotAllowed = 5003,
    FileSizeExceeded = 5004,
    MultifileUploadNotAllowed = 5005,

    // 系统设置
    SettingNotFound = 6001,
    SettingValueInvalid = 6002,
}
