pub mod achievements;
pub mod auth;
pub mod files;
pub mod profiles;
pub mod system;
pub mod transcripts;
pub mod users;

pub use achievements::AchievementService;
pub use auth::AuthService;
pub use files::FileService;
pub use profiles::ProfileService;
pub use system::SystemService;
pub use transcripts::TranscriptService;
pub use users::UserService;
