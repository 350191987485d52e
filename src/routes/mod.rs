pub mod achievements;
pub mod auth;
pub mod files;
pub mod profiles;
pub mod system;
pub mod transcripts;
pub mod users;

pub use achievements::configure_achievement_routes;
pub use auth::configure_auth_routes;
pub use files::configure_file_routes;
pub use profiles::configure_profile_routes;
pub use system::configure_system_routes;
pub use transcripts::configure_transcript_routes;
pub use users::configure_user_routes;
