//! 预导入模块，方便使用

pub use super::achievements::{
    ActiveModel as AchievementActiveModel, Entity as Achievements, Model as AchievementModel,
};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::profiles::{
    ActiveModel as ProfileActiveModel, Entity as Profiles, Model as ProfileModel,
};
pub use super::system_settings::{
    ActiveModel as SystemSettingActiveModel, Entity as SystemSettings,
    Model as SystemSettingModel,
};
pub use super::transcripts::{
    ActiveModel as TranscriptActiveModel, Entity as Transcripts, Model as TranscriptModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
