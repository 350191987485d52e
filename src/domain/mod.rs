//! 核心业务规则：计分表、学期推算、等级换算与成绩单组装。
//!
//! 这里的函数全部是纯函数，不依赖存储层，便于独立测试。

pub mod grade;
pub mod points;
pub mod semester;
pub mod transcript;

pub use grade::grade_for_points;
pub use points::{PointsEntry, calculate_points};
pub use semester::{AcademicHalf, AcademicYear, Semester};
pub use transcript::{EligibilityError, TranscriptDraft, assemble_draft, check_eligibility};
