use serde::{Deserialize, Serialize};

// 成果类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Technical,
    Sports,
    Cultural,
    ArtsCulture,
    Startup,
    Community,
    Club,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Technical => "technical",
            AchievementCategory::Sports => "sports",
            AchievementCategory::Cultural => "cultural",
            AchievementCategory::ArtsCulture => "arts_culture",
            AchievementCategory::Startup => "startup",
            AchievementCategory::Community => "community",
            AchievementCategory::Club => "club",
        }
    }

    pub fn all() -> &'static [AchievementCategory] {
        &[
            AchievementCategory::Technical,
            AchievementCategory::Sports,
            AchievementCategory::Cultural,
            AchievementCategory::ArtsCulture,
            AchievementCategory::Startup,
            AchievementCategory::Community,
            AchievementCategory::Club,
        ]
    }
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AchievementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(AchievementCategory::Technical),
            "sports" => Ok(AchievementCategory::Sports),
            "cultural" => Ok(AchievementCategory::Cultural),
            "arts_culture" => Ok(AchievementCategory::ArtsCulture),
            "startup" => Ok(AchievementCategory::Startup),
            "community" => Ok(AchievementCategory::Community),
            "club" => Ok(AchievementCategory::Club),
            _ => Err(format!("Invalid achievement category: {s}")),
        }
    }
}

// 赛事级别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    College,
    University,
    State,
    National,
    International,
}

impl CompetitionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionLevel::College => "college",
            CompetitionLevel::University => "university",
            CompetitionLevel::State => "state",
            CompetitionLevel::National => "national",
            CompetitionLevel::International => "international",
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CompetitionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "college" => Ok(CompetitionLevel::College),
            "university" => Ok(CompetitionLevel::University),
            "state" => Ok(CompetitionLevel::State),
            "national" => Ok(CompetitionLevel::National),
            "international" => Ok(CompetitionLevel::International),
            _ => Err(format!("Invalid competition level: {s}")),
        }
    }
}

// 名次
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AchievementRank {
    Winner,
    RunnerUp,
    Participant,
}

impl AchievementRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementRank::Winner => "winner",
            AchievementRank::RunnerUp => "runner_up",
            AchievementRank::Participant => "participant",
        }
    }
}

impl std::fmt::Display for AchievementRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AchievementRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "winner" => Ok(AchievementRank::Winner),
            "runner_up" => Ok(AchievementRank::RunnerUp),
            "participant" => Ok(AchievementRank::Participant),
            _ => Err(format!("Invalid achievement rank: {s}")),
        }
    }
}

// 赛事范围（计分乘数轴，与级别正交）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionScope {
    Zonal,
    National,
}

impl CompetitionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionScope::Zonal => "zonal",
            CompetitionScope::National => "national",
        }
    }
}

impl std::fmt::Display for CompetitionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CompetitionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zonal" => Ok(CompetitionScope::Zonal),
            "national" => Ok(CompetitionScope::National),
            _ => Err(format!("Invalid competition scope: {s}")),
        }
    }
}

// 审核状态机：pending → faculty_recommended | faculty_rejected → hod_approved | hod_rejected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AchievementStatus {
    Pending,
    FacultyRecommended,
    FacultyRejected,
    HodApproved,
    HodRejected,
}

impl AchievementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementStatus::Pending => "pending",
            AchievementStatus::FacultyRecommended => "faculty_recommended",
            AchievementStatus::FacultyRejected => "faculty_rejected",
            AchievementStatus::HodApproved => "hod_approved",
            AchievementStatus::HodRejected => "hod_rejected",
        }
    }

    /// 终态：拒绝或系主任批准后不再流转
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AchievementStatus::FacultyRejected
                | AchievementStatus::HodApproved
                | AchievementStatus::HodRejected
        )
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, AchievementStatus::HodApproved)
    }

    /// 状态迁移是否合法
    pub fn can_transition_to(&self, next: AchievementStatus) -> bool {
        matches!(
            (self, next),
            (
                AchievementStatus::Pending,
                AchievementStatus::FacultyRecommended | AchievementStatus::FacultyRejected
            ) | (
                AchievementStatus::FacultyRecommended,
                AchievementStatus::HodApproved | AchievementStatus::HodRejected
            )
        )
    }
}

impl std::fmt::Display for AchievementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AchievementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AchievementStatus::Pending),
            "faculty_recommended" => Ok(AchievementStatus::FacultyRecommended),
            "faculty_rejected" => Ok(AchievementStatus::FacultyRejected),
            "hod_approved" => Ok(AchievementStatus::HodApproved),
            "hod_rejected" => Ok(AchievementStatus::HodRejected),
            _ => Err(format!("Invalid achievement status: {s}")),
        }
    }
}

// 成果记录实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub category: AchievementCategory,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
    pub level: CompetitionLevel,
    pub rank: AchievementRank,
    pub scope: CompetitionScope,
    pub description: Option<String>,
    pub achievement_date: chrono::NaiveDate,
    /// 提交时由计分表确定，不可独立编辑
    pub calculated_points: i32,
    pub category_code: String,
    /// 由成果日期与入学年份推算（如 "Sem-3"）
    pub semester: String,
    /// 学年标签（如 "2024-25"）
    pub academic_year: String,
    pub certificate_token: Option<String>,
    pub status: AchievementStatus,
    pub faculty_remark: Option<String>,
    pub faculty_reviewed_by: Option<i64>,
    pub faculty_reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub hod_remark: Option<String>,
    pub hod_reviewed_by: Option<i64>,
    pub hod_reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_transitions_follow_two_stage_flow() {
        use AchievementStatus::*;
        assert!(Pending.can_transition_to(FacultyRecommended));
        assert!(Pending.can_transition_to(FacultyRejected));
        assert!(FacultyRecommended.can_transition_to(HodApproved));
        assert!(FacultyRecommended.can_transition_to(HodRejected));

        assert!(!Pending.can_transition_to(HodApproved));
        assert!(!FacultyRejected.can_transition_to(FacultyRecommended));
        assert!(!HodApproved.can_transition_to(HodRejected));
        assert!(!HodRejected.can_transition_to(Pending));
    }

    #[test]
    fn terminal_states() {
        use AchievementStatus::*;
        assert!(!Pending.is_terminal());
        assert!(!FacultyRecommended.is_terminal());
        assert!(FacultyRejected.is_terminal());
        assert!(HodApproved.is_terminal());
        assert!(HodRejected.is_terminal());
        assert!(HodApproved.is_approved());
        assert!(!FacultyRecommended.is_approved());
    }
}
