use crate::models::achievements::entities::Achievement;
use crate::models::transcripts::entities::TranscriptAchievement;

use super::grade::grade_for_points;

/// 成绩单资格校验失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    /// 范围内没有任何成果记录
    NoAchievements,
    /// 仍有未走完审核流程的记录
    PendingReviews { count: usize },
    /// 有记录但没有一条通过终审
    NoApprovedAchievements,
}

impl std::fmt::Display for EligibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityError::NoAchievements => write!(f, "该范围内没有成果记录"),
            EligibilityError::PendingReviews { count } => {
                write!(f, "仍有 {count} 条记录未完成审核")
            }
            EligibilityError::NoApprovedAchievements => write!(f, "没有已通过终审的成果记录"),
        }
    }
}

/// 成绩单草稿：落库与渲染共用的中间产物
#[derive(Debug, Clone)]
pub struct TranscriptDraft {
    pub total_points: i32,
    pub grade: &'static str,
    pub achievements: Vec<TranscriptAchievement>,
}

/// 资格规则：范围内记录非空、全部进入终态、且至少一条 hod_approved。
/// 被拒绝的记录不阻塞生成，但也不计分。
pub fn check_eligibility(achievements: &[Achievement]) -> Result<(), EligibilityError> {
    if achievements.is_empty() {
        return Err(EligibilityError::NoAchievements);
    }
    let pending = achievements
        .iter()
        .filter(|a| !a.status.is_terminal())
        .count();
    if pending > 0 {
        return Err(EligibilityError::PendingReviews { count: pending });
    }
    if !achievements.iter().any(|a| a.status.is_approved()) {
        return Err(EligibilityError::NoApprovedAchievements);
    }
    Ok(())
}

/// 组装成绩单草稿：只聚合终审通过的记录，快照全部展示字段。
/// 先做资格校验，未通过时不产出草稿。
pub fn assemble_draft(achievements: &[Achievement]) -> Result<TranscriptDraft, EligibilityError> {
    check_eligibility(achievements)?;

    let approved: Vec<&Achievement> = achievements
        .iter()
        .filter(|a| a.status.is_approved())
        .collect();
    let total_points: i32 = approved.iter().map(|a| a.calculated_points).sum();

    let snapshots = approved
        .iter()
        .map(|a| TranscriptAchievement {
            achievement_id: a.id,
            title: a.title.clone(),
            category: a.category.to_string(),
            level: a.level.to_string(),
            rank: a.rank.to_string(),
            points: a.calculated_points,
            semester: a.semester.clone(),
            academic_year: a.academic_year.clone(),
        })
        .collect();

    Ok(TranscriptDraft {
        total_points,
        grade: grade_for_points(total_points),
        achievements: snapshots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::achievements::entities::{
        AchievementCategory, AchievementRank, AchievementStatus, CompetitionLevel,
        CompetitionScope,
    };

    fn achievement(id: i64, points: i32, status: AchievementStatus) -> Achievement {
        Achievement {
            id,
            student_id: 1,
            title: format!("Achievement {id}"),
            category: AchievementCategory::Technical,
            event_type: None,
            organizer: None,
            level: CompetitionLevel::National,
            rank: AchievementRank::Winner,
            scope: CompetitionScope::Zonal,
            description: None,
            achievement_date: chrono::NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            calculated_points: points,
            category_code: "NW-Z".to_string(),
            semester: "Sem-3".to_string(),
            academic_year: "2024-25".to_string(),
            certificate_token: None,
            status,
            faculty_remark: None,
            faculty_reviewed_by: None,
            faculty_reviewed_at: None,
            hod_remark: None,
            hod_reviewed_by: None,
            hod_reviewed_at: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn empty_scope_not_eligible() {
        assert_eq!(check_eligibility(&[]), Err(EligibilityError::NoAchievements));
    }

    #[test]
    fn pending_blocks_generation_even_with_approved() {
        let records = vec![
            achievement(1, 40, AchievementStatus::HodApproved),
            achievement(2, 10, AchievementStatus::Pending),
            achievement(3, 10, AchievementStatus::FacultyRecommended),
        ];
        assert_eq!(
            check_eligibility(&records),
            Err(EligibilityError::PendingReviews { count: 2 })
        );
    }

    #[test]
    fn all_rejected_not_eligible() {
        let records = vec![
            achievement(1, 40, AchievementStatus::FacultyRejected),
            achievement(2, 10, AchievementStatus::HodRejected),
        ];
        assert_eq!(
            check_eligibility(&records),
            Err(EligibilityError::NoApprovedAchievements)
        );
    }

    #[test]
    fn rejected_records_do_not_count_points() {
        let records = vec![
            achievement(1, 100, AchievementStatus::HodApproved),
            achievement(2, 80, AchievementStatus::HodApproved),
            achievement(3, 60, AchievementStatus::HodRejected),
        ];
        let draft = assemble_draft(&records).unwrap();
        assert_eq!(draft.total_points, 180);
        assert_eq!(draft.achievements.len(), 2);
    }

    #[test]
    fn total_240_grades_a_plus() {
        let records = vec![
            achievement(1, 100, AchievementStatus::HodApproved),
            achievement(2, 80, AchievementStatus::HodApproved),
            achievement(3, 60, AchievementStatus::HodApproved),
        ];
        let draft = assemble_draft(&records).unwrap();
        assert_eq!(draft.total_points, 240);
        assert_eq!(draft.grade, "A+");
    }

    #[test]
    fn snapshot_carries_display_fields() {
        let records = vec![achievement(7, 40, AchievementStatus::HodApproved)];
        let draft = assemble_draft(&records).unwrap();
        let snap = &draft.achievements[0];
        assert_eq!(snap.achievement_id, 7);
        assert_eq!(snap.category, "technical");
        assert_eq!(snap.level, "national");
        assert_eq!(snap.rank, "winner");
        assert_eq!(snap.semester, "Sem-3");
        assert_eq!(snap.academic_year, "2024-25");
    }
}
