use crate::models::achievements::entities::{AchievementRank, CompetitionLevel, CompetitionScope};

/// 计分表条目：分值与短代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEntry {
    pub points: i32,
    pub code: &'static str,
}

type TableRow = (
    CompetitionLevel,
    AchievementRank,
    CompetitionScope,
    i32,
    &'static str,
);

// 显式数据表。分值区间 [3,100]，national 范围约为 zonal 的两倍（封顶 100）。
// 代码格式：{级别缩写}{名次缩写}-{范围缩写}，如 CW-Z = College Winner, Zonal。
#[rustfmt::skip]
static POINTS_TABLE: &[TableRow] = &[
    // 院级
    (CompetitionLevel::College, AchievementRank::Winner,      CompetitionScope::Zonal,    10, "CW-Z"),
    (CompetitionLevel::College, AchievementRank::RunnerUp,    CompetitionScope::Zonal,     7, "CR-Z"),
    (CompetitionLevel::College, AchievementRank::Participant, CompetitionScope::Zonal,     3, "CP-Z"),
    (CompetitionLevel::College, AchievementRank::Winner,      CompetitionScope::National, 20, "CW-N"),
    (CompetitionLevel::College, AchievementRank::RunnerUp,    CompetitionScope::National, 14, "CR-N"),
    (CompetitionLevel::College, AchievementRank::Participant, CompetitionScope::National,  6, "CP-N"),
    // 校级
    (CompetitionLevel::University, AchievementRank::Winner,      CompetitionScope::Zonal,    15, "UW-Z"),
    (CompetitionLevel::University, AchievementRank::RunnerUp,    CompetitionScope::Zonal,    10, "UR-Z"),
    (CompetitionLevel::University, AchievementRank::Participant, CompetitionScope::Zonal,     5, "UP-Z"),
    (CompetitionLevel::University, AchievementRank::Winner,      CompetitionScope::National, 30, "UW-N"),
    (CompetitionLevel::University, AchievementRank::RunnerUp,    CompetitionScope::National, 20, "UR-N"),
    (CompetitionLevel::University, AchievementRank::Participant, CompetitionScope::National, 10, "UP-N"),
    // 省/邦级
    (CompetitionLevel::State, AchievementRank::Winner,      CompetitionScope::Zonal,    25, "SW-Z"),
    (CompetitionLevel::State, AchievementRank::RunnerUp,    CompetitionScope::Zonal,    18, "SR-Z"),
    (CompetitionLevel::State, AchievementRank::Participant, CompetitionScope::Zonal,     8, "SP-Z"),
    (CompetitionLevel::State, AchievementRank::Winner,      CompetitionScope::National, 50, "SW-N"),
    (CompetitionLevel::State, AchievementRank::RunnerUp,    CompetitionScope::National, 36, "SR-N"),
    (CompetitionLevel::State, AchievementRank::Participant, CompetitionScope::National, 16, "SP-N"),
    // 国家级
    (CompetitionLevel::National, AchievementRank::Winner,      CompetitionScope::Zonal,    40, "NW-Z"),
    (CompetitionLevel::National, AchievementRank::RunnerUp,    CompetitionScope::Zonal,    30, "NR-Z"),
    (CompetitionLevel::National, AchievementRank::Participant, CompetitionScope::Zonal,    12, "NP-Z"),
    (CompetitionLevel::National, AchievementRank::Winner,      CompetitionScope::National, 80, "NW-N"),
    (CompetitionLevel::National, AchievementRank::RunnerUp,    CompetitionScope::National, 60, "NR-N"),
    (CompetitionLevel::National, AchievementRank::Participant, CompetitionScope::National, 24, "NP-N"),
    // 国际级
    (CompetitionLevel::International, AchievementRank::Winner,      CompetitionScope::Zonal,     50, "IW-Z"),
    (CompetitionLevel::International, AchievementRank::RunnerUp,    CompetitionScope::Zonal,     40, "IR-Z"),
    (CompetitionLevel::International, AchievementRank::Participant, CompetitionScope::Zonal,     15, "IP-Z"),
    (CompetitionLevel::International, AchievementRank::Winner,      CompetitionScope::National, 100, "IW-N"),
    (CompetitionLevel::International, AchievementRank::RunnerUp,    CompetitionScope::National,  80, "IR-N"),
    (CompetitionLevel::International, AchievementRank::Participant, CompetitionScope::National,  30, "IP-N"),
];

/// 按（级别 × 名次 × 范围）查表。未定义的组合返回 None，调用方必须显式处理，
/// 不允许静默按 0 分落库。
pub fn calculate_points(
    level: CompetitionLevel,
    rank: AchievementRank,
    scope: CompetitionScope,
) -> Option<PointsEntry> {
    POINTS_TABLE
        .iter()
        .find(|(l, r, s, _, _)| *l == level && *r == rank && *s == scope)
        .map(|(_, _, _, points, code)| PointsEntry {
            points: *points,
            code,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use AchievementRank::*;
    use CompetitionLevel::*;
    use CompetitionScope::*;

    const ALL_LEVELS: [CompetitionLevel; 5] = [
        College,
        University,
        State,
        CompetitionLevel::National,
        International,
    ];
    const ALL_RANKS: [AchievementRank; 3] = [Winner, RunnerUp, Participant];

    #[test]
    fn known_entries() {
        assert_eq!(
            calculate_points(College, Winner, Zonal),
            Some(PointsEntry {
                points: 10,
                code: "CW-Z"
            })
        );
        assert_eq!(
            calculate_points(International, Winner, CompetitionScope::National),
            Some(PointsEntry {
                points: 100,
                code: "IW-N"
            })
        );
        assert_eq!(
            calculate_points(College, Participant, Zonal),
            Some(PointsEntry {
                points: 3,
                code: "CP-Z"
            })
        );
    }

    #[test]
    fn table_is_total_over_enum_domain() {
        for level in ALL_LEVELS {
            for rank in ALL_RANKS {
                for scope in [Zonal, CompetitionScope::National] {
                    assert!(
                        calculate_points(level, rank, scope).is_some(),
                        "missing entry for {level}/{rank}/{scope}"
                    );
                }
            }
        }
    }

    #[test]
    fn points_within_contract_range() {
        for (_, _, _, points, _) in POINTS_TABLE {
            assert!((3..=100).contains(points), "points {points} out of [3,100]");
        }
    }

    #[test]
    fn national_scope_never_below_zonal() {
        for level in ALL_LEVELS {
            for rank in ALL_RANKS {
                let zonal = calculate_points(level, rank, Zonal).unwrap().points;
                let national = calculate_points(level, rank, CompetitionScope::National)
                    .unwrap()
                    .points;
                assert!(national >= zonal, "{level}/{rank}: {national} < {zonal}");
            }
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = POINTS_TABLE.iter().map(|(_, _, _, _, c)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), POINTS_TABLE.len());
    }

    #[test]
    fn higher_rank_scores_at_least_as_much() {
        for level in ALL_LEVELS {
            for scope in [Zonal, CompetitionScope::National] {
                let w = calculate_points(level, Winner, scope).unwrap().points;
                let r = calculate_points(level, RunnerUp, scope).unwrap().points;
                let p = calculate_points(level, Participant, scope).unwrap().points;
                assert!(w >= r && r >= p);
            }
        }
    }
}
