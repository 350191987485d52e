use chrono::{Datelike, NaiveDate};

/// 学年上下半段。学年以 7 月开始：7–12 月为上半段，1–6 月为下半段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicHalf {
    /// 7 月至 12 月（奇数学期）
    First,
    /// 1 月至 6 月（偶数学期）
    Second,
}

impl AcademicHalf {
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= 7 {
            AcademicHalf::First
        } else {
            AcademicHalf::Second
        }
    }
}

/// 学年，按起始公历年标识。标签格式 "2024-25"。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicYear {
    pub start_year: i32,
}

impl AcademicYear {
    /// 日期所属学年：7 月起算，1–6 月归上一个起始年
    pub fn for_date(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 7 {
            date.year()
        } else {
            date.year() - 1
        };
        Self { start_year }
    }

    pub fn label(&self) -> String {
        format!("{}-{:02}", self.start_year, (self.start_year + 1) % 100)
    }
}

impl std::fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 学期序号，按入学年份推算，覆盖四年制八个学期。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Semester {
    Sem1,
    Sem2,
    Sem3,
    Sem4,
    Sem5,
    Sem6,
    Sem7,
    Sem8,
}

impl Semester {
    pub fn ordinal(&self) -> u8 {
        match self {
            Semester::Sem1 => 1,
            Semester::Sem2 => 2,
            Semester::Sem3 => 3,
            Semester::Sem4 => 4,
            Semester::Sem5 => 5,
            Semester::Sem6 => 6,
            Semester::Sem7 => 7,
            Semester::Sem8 => 8,
        }
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            1 => Some(Semester::Sem1),
            2 => Some(Semester::Sem2),
            3 => Some(Semester::Sem3),
            4 => Some(Semester::Sem4),
            5 => Some(Semester::Sem5),
            6 => Some(Semester::Sem6),
            7 => Some(Semester::Sem7),
            8 => Some(Semester::Sem8),
            _ => None,
        }
    }

    /// 由成果日期与入学年份推算学期。入学前或超出八个学期的日期返回 None。
    pub fn for_date(date: NaiveDate, entry_year: i32) -> Option<Self> {
        let academic_year = AcademicYear::for_date(date);
        let years_since_entry = academic_year.start_year - entry_year;
        if years_since_entry < 0 {
            return None;
        }
        let half = match AcademicHalf::for_date(date) {
            AcademicHalf::First => 1,
            AcademicHalf::Second => 2,
        };
        Self::from_ordinal(years_since_entry * 2 + half)
    }

    /// 学期对应的学年（需要入学年份还原）
    pub fn academic_year(&self, entry_year: i32) -> AcademicYear {
        AcademicYear {
            start_year: entry_year + (self.ordinal() as i32 - 1) / 2,
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sem-{}", self.ordinal())
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ordinal = s
            .strip_prefix("Sem-")
            .and_then(|n| n.parse::<i32>().ok())
            .ok_or_else(|| format!("Invalid semester label: {s}"))?;
        Self::from_ordinal(ordinal).ok_or_else(|| format!("Semester out of range: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn half_boundaries() {
        assert_eq!(AcademicHalf::for_date(date(2024, 7, 1)), AcademicHalf::First);
        assert_eq!(
            AcademicHalf::for_date(date(2024, 12, 31)),
            AcademicHalf::First
        );
        assert_eq!(
            AcademicHalf::for_date(date(2025, 1, 1)),
            AcademicHalf::Second
        );
        assert_eq!(
            AcademicHalf::for_date(date(2025, 6, 30)),
            AcademicHalf::Second
        );
    }

    #[test]
    fn academic_year_spans_july_to_june() {
        assert_eq!(AcademicYear::for_date(date(2024, 7, 1)).label(), "2024-25");
        assert_eq!(AcademicYear::for_date(date(2025, 3, 15)).label(), "2024-25");
        assert_eq!(AcademicYear::for_date(date(2025, 6, 30)).label(), "2024-25");
        assert_eq!(AcademicYear::for_date(date(2025, 7, 1)).label(), "2025-26");
    }

    #[test]
    fn academic_year_label_century_rollover() {
        assert_eq!(AcademicYear { start_year: 2099 }.label(), "2099-00");
    }

    #[test]
    fn semester_from_entry_year() {
        // 2023 年入学：2023 年 9 月为 Sem-1，2024 年 2 月为 Sem-2
        assert_eq!(
            Semester::for_date(date(2023, 9, 10), 2023),
            Some(Semester::Sem1)
        );
        assert_eq!(
            Semester::for_date(date(2024, 2, 10), 2023),
            Some(Semester::Sem2)
        );
        assert_eq!(
            Semester::for_date(date(2024, 10, 1), 2023),
            Some(Semester::Sem3)
        );
        assert_eq!(
            Semester::for_date(date(2027, 3, 1), 2023),
            Some(Semester::Sem8)
        );
    }

    #[test]
    fn semester_out_of_range() {
        // 入学之前
        assert_eq!(Semester::for_date(date(2022, 9, 1), 2023), None);
        // 第九个学期
        assert_eq!(Semester::for_date(date(2027, 8, 1), 2023), None);
    }

    #[test]
    fn display_and_parse_round() {
        assert_eq!(Semester::Sem3.to_string(), "Sem-3");
        assert_eq!("Sem-3".parse::<Semester>().unwrap(), Semester::Sem3);
        assert!("Sem-9".parse::<Semester>().is_err());
        assert!("sem-1".parse::<Semester>().is_err());
    }

    #[test]
    fn semester_academic_year() {
        assert_eq!(Semester::Sem1.academic_year(2023).label(), "2023-24");
        assert_eq!(Semester::Sem2.academic_year(2023).label(), "2023-24");
        assert_eq!(Semester::Sem3.academic_year(2023).label(), "2024-25");
        assert_eq!(Semester::Sem8.academic_year(2023).label(), "2026-27");
    }
}
