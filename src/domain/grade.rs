/// 总分到等级的换算。阈值为闭区间下界，250 及以上为 O。
pub fn grade_for_points(total: i32) -> &'static str {
    match total {
        t if t >= 250 => "O",
        t if t >= 200 => "A+",
        t if t >= 150 => "A",
        t if t >= 100 => "B+",
        t if t >= 50 => "B",
        _ => "C",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(grade_for_points(250), "O");
        assert_eq!(grade_for_points(300), "O");
        assert_eq!(grade_for_points(249), "A+");
        assert_eq!(grade_for_points(200), "A+");
        assert_eq!(grade_for_points(240), "A+");
        assert_eq!(grade_for_points(199), "A");
        assert_eq!(grade_for_points(150), "A");
        assert_eq!(grade_for_points(100), "B+");
        assert_eq!(grade_for_points(50), "B");
        assert_eq!(grade_for_points(49), "C");
        assert_eq!(grade_for_points(0), "C");
    }

    #[test]
    fn monotonic_in_total() {
        // 等级随分数单调不降
        let order = ["C", "B", "B+", "A", "A+", "O"];
        let idx = |g: &str| order.iter().position(|x| *x == g).unwrap();
        let mut prev = idx(grade_for_points(0));
        for total in 1..=400 {
            let cur = idx(grade_for_points(total));
            assert!(cur >= prev, "grade regressed at {total}");
            prev = cur;
        }
    }
}
