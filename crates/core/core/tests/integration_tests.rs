//! Integration tests for HabitVault Core
//!
//! This test suite covers the pure derived-metrics layer through the
//! public API:
//! - Calendar keys and windows
//! - Streak counting
//! - Weekly aggregation and the two-stage rounding of completion_rate
//! - Error handling

use std::collections::{HashMap, HashSet};

use habit_vault_core::{
    build_summary, build_weekly_bars, compute_streak, last_n_days, today, weekday_label,
    HabitError,
};

mod calendar_tests {
    use super::*;

    #[test]
    fn test_last_n_days_window_shape() {
        let days = last_n_days(7);
        assert_eq!(days.len(), 7);

        // Strictly increasing, ending at today.
        let mut sorted = days.clone();
        sorted.sort();
        assert_eq!(sorted, days);
        assert_eq!(days.last().unwrap(), &today());
    }

    #[test]
    fn test_weekday_label_is_calendar_arithmetic() {
        // Fixed dates with known weekdays; no timezone involved.
        assert_eq!(weekday_label("2024-01-10").unwrap(), "Wed");
        assert_eq!(weekday_label("1999-12-31").unwrap(), "Fri");
        assert_eq!(weekday_label("2024-02-29").unwrap(), "Thu");
    }

    #[test]
    fn test_weekday_label_error_is_validation() {
        let err = weekday_label("2024-02-30").unwrap_err();
        assert!(matches!(err, HabitError::InvalidField { .. }));
        assert_eq!(err.status_code(), 422);
    }
}

mod streak_tests {
    use super::*;

    fn set(dates: &[&str]) -> HashSet<String> {
        dates.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_streak_empty_set() {
        assert_eq!(compute_streak(&HashSet::new(), "2024-01-10"), 0);
    }

    #[test]
    fn test_streak_consecutive_and_gapped() {
        let full = set(&["2024-01-10", "2024-01-09", "2024-01-08"]);
        assert_eq!(compute_streak(&full, "2024-01-10"), 3);

        let gapped = set(&["2024-01-10", "2024-01-08"]);
        assert_eq!(compute_streak(&gapped, "2024-01-10"), 1);
    }

    #[test]
    fn test_streak_month_boundary() {
        let dates = set(&["2024-02-01", "2024-01-31"]);
        assert_eq!(compute_streak(&dates, "2024-02-01"), 2);
    }
}

mod stats_tests {
    use super::*;

    #[test]
    fn test_weekly_bars_no_active_habits() {
        let mut completions = HashMap::new();
        completions.insert(today(), 5);

        let bars = build_weekly_bars(0, &completions).unwrap();
        assert_eq!(bars.len(), 7);
        assert!(bars.iter().all(|b| b.pct == 0));
    }

    #[test]
    fn test_completion_rate_locks_mean_of_rounded_formula() {
        // 3 active habits, one completion on each of two days. Mean of the
        // rounded daily percentages: round((33 + 33) / 7) = 9. The pooled
        // ratio round(2/21*100) = 10 must NOT be produced.
        let mut completions = HashMap::new();
        completions.insert("2024-01-05".to_string(), 1);
        completions.insert("2024-01-08".to_string(), 1);

        let summary =
            build_summary(3, 0, &completions, &HashSet::new(), "2024-01-10").unwrap();
        assert_eq!(summary.completion_rate, 9);
    }

    #[test]
    fn test_summary_combines_streak_and_counts() {
        let mut completions = HashMap::new();
        completions.insert("2024-01-10".to_string(), 2);
        completions.insert("2024-01-09".to_string(), 1);

        let all_dates: HashSet<String> = ["2024-01-10", "2024-01-09"]
            .iter()
            .map(|d| d.to_string())
            .collect();

        let summary = build_summary(2, 2, &completions, &all_dates, "2024-01-10").unwrap();
        assert_eq!(summary.streak, 2);
        assert_eq!(summary.today_planned, 2);
        assert_eq!(summary.today_done, 2);
        // Daily pcts: 100, 50, and five zeros -> round(150/7) = 21.
        assert_eq!(summary.completion_rate, 21);
    }
}
