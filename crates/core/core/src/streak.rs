//! Consecutive-day streak counting.

use std::collections::HashSet;

use crate::calendar::{format_date_key, parse_date_key};

/// Counts consecutive active days ending at `reference`.
///
/// Starts at the reference date key and walks backward one calendar day at
/// a time while each key is present in `active_dates`, stopping at the
/// first missing day. The streak never looks forward past the reference
/// date and never bridges a gap. An empty set, a reference day with no
/// activity, or an unparsable reference all yield 0.
pub fn compute_streak(active_dates: &HashSet<String>, reference: &str) -> u32 {
    let Ok(mut day) = parse_date_key(reference) else {
        return 0;
    };

    let mut streak = 0;
    while active_dates.contains(&format_date_key(day)) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(dates: &[&str]) -> HashSet<String> {
        dates.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(compute_streak(&HashSet::new(), "2024-01-10"), 0);
    }

    #[test]
    fn test_three_consecutive_days() {
        let dates = set(&["2024-01-10", "2024-01-09", "2024-01-08"]);
        assert_eq!(compute_streak(&dates, "2024-01-10"), 3);
    }

    #[test]
    fn test_gap_stops_the_streak() {
        let dates = set(&["2024-01-10", "2024-01-08"]);
        assert_eq!(compute_streak(&dates, "2024-01-10"), 1);
    }

    #[test]
    fn test_missing_reference_day_is_zero() {
        // Activity exists but not on the reference day itself.
        let dates = set(&["2024-01-09", "2024-01-08"]);
        assert_eq!(compute_streak(&dates, "2024-01-10"), 0);
    }

    #[test]
    fn test_does_not_look_forward_past_reference() {
        let dates = set(&["2024-01-11", "2024-01-10", "2024-01-09"]);
        assert_eq!(compute_streak(&dates, "2024-01-10"), 2);
    }

    #[test]
    fn test_crosses_month_boundary() {
        let dates = set(&["2024-02-01", "2024-01-31"]);
        assert_eq!(compute_streak(&dates, "2024-02-01"), 2);
    }

    #[test]
    fn test_crosses_year_boundary() {
        let dates = set(&["2024-01-01", "2023-12-31", "2023-12-30"]);
        assert_eq!(compute_streak(&dates, "2024-01-01"), 3);
    }

    #[test]
    fn test_unparsable_reference_is_zero() {
        let dates = set(&["2024-01-10"]);
        assert_eq!(compute_streak(&dates, "10/01/2024"), 0);
    }
}
