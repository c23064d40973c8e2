//! Weekly aggregation views over completion records.
//!
//! Both views window over the 7 calendar days ending at the reference day.
//! `completion_rate` is the mean of the seven per-day percentages, each
//! rounded before averaging, then the mean rounded again. This two-stage
//! rounding diverges from a pooled completed/planned ratio and is kept
//! exactly for compatibility with existing clients.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::calendar::{self, parse_date_key, weekday_label};
use crate::error::HabitResult;
use crate::streak::compute_streak;

/// Number of days covered by the weekly views.
pub const WEEKLY_WINDOW_DAYS: usize = 7;

/// One bar of the weekly chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBar {
    /// 3-letter weekday label.
    pub day: String,
    /// Percentage of active habits completed that day, rounded.
    pub pct: u32,
}

/// Headline statistics for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Consecutive days with at least one completion, ending today.
    pub streak: u32,
    /// Count of non-archived habits.
    pub today_planned: usize,
    /// Count of completions dated today.
    pub today_done: usize,
    /// Mean of the rounded daily percentages, rounded.
    pub completion_rate: u32,
}

/// Percentage of active habits completed, rounded half away from zero.
/// Zero active habits is defined as 0, never a division error.
fn day_pct(completed: usize, active_habit_count: usize) -> u32 {
    if active_habit_count == 0 {
        return 0;
    }
    ((completed as f64 / active_habit_count as f64) * 100.0).round() as u32
}

fn bars_for_window(
    days: &[String],
    active_habit_count: usize,
    completions_by_date: &HashMap<String, usize>,
) -> HabitResult<Vec<DayBar>> {
    days.iter()
        .map(|d| {
            let completed = completions_by_date.get(d).copied().unwrap_or(0);
            Ok(DayBar {
                day: weekday_label(d)?.to_string(),
                pct: day_pct(completed, active_habit_count),
            })
        })
        .collect()
}

/// Builds the weekly bar chart for the 7 days ending today, oldest first.
pub fn build_weekly_bars(
    active_habit_count: usize,
    completions_by_date: &HashMap<String, usize>,
) -> HabitResult<Vec<DayBar>> {
    bars_for_window(
        &calendar::last_n_days(WEEKLY_WINDOW_DAYS),
        active_habit_count,
        completions_by_date,
    )
}

/// Builds the summary statistics for the 7 days ending at `today`.
///
/// `all_completion_dates` is the set of every distinct date the user has a
/// completion on; the streak walks it backward from `today`.
pub fn build_summary(
    active_habit_count: usize,
    today_done: usize,
    completions_by_date: &HashMap<String, usize>,
    all_completion_dates: &HashSet<String>,
    today: &str,
) -> HabitResult<Summary> {
    let end = parse_date_key(today)?;
    let days = calendar::days_ending_at(end, WEEKLY_WINDOW_DAYS);

    let completion_rate = if active_habit_count == 0 {
        0
    } else {
        let sum: u32 = days
            .iter()
            .map(|d| {
                let completed = completions_by_date.get(d).copied().unwrap_or(0);
                day_pct(completed, active_habit_count)
            })
            .sum();
        (f64::from(sum) / days.len() as f64).round() as u32
    };

    Ok(Summary {
        streak: compute_streak(all_completion_dates, today),
        today_planned: active_habit_count,
        today_done,
        completion_rate,
    })
}
