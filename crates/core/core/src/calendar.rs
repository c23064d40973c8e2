//! Canonical date keys and calendar windows.
//!
//! All aggregation operates over `YYYY-MM-DD` date keys in the server's
//! local calendar day, not UTC instants. Weekday labels are computed from
//! the key's own year/month/day components so they never depend on the
//! process timezone.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::error::{HabitError, HabitResult};

/// The canonical date key format.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as a canonical date key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a date key, rejecting anything that is not a valid `YYYY-MM-DD`.
pub fn parse_date_key(key: &str) -> HabitResult<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|e| HabitError::invalid_field("date", e.to_string()))
}

/// Returns the date key for "now" in the server's local timezone.
///
/// Two calls within the same local day return the same key regardless of
/// UTC date rollover.
pub fn today() -> String {
    format_date_key(Local::now().date_naive())
}

/// Returns the `n` most recent date keys ending at and including today,
/// oldest first.
pub fn last_n_days(n: usize) -> Vec<String> {
    days_ending_at(Local::now().date_naive(), n)
}

/// Returns the `n` contiguous date keys ending at and including `end`,
/// oldest first. Month and year boundaries are crossed by day-stepping.
pub fn days_ending_at(end: NaiveDate, n: usize) -> Vec<String> {
    (0..n)
        .rev()
        .filter_map(|i| end.checked_sub_days(Days::new(i as u64)))
        .map(format_date_key)
        .collect()
}

/// Maps a date key to its 3-letter weekday abbreviation.
///
/// Pure proleptic-Gregorian arithmetic over the key's own components; the
/// result is invariant to the process timezone.
pub fn weekday_label(date_key: &str) -> HabitResult<&'static str> {
    let date = parse_date_key(date_key)?;
    Ok(match date.weekday() {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_a_valid_key() {
        let key = today();
        assert!(parse_date_key(&key).is_ok());
    }

    #[test]
    fn test_last_n_days_contiguous_ending_today() {
        let days = last_n_days(7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], today());

        for pair in days.windows(2) {
            let a = parse_date_key(&pair[0]).unwrap();
            let b = parse_date_key(&pair[1]).unwrap();
            assert_eq!(b - a, chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_days_ending_at_crosses_month_boundary() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(
            days_ending_at(end, 4),
            vec!["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
    }

    #[test]
    fn test_days_ending_at_crosses_year_boundary() {
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(days_ending_at(end, 2), vec!["2023-12-31", "2024-01-01"]);
    }

    #[test]
    fn test_weekday_label_known_dates() {
        assert_eq!(weekday_label("2024-01-10").unwrap(), "Wed");
        assert_eq!(weekday_label("2024-01-14").unwrap(), "Sun");
        assert_eq!(weekday_label("2024-02-29").unwrap(), "Thu");
        assert_eq!(weekday_label("2000-01-01").unwrap(), "Sat");
    }

    #[test]
    fn test_weekday_label_rejects_malformed_keys() {
        assert!(weekday_label("not-a-date").is_err());
        assert!(weekday_label("2024-13-01").is_err());
        assert!(weekday_label("2024-02-30").is_err());
    }
}
