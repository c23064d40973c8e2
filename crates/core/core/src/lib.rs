//! # HabitVault Core
//!
//! This crate provides the foundational types and logic for the HabitVault
//! habit-tracking system: the core data structures (`Habit`, `Completion`,
//! `Activity`), error types, the storage adapter trait, and the derived-
//! metrics layer (calendar keys, streaks, weekly aggregation) together with
//! the workflows that tie them to an injected store.

pub mod calendar;
pub mod error;
pub mod service;
pub mod stats;
pub mod streak;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate root
pub use calendar::{last_n_days, today, weekday_label, DATE_KEY_FORMAT};
pub use error::{HabitError, HabitResult};
pub use service::{HabitService, NewHabit, Toggled, TodayHabit};
pub use stats::{build_summary, build_weekly_bars, DayBar, Summary};
pub use streak::compute_streak;
pub use traits::StorageAdapter;
pub use types::{Activity, ActivityKind, Completion, Habit};
