//! # HabitVault
//!
//! A habit-tracking backend library for Rust.
//!
//! HabitVault turns raw per-day completion records into derived metrics:
//! streaks, weekly completion percentages, and activity history. Storage is
//! an injected collaborator behind the `StorageAdapter` trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use habit_vault::prelude::*;
//! use habit_vault_adapter_memory::MemoryAdapter;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), HabitError> {
//!     let service = HabitService::new(Arc::new(MemoryAdapter::new()));
//!
//!     let habit = service
//!         .create_habit("user_1", NewHabit { title: "Read".into(), goal: None })
//!         .await?;
//!
//!     let result = service.toggle_completion("user_1", &habit.id, None).await?;
//!     assert!(result.toggled);
//!
//!     Ok(())
//! }
//! ```

// Re-export core types
pub use habit_vault_core::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use habit_vault_core::calendar::{last_n_days, today, weekday_label};
    pub use habit_vault_core::error::{HabitError, HabitResult};
    pub use habit_vault_core::service::{HabitService, NewHabit, Toggled, TodayHabit};
    pub use habit_vault_core::stats::{build_summary, build_weekly_bars, DayBar, Summary};
    pub use habit_vault_core::streak::compute_streak;
    pub use habit_vault_core::traits::StorageAdapter;
    pub use habit_vault_core::types::{Activity, ActivityKind, Completion, Habit};
}
