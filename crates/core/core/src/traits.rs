//! Core traits for HabitVault.
//!
//! This module defines the trait interface that storage adapters must
//! implement to persist habits, completions, and the activity log.

use async_trait::async_trait;

use crate::error::HabitResult;
use crate::types::{Activity, Completion, Habit};

/// Trait for storage adapters (database backends).
///
/// Adapters provide persistence for habits, completions, and activities.
/// All queries are scoped to a single user; an adapter must never return
/// records owned by anyone else.
///
/// The completion key (user_id, habit_id, date) is unique and the adapter
/// is the sole enforcer: `create_completion` for an existing key must fail
/// with [`HabitError::DuplicateEntry`](crate::HabitError::DuplicateEntry)
/// rather than insert a second record.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    // ==================== Habit Operations ====================

    /// Creates a new habit.
    async fn create_habit(&self, habit: &Habit) -> HabitResult<Habit>;

    /// Gets a habit by ID, scoped to its owner.
    async fn get_habit(&self, user_id: &str, id: &str) -> HabitResult<Option<Habit>>;

    /// Lists a user's non-archived habits, newest first.
    async fn list_active_habits(&self, user_id: &str) -> HabitResult<Vec<Habit>>;

    /// Updates an existing habit.
    async fn update_habit(&self, habit: &Habit) -> HabitResult<Habit>;

    /// Counts a user's non-archived habits.
    async fn count_active_habits(&self, user_id: &str) -> HabitResult<usize>;

    // ==================== Completion Operations ====================

    /// Creates a completion record.
    ///
    /// Fails with `DuplicateEntry` when a record already exists for the
    /// (user_id, habit_id, date) key.
    async fn create_completion(&self, completion: &Completion) -> HabitResult<Completion>;

    /// Gets the completion for a (user, habit, date) key, if any.
    async fn get_completion(
        &self,
        user_id: &str,
        habit_id: &str,
        date: &str,
    ) -> HabitResult<Option<Completion>>;

    /// Deletes the completion for a (user, habit, date) key.
    ///
    /// Deleting an absent record is a no-op.
    async fn delete_completion(&self, user_id: &str, habit_id: &str, date: &str)
        -> HabitResult<()>;

    /// Finds a user's done-flagged completions whose date is in `dates`.
    async fn find_completions(
        &self,
        user_id: &str,
        dates: &[String],
    ) -> HabitResult<Vec<Completion>>;

    /// Counts a user's done-flagged completions on a single date.
    async fn count_completions_on(&self, user_id: &str, date: &str) -> HabitResult<usize>;

    /// Returns every distinct date the user has a done-flagged completion on.
    async fn distinct_completion_dates(&self, user_id: &str) -> HabitResult<Vec<String>>;

    // ==================== Activity Operations ====================

    /// Appends an activity log entry. Entries are immutable once written.
    async fn append_activity(&self, activity: &Activity) -> HabitResult<Activity>;

    /// Returns a user's most recent activities, newest first.
    async fn recent_activities(&self, user_id: &str, limit: usize) -> HabitResult<Vec<Activity>>;

    // ==================== Lifecycle ====================

    /// Releases any underlying resources. Called once at shutdown.
    async fn close(&self) -> HabitResult<()> {
        Ok(())
    }
}
