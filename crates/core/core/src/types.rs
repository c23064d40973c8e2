//! Core data types for HabitVault.
//!
//! This module defines the canonical `Habit`, `Completion`, and `Activity`
//! structs that form the foundation of the habit-tracking system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A habit owned by a user.
///
/// Habits are never hard-deleted. Archiving excludes a habit from "active"
/// counts while its completion history stays intact; restoring brings it
/// back. All other fields are set at creation time.
///
/// # Example
///
/// ```rust
/// use habit_vault_core::Habit;
///
/// let habit = Habit::new("user_123".to_string(), "Read".to_string(), "10 pages".to_string());
/// assert!(!habit.archived);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for the habit (a UUID).
    pub id: String,

    /// The ID of the user who owns this habit.
    pub user_id: String,

    /// Display title.
    pub title: String,

    /// Free-form goal description (e.g., "10 pages").
    #[serde(default)]
    pub goal: String,

    /// Whether the habit is archived (soft-deleted).
    #[serde(default)]
    pub archived: bool,

    /// Timestamp when the habit was created.
    pub created_at: DateTime<Utc>,

    /// Timestamp when the habit was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Creates a new active habit owned by the given user.
    pub fn new(user_id: String, title: String, goal: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            title,
            goal,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A record that a user completed a habit on a calendar day.
///
/// The key is (user_id, habit_id, date) and the store enforces its
/// uniqueness: existence of the record IS the completed state. The `done`
/// flag is retained for forward-compatibility and defaults to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Unique identifier for the completion (a UUID).
    pub id: String,

    /// The ID of the user this completion belongs to.
    pub user_id: String,

    /// The ID of the completed habit.
    pub habit_id: String,

    /// Canonical `YYYY-MM-DD` date key in the server's local calendar day.
    pub date: String,

    /// Completion flag, always true today.
    #[serde(default = "default_done")]
    pub done: bool,

    /// Timestamp when the completion was recorded.
    pub created_at: DateTime<Utc>,
}

fn default_done() -> bool {
    true
}

impl Completion {
    /// Creates a new completion for the given key.
    pub fn new(user_id: String, habit_id: String, date: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            habit_id,
            date,
            done: true,
            created_at: Utc::now(),
        }
    }
}

/// The kind of a logged activity, with the metadata snapshot relevant to it.
///
/// Habit transitions carry a denormalized snapshot of the habit's title (and
/// goal at creation) as it was at the time of the event, so history stays
/// readable after later renames or archives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    /// A habit was created.
    HabitCreated { title: String, goal: String },
    /// A habit was archived.
    HabitArchived { title: String },
    /// An archived habit was restored.
    HabitRestored { title: String },
    /// A completion record was added.
    CompletionAdded,
    /// A completion record was removed.
    CompletionRemoved,
}

impl ActivityKind {
    /// Returns the wire name of this kind (e.g., "habit_created").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HabitCreated { .. } => "habit_created",
            Self::HabitArchived { .. } => "habit_archived",
            Self::HabitRestored { .. } => "habit_restored",
            Self::CompletionAdded => "completion_added",
            Self::CompletionRemoved => "completion_removed",
        }
    }
}

/// An immutable, append-only log entry recording a state transition.
///
/// Activities are created once per event and never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the activity (a UUID).
    pub id: String,

    /// The ID of the user this activity belongs to.
    pub user_id: String,

    /// The ID of the habit the event concerns.
    pub habit_id: String,

    /// What happened, with its metadata snapshot.
    #[serde(flatten)]
    pub kind: ActivityKind,

    /// The `YYYY-MM-DD` date key the event applies to.
    pub date: String,

    /// Timestamp when the event was recorded.
    pub at: DateTime<Utc>,
}

impl Activity {
    /// Creates a new activity entry.
    pub fn new(user_id: String, habit_id: String, kind: ActivityKind, date: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            habit_id,
            kind,
            date,
            at: Utc::now(),
        }
    }
}
