//! Habit workflows over an injected storage adapter.
//!
//! Each operation is an independent unit of work: it fetches what it needs,
//! runs the pure calendar/streak/stats logic, and performs at most one
//! primary mutation followed by one activity append. The append happens
//! after the mutation and its failure is reported to the caller, never
//! swallowed and never rolled back.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar;
use crate::error::{HabitError, HabitResult};
use crate::stats::{self, DayBar, Summary, WEEKLY_WINDOW_DAYS};
use crate::traits::StorageAdapter;
use crate::types::{Activity, ActivityKind, Completion, Habit};

/// Default number of history entries returned.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Upper bound on history entries per request.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Input for creating a habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHabit {
    /// Display title. Required.
    pub title: String,
    /// Optional goal description.
    #[serde(default)]
    pub goal: Option<String>,
}

/// An active habit with its completion state for today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayHabit {
    pub id: String,
    pub title: String,
    pub goal: String,
    pub done: bool,
}

/// Result of a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggled {
    /// True when the call created a completion, false when it removed one.
    pub toggled: bool,
}

/// The habit service, parameterized over an injected storage adapter.
///
/// The service holds no state of its own; it is cheap to clone and safe to
/// share across concurrent requests.
#[derive(Clone)]
pub struct HabitService {
    store: Arc<dyn StorageAdapter>,
}

impl HabitService {
    /// Creates a new service over the given storage adapter.
    pub fn new(store: Arc<dyn StorageAdapter>) -> Self {
        Self { store }
    }

    /// Creates a habit and logs a `habit_created` activity with a snapshot
    /// of the title and goal.
    pub async fn create_habit(&self, user_id: &str, data: NewHabit) -> HabitResult<Habit> {
        if data.title.trim().is_empty() {
            return Err(HabitError::missing_field("title"));
        }

        let habit = Habit::new(
            user_id.to_string(),
            data.title,
            data.goal.unwrap_or_default(),
        );
        let habit = self.store.create_habit(&habit).await?;
        debug!(habit_id = %habit.id, "habit created");

        self.store
            .append_activity(&Activity::new(
                user_id.to_string(),
                habit.id.clone(),
                ActivityKind::HabitCreated {
                    title: habit.title.clone(),
                    goal: habit.goal.clone(),
                },
                calendar::today(),
            ))
            .await?;

        Ok(habit)
    }

    /// Returns the user's active habits, newest first, with today's
    /// completion flag.
    pub async fn today_overview(&self, user_id: &str) -> HabitResult<Vec<TodayHabit>> {
        let habits = self.store.list_active_habits(user_id).await?;
        let completions = self
            .store
            .find_completions(user_id, &[calendar::today()])
            .await?;
        let done: HashSet<&str> = completions.iter().map(|c| c.habit_id.as_str()).collect();

        Ok(habits
            .into_iter()
            .map(|h| TodayHabit {
                done: done.contains(h.id.as_str()),
                id: h.id,
                title: h.title,
                goal: h.goal,
            })
            .collect())
    }

    /// Flips the completion state for a (user, habit, date) key.
    ///
    /// A pure flip, not an idempotent set: calling twice in a row returns
    /// alternating results. The date defaults to today. A concurrent create
    /// for the same key loses against the store's uniqueness constraint and
    /// surfaces as `DuplicateEntry`.
    pub async fn toggle_completion(
        &self,
        user_id: &str,
        habit_id: &str,
        date: Option<&str>,
    ) -> HabitResult<Toggled> {
        let date = match date {
            Some(d) => calendar::format_date_key(calendar::parse_date_key(d)?),
            None => calendar::today(),
        };

        if self.store.get_habit(user_id, habit_id).await?.is_none() {
            return Err(HabitError::not_found("habit", "id", habit_id));
        }

        match self.store.get_completion(user_id, habit_id, &date).await? {
            Some(_) => {
                self.store
                    .delete_completion(user_id, habit_id, &date)
                    .await?;
                debug!(habit_id, %date, "completion removed");
                self.store
                    .append_activity(&Activity::new(
                        user_id.to_string(),
                        habit_id.to_string(),
                        ActivityKind::CompletionRemoved,
                        date,
                    ))
                    .await?;
                Ok(Toggled { toggled: false })
            }
            None => {
                let completion = Completion::new(
                    user_id.to_string(),
                    habit_id.to_string(),
                    date.clone(),
                );
                self.store.create_completion(&completion).await?;
                debug!(habit_id, %date, "completion added");
                self.store
                    .append_activity(&Activity::new(
                        user_id.to_string(),
                        habit_id.to_string(),
                        ActivityKind::CompletionAdded,
                        date,
                    ))
                    .await?;
                Ok(Toggled { toggled: true })
            }
        }
    }

    /// Builds the weekly bar chart for the 7 days ending today.
    pub async fn weekly_bars(&self, user_id: &str) -> HabitResult<Vec<DayBar>> {
        let active = self.store.count_active_habits(user_id).await?;
        if active == 0 {
            return stats::build_weekly_bars(0, &HashMap::new());
        }

        let days = calendar::last_n_days(WEEKLY_WINDOW_DAYS);
        let completions = self.store.find_completions(user_id, &days).await?;
        stats::build_weekly_bars(active, &count_by_date(&completions))
    }

    /// Builds the summary statistics for the 7 days ending today.
    pub async fn summary(&self, user_id: &str) -> HabitResult<Summary> {
        let today = calendar::today();
        let active = self.store.count_active_habits(user_id).await?;
        let today_done = self.store.count_completions_on(user_id, &today).await?;

        let completions_by_date = if active > 0 {
            let days = calendar::last_n_days(WEEKLY_WINDOW_DAYS);
            count_by_date(&self.store.find_completions(user_id, &days).await?)
        } else {
            HashMap::new()
        };

        let all_dates: HashSet<String> = self
            .store
            .distinct_completion_dates(user_id)
            .await?
            .into_iter()
            .collect();

        stats::build_summary(active, today_done, &completions_by_date, &all_dates, &today)
    }

    /// Archives a habit and logs the transition with a title snapshot.
    ///
    /// Completion history on the habit is retained.
    pub async fn archive_habit(&self, user_id: &str, habit_id: &str) -> HabitResult<Habit> {
        self.set_archived(user_id, habit_id, true).await
    }

    /// Restores an archived habit and logs the transition.
    pub async fn restore_habit(&self, user_id: &str, habit_id: &str) -> HabitResult<Habit> {
        self.set_archived(user_id, habit_id, false).await
    }

    async fn set_archived(
        &self,
        user_id: &str,
        habit_id: &str,
        archived: bool,
    ) -> HabitResult<Habit> {
        let mut habit = self
            .store
            .get_habit(user_id, habit_id)
            .await?
            .ok_or_else(|| HabitError::not_found("habit", "id", habit_id))?;

        habit.archived = archived;
        habit.updated_at = Utc::now();
        let habit = self.store.update_habit(&habit).await?;
        debug!(habit_id, archived, "habit archive state changed");

        let kind = if archived {
            ActivityKind::HabitArchived {
                title: habit.title.clone(),
            }
        } else {
            ActivityKind::HabitRestored {
                title: habit.title.clone(),
            }
        };
        self.store
            .append_activity(&Activity::new(
                user_id.to_string(),
                habit.id.clone(),
                kind,
                calendar::today(),
            ))
            .await?;

        Ok(habit)
    }

    /// Returns the user's most recent activity entries, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`] and is capped at
    /// [`MAX_HISTORY_LIMIT`].
    pub async fn history(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> HabitResult<Vec<Activity>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT).min(MAX_HISTORY_LIMIT);
        self.store.recent_activities(user_id, limit).await
    }
}

fn count_by_date(completions: &[Completion]) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for c in completions {
        *map.entry(c.date.clone()).or_insert(0) += 1;
    }
    map
}
