//! # HabitVault Memory Adapter
//!
//! An in-memory storage adapter for HabitVault, primarily intended
//! for testing and development purposes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use habit_vault_adapter_memory::MemoryAdapter;
//! use habit_vault_core::HabitService;
//! use std::sync::Arc;
//!
//! let service = HabitService::new(Arc::new(MemoryAdapter::new()));
//! ```

use async_trait::async_trait;
use habit_vault_core::error::{HabitError, HabitResult};
use habit_vault_core::traits::StorageAdapter;
use habit_vault_core::types::{Activity, Completion, Habit};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Composite key for a completion record: (user_id, habit_id, date).
type CompletionKey = (String, String, String);

/// In-memory storage adapter for HabitVault.
///
/// This adapter stores all data in memory and is suitable for testing and
/// development. Data is lost when the process exits. The completion map is
/// keyed by the (user, habit, date) triple, so the uniqueness constraint is
/// checked and enforced under a single write lock.
#[derive(Debug, Clone)]
pub struct MemoryAdapter {
    habits: Arc<RwLock<HashMap<String, Habit>>>,
    completions: Arc<RwLock<HashMap<CompletionKey, Completion>>>,
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl MemoryAdapter {
    /// Creates a new in-memory adapter.
    pub fn new() -> Self {
        Self {
            habits: Arc::new(RwLock::new(HashMap::new())),
            completions: Arc::new(RwLock::new(HashMap::new())),
            activities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clears all stored data.
    pub async fn clear(&self) {
        self.habits.write().await.clear();
        self.completions.write().await.clear();
        self.activities.write().await.clear();
    }

    /// Returns the number of habits stored.
    pub async fn habit_count(&self) -> usize {
        self.habits.read().await.len()
    }

    /// Returns the number of completion records stored.
    pub async fn completion_count(&self) -> usize {
        self.completions.read().await.len()
    }

    /// Returns the number of activity entries stored.
    pub async fn activity_count(&self) -> usize {
        self.activities.read().await.len()
    }
}

impl Default for MemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageAdapter for MemoryAdapter {
    // ==================== Habit Operations ====================

    async fn create_habit(&self, habit: &Habit) -> HabitResult<Habit> {
        let mut habits = self.habits.write().await;

        if habits.contains_key(&habit.id) {
            return Err(HabitError::duplicate("habit", "id", &habit.id));
        }

        habits.insert(habit.id.clone(), habit.clone());
        Ok(habit.clone())
    }

    async fn get_habit(&self, user_id: &str, id: &str) -> HabitResult<Option<Habit>> {
        let habits = self.habits.read().await;
        Ok(habits.get(id).filter(|h| h.user_id == user_id).cloned())
    }

    async fn list_active_habits(&self, user_id: &str) -> HabitResult<Vec<Habit>> {
        let habits = self.habits.read().await;
        let mut list: Vec<Habit> = habits
            .values()
            .filter(|h| h.user_id == user_id && !h.archived)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn update_habit(&self, habit: &Habit) -> HabitResult<Habit> {
        let mut habits = self.habits.write().await;

        if !habits.contains_key(&habit.id) {
            return Err(HabitError::not_found("habit", "id", &habit.id));
        }

        habits.insert(habit.id.clone(), habit.clone());
        Ok(habit.clone())
    }

    async fn count_active_habits(&self, user_id: &str) -> HabitResult<usize> {
        let habits = self.habits.read().await;
        Ok(habits
            .values()
            .filter(|h| h.user_id == user_id && !h.archived)
            .count())
    }

    // ==================== Completion Operations ====================

    async fn create_completion(&self, completion: &Completion) -> HabitResult<Completion> {
        let key = (
            completion.user_id.clone(),
            completion.habit_id.clone(),
            completion.date.clone(),
        );
        let mut completions = self.completions.write().await;

        if completions.contains_key(&key) {
            return Err(HabitError::duplicate("completion", "date", &completion.date));
        }

        completions.insert(key, completion.clone());
        Ok(completion.clone())
    }

    async fn get_completion(
        &self,
        user_id: &str,
        habit_id: &str,
        date: &str,
    ) -> HabitResult<Option<Completion>> {
        let completions = self.completions.read().await;
        Ok(completions
            .get(&(user_id.to_string(), habit_id.to_string(), date.to_string()))
            .cloned())
    }

    async fn delete_completion(
        &self,
        user_id: &str,
        habit_id: &str,
        date: &str,
    ) -> HabitResult<()> {
        let mut completions = self.completions.write().await;
        completions.remove(&(user_id.to_string(), habit_id.to_string(), date.to_string()));
        Ok(())
    }

    async fn find_completions(
        &self,
        user_id: &str,
        dates: &[String],
    ) -> HabitResult<Vec<Completion>> {
        let completions = self.completions.read().await;
        Ok(completions
            .values()
            .filter(|c| c.user_id == user_id && c.done && dates.contains(&c.date))
            .cloned()
            .collect())
    }

    async fn count_completions_on(&self, user_id: &str, date: &str) -> HabitResult<usize> {
        let completions = self.completions.read().await;
        Ok(completions
            .values()
            .filter(|c| c.user_id == user_id && c.done && c.date == date)
            .count())
    }

    async fn distinct_completion_dates(&self, user_id: &str) -> HabitResult<Vec<String>> {
        let completions = self.completions.read().await;
        let mut dates: Vec<String> = completions
            .values()
            .filter(|c| c.user_id == user_id && c.done)
            .map(|c| c.date.clone())
            .collect();
        dates.sort();
        dates.dedup();
        Ok(dates)
    }

    // ==================== Activity Operations ====================

    async fn append_activity(&self, activity: &Activity) -> HabitResult<Activity> {
        let mut activities = self.activities.write().await;
        activities.push(activity.clone());
        Ok(activity.clone())
    }

    async fn recent_activities(&self, user_id: &str, limit: usize) -> HabitResult<Vec<Activity>> {
        let activities = self.activities.read().await;
        let mut list: Vec<Activity> = activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.at.cmp(&a.at));
        list.truncate(limit);
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habit_vault_core::types::ActivityKind;

    #[tokio::test]
    async fn test_create_and_get_habit() {
        let adapter = MemoryAdapter::new();
        let habit = Habit::new("u1".to_string(), "Read".to_string(), "10 pages".to_string());

        let created = adapter.create_habit(&habit).await.unwrap();
        assert_eq!(created.title, "Read");

        let fetched = adapter.get_habit("u1", &habit.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().goal, "10 pages");
    }

    #[tokio::test]
    async fn test_get_habit_is_owner_scoped() {
        let adapter = MemoryAdapter::new();
        let habit = Habit::new("u1".to_string(), "Read".to_string(), String::new());
        adapter.create_habit(&habit).await.unwrap();

        let foreign = adapter.get_habit("u2", &habit.id).await.unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_completion_rejected() {
        let adapter = MemoryAdapter::new();
        let first = Completion::new("u1".to_string(), "h1".to_string(), "2024-01-10".to_string());
        let second = Completion::new("u1".to_string(), "h1".to_string(), "2024-01-10".to_string());

        adapter.create_completion(&first).await.unwrap();
        let result = adapter.create_completion(&second).await;

        assert!(matches!(result, Err(HabitError::DuplicateEntry { .. })));
        assert_eq!(adapter.completion_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_absent_completion_is_noop() {
        let adapter = MemoryAdapter::new();
        adapter
            .delete_completion("u1", "h1", "2024-01-10")
            .await
            .unwrap();
        assert_eq!(adapter.completion_count().await, 0);
    }

    #[tokio::test]
    async fn test_count_active_excludes_archived() {
        let adapter = MemoryAdapter::new();
        let active = Habit::new("u1".to_string(), "Read".to_string(), String::new());
        let mut archived = Habit::new("u1".to_string(), "Run".to_string(), String::new());
        archived.archived = true;

        adapter.create_habit(&active).await.unwrap();
        adapter.create_habit(&archived).await.unwrap();

        assert_eq!(adapter.count_active_habits("u1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_distinct_completion_dates() {
        let adapter = MemoryAdapter::new();
        for (habit, date) in [("h1", "2024-01-10"), ("h2", "2024-01-10"), ("h1", "2024-01-09")] {
            let completion =
                Completion::new("u1".to_string(), habit.to_string(), date.to_string());
            adapter.create_completion(&completion).await.unwrap();
        }

        let dates = adapter.distinct_completion_dates("u1").await.unwrap();
        assert_eq!(dates, vec!["2024-01-09".to_string(), "2024-01-10".to_string()]);
    }

    #[tokio::test]
    async fn test_recent_activities_newest_first_with_limit() {
        let adapter = MemoryAdapter::new();
        for i in 0..5 {
            let activity = Activity::new(
                "u1".to_string(),
                format!("h{i}"),
                ActivityKind::CompletionAdded,
                "2024-01-10".to_string(),
            );
            adapter.append_activity(&activity).await.unwrap();
        }

        let recent = adapter.recent_activities("u1", 3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|w| w[0].at >= w[1].at));
    }
}
