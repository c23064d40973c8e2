//! Basic example demonstrating HabitVault usage.
//!
//! Run with: cargo run --example basic_app

use habit_vault::prelude::*;
use habit_vault_adapter_memory::MemoryAdapter;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), HabitError> {
    // Initialize the service with an in-memory adapter
    let service = HabitService::new(Arc::new(MemoryAdapter::new()));

    println!("HabitVault initialized successfully!");

    // Create a habit
    let habit = service
        .create_habit(
            "user_001",
            NewHabit {
                title: "Read".to_string(),
                goal: Some("10 pages".to_string()),
            },
        )
        .await?;
    println!("Created habit: {} ({})", habit.title, habit.id);

    // Mark it done for today
    let result = service.toggle_completion("user_001", &habit.id, None).await?;
    println!("Toggled completion: toggled={}", result.toggled);

    // Today's overview
    for entry in service.today_overview("user_001").await? {
        println!("Today: {} done={}", entry.title, entry.done);
    }

    // Weekly bars and summary
    for bar in service.weekly_bars("user_001").await? {
        println!("{}: {}%", bar.day, bar.pct);
    }
    let summary = service.summary("user_001").await?;
    println!(
        "Streak: {}, planned: {}, done: {}, rate: {}%",
        summary.streak, summary.today_planned, summary.today_done, summary.completion_rate
    );

    // Toggle again - the pure flip removes the record
    let result = service.toggle_completion("user_001", &habit.id, None).await?;
    println!("Toggled completion: toggled={}", result.toggled);

    // Recent history, newest first
    for activity in service.history("user_001", None).await? {
        println!("History: {} on {}", activity.kind.as_str(), activity.date);
    }

    println!("\nAll operations completed successfully!");
    Ok(())
}
