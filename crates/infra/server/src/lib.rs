//! # HabitVault Server
//!
//! Standalone habit-tracking service shell. Owns the storage adapter's
//! lifecycle: the adapter is opened at startup, injected into the habit
//! service, and closed at shutdown. Transport wiring is left to the
//! embedding application.

mod config;

pub use config::{load_config, ConfigError, ServerConfig};

use habit_vault_core::service::HabitService;
use habit_vault_core::traits::StorageAdapter;
use habit_vault_core::HabitResult;
use std::sync::Arc;

/// The habit server owning the adapter lifecycle.
pub struct HabitServer {
    /// Server configuration.
    pub config: ServerConfig,
    adapter: Arc<dyn StorageAdapter>,
    service: HabitService,
}

impl HabitServer {
    /// Creates a new server over an opened storage adapter.
    pub fn new(config: ServerConfig, adapter: Arc<dyn StorageAdapter>) -> Self {
        let service = HabitService::new(adapter.clone());
        Self {
            config,
            adapter,
            service,
        }
    }

    /// Returns the habit service backed by this server's adapter.
    pub fn service(&self) -> &HabitService {
        &self.service
    }

    /// Starts the server.
    pub async fn run(&self) -> HabitResult<()> {
        tracing::info!(
            "Starting HabitVault server on {}:{}",
            self.config.host,
            self.config.port
        );
        tracing::info!("Server ready");
        Ok(())
    }

    /// Closes the storage adapter. Called once at shutdown.
    pub async fn shutdown(&self) -> HabitResult<()> {
        tracing::info!("Shutting down, closing store");
        self.adapter.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habit_vault_adapter_memory::MemoryAdapter;
    use habit_vault_core::NewHabit;

    #[tokio::test]
    async fn test_server_lifecycle() {
        let server = HabitServer::new(ServerConfig::default(), Arc::new(MemoryAdapter::new()));
        server.run().await.unwrap();

        let habit = server
            .service()
            .create_habit(
                "u1",
                NewHabit {
                    title: "Read".to_string(),
                    goal: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(habit.title, "Read");

        server.shutdown().await.unwrap();
    }
}
