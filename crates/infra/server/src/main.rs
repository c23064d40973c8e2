//! HabitVault Server binary.

use habit_vault_adapter_memory::MemoryAdapter;
use habit_vault_server::{load_config, HabitServer, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => ServerConfig::default(),
    };

    // Open the store, run, close on shutdown
    let server = HabitServer::new(config, Arc::new(MemoryAdapter::new()));
    server.run().await?;
    server.shutdown().await?;

    Ok(())
}
