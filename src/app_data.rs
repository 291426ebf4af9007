use std::sync::Arc;

use crate::config::{AppSettings, DatabaseConnections};
use crate::errors::InternalError;
use crate::stores::{ItemStore, TaskStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main.rs and shared with the API handlers.
///
/// ```text
/// main.rs
///   ↓
/// AppSettings::from_env()
///   ↓
/// DatabaseConnections::init() + migrate()
///   ↓
/// AppData::new(connections)
///   ├─ connections (DatabaseConnections)
///   ├─ item_store (Arc<ItemStore>)
///   └─ task_store (Arc<TaskStore>)
///   ↓ wrapped in Arc<AppData>
///   ├─ ItemsApi::new(app_data)
///   └─ TasksApi::new(app_data)
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub item_store: Arc<ItemStore>,
    pub task_store: Arc<TaskStore>,
}

impl AppData {
    pub fn new(connections: DatabaseConnections) -> Self {
        Self {
            connections,
            item_store: Arc::new(ItemStore::new()),
            task_store: Arc::new(TaskStore::new()),
        }
    }

    /// Connect, migrate and optionally seed according to the settings
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the database cannot be reached, migrated or seeded
    pub async fn init(settings: &AppSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let connections = DatabaseConnections::init(settings).await?;
        connections.migrate().await?;

        if settings.seed_sample_data() {
            let txn = connections.begin_session().await?;
            crate::stores::seed::seed_sample_items(&txn).await?;
            DatabaseConnections::commit_session(txn).await?;
        }

        tracing::info!("AppData initialization complete");
        Ok(Self::new(connections))
    }
}
