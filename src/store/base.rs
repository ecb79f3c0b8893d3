use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use super::file_store::FileStore;
use super::memory_store::MemoryStore;
use crate::config::{StoreBackend, StoreConfig};
use crate::models::Task;

/// Errors produced by task store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task id {0} already exists")]
    DuplicateId(u64),

    #[error("task title must be a non-empty string")]
    InvalidTitle,

    #[error("task {0} not found")]
    NotFound(u64),

    #[error("failed to persist the task list: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("task file does not contain a valid task list: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The TaskStore trait abstracts the task list (list, create, delete).
///
/// The store owns the tasks exclusively; callers only ever receive
/// clones. Mutations either fully succeed (including persistence, for
/// durable backends) or leave the store unchanged.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks, in insertion order.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Appends a new task. The id is caller-assigned and must be fresh;
    /// the title must be non-empty.
    async fn create(&self, id: u64, title: String, completed: bool) -> Result<Task, StoreError>;

    /// Removes and returns the task with the given id. The remaining
    /// tasks keep their relative order with no gap left behind.
    async fn delete(&self, id: u64) -> Result<Task, StoreError>;
}

/// Creates a concrete store implementation based on the StoreConfig.
pub async fn create_store(config: &StoreConfig) -> Arc<dyn TaskStore> {
    match &config.backend {
        StoreBackend::File(file_config) => match FileStore::open(file_config).await {
            Ok(store) => {
                info!(
                    "Task store backed by file '{}'.",
                    file_config.path.display()
                );
                Arc::new(store)
            }
            Err(e) => {
                error!("Failed to open task file store: {}", e);
                std::process::exit(1);
            }
        },
        StoreBackend::Memory => {
            info!("Task store is in-memory; tasks will not survive a restart.");
            Arc::new(MemoryStore::new())
        }
    }
}
