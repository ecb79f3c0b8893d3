use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use super::base::{StoreError, TaskStore};
use crate::models::Task;

/// The config struct for the file-backed store.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
pub struct FileStoreConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        FileStoreConfig {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("tasks.json")
}

/// A `TaskStore` that mirrors the task list to a pretty-printed JSON
/// file, rewritten wholesale on every mutation.
///
/// Persistence happens before the in-memory commit, so a failed write
/// surfaces as an error and leaves the store exactly as it was. The
/// write guard is held across the whole validate/persist/commit
/// sequence; concurrent mutations cannot race the uniqueness check.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    tasks: RwLock<Vec<Task>>,
}

impl FileStore {
    /// Opens the store, loading an existing task file if there is one.
    pub async fn open(config: &FileStoreConfig) -> Result<Self, StoreError> {
        let tasks: Vec<Task> = match tokio::fs::read(&config.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Persistence(e)),
        };

        debug!(
            "Loaded {} task(s) from '{}'",
            tasks.len(),
            config.path.display()
        );

        Ok(FileStore {
            path: config.path.clone(),
            tasks: RwLock::new(tasks),
        })
    }

    async fn persist(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(tasks)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for FileStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.read().await.clone())
    }

    async fn create(&self, id: u64, title: String, completed: bool) -> Result<Task, StoreError> {
        if title.is_empty() {
            return Err(StoreError::InvalidTitle);
        }

        let mut tasks = self.tasks.write().await;
        if tasks.iter().any(|t| t.id == id) {
            return Err(StoreError::DuplicateId(id));
        }

        let task = Task::new(id, title, completed);
        let mut next = tasks.clone();
        next.push(task.clone());
        self.persist(&next).await?;
        *tasks = next;

        debug!("Created task {} ({} total)", task.id, tasks.len());
        Ok(task)
    }

    async fn delete(&self, id: u64) -> Result<Task, StoreError> {
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut next = tasks.clone();
        let task = next.remove(index);
        self.persist(&next).await?;
        *tasks = next;

        debug!("Deleted task {} ({} remaining)", task.id, tasks.len());
        Ok(task)
    }
}
