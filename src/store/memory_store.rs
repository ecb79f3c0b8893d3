use async_trait::async_trait;
use tokio::sync::RwLock;

use super::base::{StoreError, TaskStore};
use crate::models::Task;

/// An ephemeral `TaskStore` holding the task list for the lifetime of
/// the process. Validation matches the file-backed store exactly; the
/// only difference is that nothing is written to disk.
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            tasks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
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
        tasks.push(task.clone());
        Ok(task)
    }

    async fn delete(&self, id: u64) -> Result<Task, StoreError> {
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(tasks.remove(index))
    }
}
