use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Ids are caller-assigned on creation and unique within the store. The
/// store keeps tasks in insertion order, so `id` carries no positional
/// meaning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        Task {
            id,
            title: title.into(),
            completed,
        }
    }
}
