use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store::file_store::FileStoreConfig;

/// A wrapper for the task store configuration. The backend is selected
/// via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct StoreConfig {
    #[serde(flatten)]
    pub backend: StoreBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            backend: StoreBackend::File(FileStoreConfig::default()),
        }
    }
}

/// The available store backends.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StoreBackend {
    /// Durable backend: the task list is rewritten to a JSON file on
    /// every mutation.
    #[serde(rename = "file")]
    File(FileStoreConfig),

    /// Ephemeral backend: the task list lives for the process lifetime
    /// only. Same validation semantics as the file backend.
    #[serde(rename = "memory")]
    Memory,
}
