//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, authentication, and the task store.

use crate::auth::Auth;
use crate::config::ConfigV1;
use crate::store::TaskStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// references to the configuration, authentication checks, and the task
/// store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Authentication checks for incoming requests.
    pub auth: Arc<Auth>,
    /// Task store owning the task list for the process lifetime.
    pub store: Arc<dyn TaskStore>,
}
