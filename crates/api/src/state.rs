//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; carries the configuration and the
/// document store.
#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

struct ApiStateInner {
    config: ApiConfig,
    store: DocumentStore,
}

impl ApiState {
    /// Create application state around an existing store.
    #[must_use]
    pub fn new(config: ApiConfig, store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(ApiStateInner { config, store }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }
}
