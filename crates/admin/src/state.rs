//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::services::AnalyticsStore;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    analytics_store: Box<dyn AnalyticsStore>,
}

impl AppState {
    /// Build state from configuration and the analytics data source.
    #[must_use]
    pub fn new(config: AdminConfig, analytics_store: impl AnalyticsStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                analytics_store: Box::new(analytics_store),
            }),
        }
    }

    /// Loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Data source for dashboard aggregates.
    #[must_use]
    pub fn analytics_store(&self) -> &dyn AnalyticsStore {
        self.inner.analytics_store.as_ref()
    }
}
