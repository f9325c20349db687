//! Application state for Axum web framework.
//!
//! Contains the configuration snapshot shared across all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Application state holding the process-wide configuration snapshot.
///
/// The snapshot is constructed exactly once at startup and never mutated
/// afterwards, so concurrent handlers read it without synchronization.
/// Cloning is cheap since the snapshot sits behind an Arc; handlers only
/// ever hold a read reference.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new AppState owning the loaded configuration snapshot.
    pub fn new(snapshot: AppConfig) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Read access to the configuration snapshot.
    pub fn snapshot(&self) -> &AppConfig {
        &self.snapshot
    }
}
