//! Application state for the web layer.

use std::sync::Arc;

use crate::report::TrainReporter;

/// Shared application state.
///
/// One reporter serves every request; each request builds its own report.
pub struct AppState<S> {
    pub reporter: Arc<TrainReporter<S>>,
}

impl<S> AppState<S> {
    pub fn new(reporter: TrainReporter<S>) -> Self {
        Self {
            reporter: Arc::new(reporter),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            reporter: Arc::clone(&self.reporter),
        }
    }
}
