// Application state module
// Runtime state shared by every connection

use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::sync::Arc;

use super::types::Config;
use crate::counters::RequestCounters;
use crate::handler::RequestDispatcher;

/// Application state
pub struct AppState {
    pub config: Config,
    pub dispatcher: RequestDispatcher,

    // Cached config values for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,

    /// Connections currently being served
    pub active_connections: Arc<AtomicUsize>,
}

impl AppState {
    /// Create `AppState` with fresh counters
    pub fn new(config: &Config) -> Self {
        Self::with_counters(config, Arc::new(RequestCounters::new()))
    }

    /// Create `AppState` around existing counters
    pub fn with_counters(config: &Config, counters: Arc<RequestCounters>) -> Self {
        Self {
            config: config.clone(),
            dispatcher: RequestDispatcher::new(counters, &config.secret.path),
            cached_access_log: Arc::new(AtomicBool::new(config.logging.access_log)),
            active_connections: Arc::new(AtomicUsize::new(0)),
        }
    }
}
