// API State Management

use crate::Result;
use crate::config::CheckerConfig;
use crate::scanner::ScanCoordinator;
use std::sync::Arc;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    /// Process-wide settings, never mutated after startup
    pub config: Arc<CheckerConfig>,

    /// Scan coordinator configured from the settings
    pub coordinator: ScanCoordinator,
}

impl AppState {
    /// Create new application state
    pub fn new(config: CheckerConfig) -> Result<Self> {
        let coordinator = ScanCoordinator::new(config.warning_delta()?)
            .with_max_concurrent(config.max_concurrent_reads);

        Ok(Self {
            config: Arc::new(config),
            coordinator,
        })
    }
}
