//! Logger setup for the boost binary and for embedding applications

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber with a configurable default level.
///
/// `RUST_LOG` takes precedence over the level given here.
pub struct Logger {
    level: String,
    initialized: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level("info")
    }

    pub fn with_level(level: &str) -> Self {
        Self {
            level: level.to_string(),
            initialized: false,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Installs the global subscriber. A subscriber that is already installed
    /// (by a test harness or the host application) is left in place.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();

        self.initialized = true;
        if installed {
            info!("Logger initialized with level: {}", self.level);
        } else {
            debug!("Global subscriber already set, keeping it");
        }
    }

    pub fn log_info(&self, message: &str) {
        info!("{}", message);
    }

    pub fn log_warn(&self, message: &str) {
        warn!("{}", message);
    }

    pub fn log_error(&self, message: &str) {
        error!("{}", message);
    }

    pub fn log_debug(&self, message: &str) {
        debug!("{}", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let mut logger = Logger::with_level("debug");
        logger.init();
        logger.init();
        assert!(logger.is_initialized());
        assert_eq!(logger.level(), "debug");
    }
}
