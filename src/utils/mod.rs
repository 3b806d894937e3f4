//! Utility Module Implementation
//!
//! Aggregates internal helpers shared by the rest of the crate:
//! logging setup, argument validation and the configurable-component trait.

use crate::error::Result;

// Submodules
pub mod logger;
pub mod validator;

// Re-exports for unified access
pub use self::{logger::*, validator::*};

// General trait for configurable utility components
pub trait UtilityConfig: Send + Sync {
    fn validate(&self) -> Result<()>;
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}
