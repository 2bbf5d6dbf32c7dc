//! Factory configuration
//!
//! Settings that shape how property cells behave on write. The defaults match
//! the canonical behavior: rejected writes are logged, and writes of a value
//! equal to the current one are skipped.

use serde::{Deserialize, Serialize};

/// Configuration for property cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Emit a warning for every rejected write (default: true)
    pub log_rejections: bool,

    /// Skip writes whose value equals the current one (default: true)
    ///
    /// When disabled an equal value is stored again and reported as an update.
    pub suppress_unchanged_writes: bool,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig {
            log_rejections: true,
            suppress_unchanged_writes: true,
        }
    }
}

impl FactoryConfig {
    /// Defaults without rejection logging
    ///
    /// Useful for tests and hot paths where rejections are expected.
    pub fn quiet() -> Self {
        FactoryConfig {
            log_rejections: false,
            ..Self::default()
        }
    }
}
