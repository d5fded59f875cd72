//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Diagnostic logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    /// Minimum severity emitted: "DEBUG", "INFO", "WARN", "ERROR" or "FATAL"
    /// (case-insensitive). Unrecognized values fail `Service::open`.
    pub level: String,

    /// Destination: "STDOUT", "STDERR", or a file path. File parents are
    /// created on demand; the file is opened for append.
    pub file: String,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "STDOUT".to_string(),
        }
    }
}
