//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DiagnosticConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DiagnosticConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DiagnosticConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = \"ERROR\"\nfile = \"STDERR\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.level, "ERROR");
        assert_eq!(config.file, "STDERR");
    }

    #[test]
    fn test_load_rejects_bad_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = \"LOUD\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/diag.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
