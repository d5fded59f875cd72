//! Severity levels and threshold gating.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered log severity.
///
/// Ordering follows declaration order, so
/// `Debug < Info < Warn < Error < Fatal`. An event is emitted iff its
/// severity is at or above the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Whether an event at this severity passes the given threshold.
    pub fn enabled(self, threshold: Severity) -> bool {
        self >= threshold
    }

    /// Lowercase name as rendered in encoded records.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log level: {0:?}")]
pub struct InvalidLevel(pub String);

impl FromStr for Severity {
    type Err = InvalidLevel;

    /// Case-insensitive, so both config-style `"INFO"` and code-style
    /// `"info"` parse. Anything else is rejected; nothing defaults silently.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_gating_is_monotonic() {
        for threshold in ALL {
            for event in ALL {
                assert_eq!(event.enabled(threshold), event >= threshold);
            }
        }
    }

    #[test]
    fn test_parse_accepts_both_cases() {
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "bogus".parse::<Severity>().unwrap_err();
        assert_eq!(err, InvalidLevel("bogus".to_string()));
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
