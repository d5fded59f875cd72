//! Fixed-severity adaptation of byte-stream writers.

use std::io;

use crate::logging::{Logger, Severity};

/// Handler emitting every write as one record at a pinned severity,
/// regardless of the payload's nominal level. Adapts legacy unstructured
/// writers (an HTTP server's error log, a third-party library's output
/// stream) into the structured record stream.
pub struct StaticLevelHandler {
    logger: Logger,
    level: Severity,
}

impl StaticLevelHandler {
    pub(crate) fn new(logger: Logger, level: Severity) -> Self {
        Self { logger, level }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Emit one record carrying `text` at the pinned severity.
    pub fn write_str(&self, text: &str) {
        self.logger.log(self.level, text, None, &[]);
    }
}

impl io::Write for StaticLevelHandler {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
