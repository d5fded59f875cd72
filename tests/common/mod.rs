//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use diag_service::{DiagnosticConfig, Service};

/// Cloneable writer capturing everything written through it; stands in for
/// the process's standard streams.
#[derive(Clone, Default)]
pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Open a service at the given level whose standard output is captured.
#[allow(dead_code)]
pub fn open_capture_service(level: &str) -> (Service, CaptureWriter) {
    let capture = CaptureWriter::new();
    let config = DiagnosticConfig {
        level: level.to_string(),
        file: "STDOUT".to_string(),
    };
    let mut service = Service::with_streams(
        config,
        Box::new(capture.clone()),
        Box::new(io::sink()),
    );
    service.open().unwrap();
    (service, capture)
}
