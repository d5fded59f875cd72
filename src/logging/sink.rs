//! Output sink selection and lifecycle.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

/// Destination string binding the sink to the process's standard output.
pub const STDOUT: &str = "STDOUT";
/// Destination string binding the sink to the process's standard error.
pub const STDERR: &str = "STDERR";

/// Writer type accepted for the standard streams. `Sync` is required so the
/// whole service can be shared across subsystem threads.
pub type StreamWriter = Box<dyn Write + Send + Sync>;

/// Errors binding the configured destination.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create log directory {dir}: {source}")]
    CreateDir { dir: String, source: io::Error },

    #[error("failed to open log file {path}: {source}")]
    OpenFile { path: String, source: io::Error },
}

/// The single writable destination shared by every logger a service hands
/// out. Standard streams are owned by the process, so closing a stream sink
/// is a no-op; file sinks flush and drop their handle exactly once.
pub struct Sink {
    writer: StreamWriter,
    closable: bool,
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("closable", &self.closable)
            .finish_non_exhaustive()
    }
}

impl Sink {
    /// Sink over a standard stream. Close does not touch the stream.
    pub fn stream(writer: StreamWriter) -> Sink {
        Sink {
            writer,
            closable: false,
        }
    }

    /// Sink appending to `path`, creating the file and any missing parent
    /// directories first.
    pub fn file(path: &str) -> Result<Sink, SinkError> {
        if let Some(dir) = Path::new(path).parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
                    dir: dir.display().to_string(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::OpenFile {
                path: path.to_string(),
                source,
            })?;

        Ok(Sink {
            writer: Box::new(file),
            closable: true,
        })
    }

    /// Write one encoded record. Callers serialize access.
    pub fn write_record(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)
    }

    /// Release the destination. File sinks flush and drop the handle;
    /// stream sinks do nothing.
    pub fn close(mut self) -> io::Result<()> {
        if self.closable {
            self.writer.flush()?;
        }
        Ok(())
    }
}
