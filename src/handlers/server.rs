//! Server-level diagnostics: daemon orchestration and process startup.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view of the daemon's server core: generic leveled logging with
/// inline context, used while wiring subsystems together.
#[derive(Clone)]
pub struct ServerHandler {
    inner: Handler,
}

impl ServerHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }

    pub fn info(&self, msg: &str, ctx: &[Field]) {
        self.inner.info(msg, ctx);
    }

    pub fn debug(&self, msg: &str, ctx: &[Field]) {
        self.inner.debug(msg, ctx);
    }
}

/// Diagnostic view of the run command: the startup banner.
#[derive(Clone)]
pub struct CmdHandler {
    inner: Handler,
}

impl CmdHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn starting(&self, version: &str, branch: &str, commit: &str) {
        self.inner.info(
            "daemon starting",
            &[
                Field::str("version", version),
                Field::str("branch", branch),
                Field::str("commit", commit),
            ],
        );
    }

    pub fn info(&self, msg: &str) {
        self.inner.info(msg, &[]);
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}
