//! Replay engine diagnostics.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view of the recording/replay engine.
#[derive(Clone)]
pub struct ReplayHandler {
    inner: Handler,
}

impl ReplayHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }

    pub fn debug(&self, msg: &str, ctx: &[Field]) {
        self.inner.debug(msg, ctx);
    }
}
