//! UDP listener diagnostics.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view of a UDP line-protocol listener.
#[derive(Clone)]
pub struct UdpHandler {
    inner: Handler,
}

impl UdpHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }

    pub fn started_listening(&self, addr: &str) {
        self.inner
            .info("started listening on UDP", &[Field::str("address", addr)]);
    }

    pub fn closed_service(&self) {
        self.inner.info("closed service", &[]);
    }
}
