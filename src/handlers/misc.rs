//! Small single-purpose subsystem vocabularies.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view of the usage-reporting client.
#[derive(Clone)]
pub struct ReportingHandler {
    inner: Handler,
}

impl ReportingHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}

/// Diagnostic view of the config-override service.
#[derive(Clone)]
pub struct ConfigOverrideHandler {
    inner: Handler,
}

impl ConfigOverrideHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}

/// Diagnostic view of the user-defined-function loader.
#[derive(Clone)]
pub struct UdfHandler {
    inner: Handler,
}

impl UdfHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn loaded_udf_info(&self, udf: &str) {
        self.inner.debug("loaded UDF info", &[Field::str("udf", udf)]);
    }
}

/// Diagnostic view of the no-auth backend. Everything it says is a warning.
#[derive(Clone)]
pub struct NoAuthHandler {
    inner: Handler,
}

impl NoAuthHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn faked_user_authentication(&self, username: &str) {
        self.inner.warn(
            "using noauth auth backend, faked authentication for user",
            &[Field::str("user", username)],
        );
    }

    pub fn faked_subscription_user_token(&self) {
        self.inner.warn(
            "using noauth auth backend, faked authentication for subscription user token",
            &[],
        );
    }
}

/// Diagnostic view of the deadman's-switch feature.
#[derive(Clone)]
pub struct DeadmanHandler {
    inner: Handler,
}

impl DeadmanHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn configured_globally(&self) {
        self.inner.info("deadman's switch is configured globally", &[]);
    }
}

/// Diagnostic view of the internal stats collector.
#[derive(Clone)]
pub struct StatsHandler {
    inner: Handler,
}

impl StatsHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}
