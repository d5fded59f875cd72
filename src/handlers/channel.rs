//! Alerting diagnostics: the alert service and its channel connectors.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view handed to every alert-channel connector (slack, pagerduty,
/// smtp, ...). The connectors share one vocabulary, so a single type serves
/// all of them; the `service` field attached at construction tells records
/// apart.
#[derive(Clone)]
pub struct ChannelHandler {
    inner: Handler,
}

impl ChannelHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn with_context(&self, fields: &[Field]) -> ChannelHandler {
        ChannelHandler {
            inner: self.inner.with_context(fields),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }

    /// Template evaluation failed for one alert; the field names the
    /// offending template.
    pub fn template_error(&self, err: &dyn fmt::Display, context: Field) {
        self.inner
            .error("failed to evaluate alert template", err, std::slice::from_ref(&context));
    }

    pub fn insecure_skip_verify(&self) {
        self.inner
            .warn("service is configured to skip ssl verification", &[]);
    }
}

/// Diagnostic view of the alert service itself: handler-spec migration and
/// registry bookkeeping events.
#[derive(Clone)]
pub struct AlertServiceHandler {
    inner: Handler,
}

impl AlertServiceHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    /// Fork tagged with per-handler context, e.g. one child per registered
    /// alert-handler id.
    pub fn with_handler_context(&self, fields: &[Field]) -> AlertServiceHandler {
        AlertServiceHandler {
            inner: self.inner.with_context(fields),
        }
    }

    pub fn migrating_handler_specs(&self) {
        self.inner.debug("migrating old handler specs", &[]);
    }

    pub fn migrating_old_handler_spec(&self, spec: &str) {
        self.inner
            .debug("migrating old handler spec", &[Field::str("handler", spec)]);
    }

    pub fn found_handler_rows(&self, count: i64) {
        self.inner
            .debug("found handler rows", &[Field::int("handler_row_count", count)]);
    }

    pub fn creating_new_handlers(&self, count: i64) {
        self.inner.debug(
            "creating new handlers in place of old handlers",
            &[Field::int("handler_row_count", count)],
        );
    }

    pub fn found_new_handler(&self, key: &str) {
        self.inner
            .debug("found new handler, skipping", &[Field::str("handler", key)]);
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }
}
