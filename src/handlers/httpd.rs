//! HTTP server diagnostics.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::handlers::{Handler, StaticLevelHandler};
use crate::logging::{Field, Logger, Severity};

/// One access-log record. Collected into a struct because the request path
/// carries too many attributes for a readable argument list.
#[derive(Debug, Clone)]
pub struct AccessLog {
    pub host: String,
    pub username: String,
    pub start: SystemTime,
    pub method: String,
    pub uri: String,
    pub protocol: String,
    pub status: i64,
    pub referer: String,
    pub user_agent: String,
    pub request_id: String,
    pub duration: Duration,
}

impl AccessLog {
    fn fields(&self) -> Vec<Field> {
        let start_nanos = self
            .start
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as i64)
            .unwrap_or_default();
        vec![
            Field::str("host", &*self.host),
            Field::str("username", &*self.username),
            Field::int("start", start_nanos),
            Field::str("method", &*self.method),
            Field::str("uri", &*self.uri),
            Field::str("protocol", &*self.protocol),
            Field::int("status", self.status),
            Field::str("referer", &*self.referer),
            Field::str("user-agent", &*self.user_agent),
            Field::str("request-id", &*self.request_id),
            Field::duration("duration", self.duration),
        ]
    }
}

/// Diagnostic view of the HTTP server.
#[derive(Clone)]
pub struct HttpdHandler {
    inner: Handler,
}

impl HttpdHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    /// Pinned-severity writer for the server's unstructured error log; every
    /// line it writes becomes one Error-level record.
    pub fn error_writer(&self) -> StaticLevelHandler {
        StaticLevelHandler::new(
            self.inner
                .logger()
                .with_field(Field::str("service", "httpd_server_errors")),
            Severity::Error,
        )
    }

    pub fn starting_service(&self) {
        self.inner.info("starting HTTP service", &[]);
    }

    pub fn stopped_service(&self) {
        self.inner.info("closed HTTP service", &[]);
    }

    pub fn shutdown_timeout(&self) {
        self.inner.error_msg(
            "shutdown timed out, forcefully closing all remaining connections",
            &[],
        );
    }

    pub fn authentication_enabled(&self, enabled: bool) {
        self.inner
            .info("authentication", &[Field::bool("enabled", enabled)]);
    }

    pub fn listening_on(&self, addr: &str, protocol: &str) {
        self.inner.info(
            "listening on",
            &[Field::str("addr", addr), Field::str("protocol", protocol)],
        );
    }

    pub fn write_body_received(&self, body: &str) {
        self.inner
            .debug("write body received by handler", &[Field::str("body", body)]);
    }

    pub fn request(&self, entry: &AccessLog) {
        self.inner.info("http request", &entry.fields());
    }

    /// A handler panicked; the recovered error plus the full request context.
    pub fn recovery_error(&self, msg: &str, err: &str, entry: &AccessLog) {
        let mut fields = Vec::with_capacity(12);
        fields.push(Field::str("err", err));
        fields.extend(entry.fields());
        self.inner.error_msg(msg, &fields);
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}
