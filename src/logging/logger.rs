//! The process-wide structured logger and its forking contract.

use std::fmt::{self, Write as _};
use std::io;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

use crate::logging::field::{Field, Value};
use crate::logging::level::Severity;
use crate::logging::sink::Sink;

/// State shared by every logger forked from one service: the single sink and
/// the severity threshold. The mutex serializes concurrent writers onto the
/// shared destination; once the sink has been taken out by `close`, further
/// writes are dropped.
pub(crate) struct Core {
    sink: Mutex<Option<Sink>>,
    threshold: Severity,
}

impl Core {
    pub(crate) fn new(sink: Sink, threshold: Severity) -> Self {
        Self {
            sink: Mutex::new(Some(sink)),
            threshold,
        }
    }

    /// Take the sink out and release it. Idempotent at this layer; the
    /// service guards against double close.
    pub(crate) fn close(&self) -> io::Result<()> {
        match self.sink.lock().take() {
            Some(sink) => sink.close(),
            None => Ok(()),
        }
    }
}

/// Immutable logging handle: a non-owning reference to the shared core plus
/// the ordered fields accumulated from ancestor forks.
///
/// Forking never mutates the receiver, so any number of threads can hold and
/// fork loggers without synchronization; only the final write is serialized.
#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
    fields: Arc<[Field]>,
}

impl Logger {
    pub(crate) fn new(core: Arc<Core>) -> Self {
        Self {
            core,
            fields: Vec::new().into(),
        }
    }

    /// Fork a logger whose persistent context extends the receiver's with
    /// `extra`, order preserved. Duplicate keys coexist; nothing is
    /// deduplicated or shadowed.
    pub fn with_fields(&self, extra: &[Field]) -> Logger {
        if extra.is_empty() {
            return self.clone();
        }
        let mut fields = Vec::with_capacity(self.fields.len() + extra.len());
        fields.extend_from_slice(&self.fields);
        fields.extend_from_slice(extra);
        Logger {
            core: Arc::clone(&self.core),
            fields: fields.into(),
        }
    }

    /// Single-field fork, the overwhelmingly common shape.
    pub fn with_field(&self, field: Field) -> Logger {
        self.with_fields(std::slice::from_ref(&field))
    }

    /// Whether an event at `severity` would be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.enabled(self.core.threshold)
    }

    /// Emit one record: persistent fields first, then the error (if any),
    /// then the inline context. Best effort; sink failures and writes after
    /// close never surface to the caller.
    ///
    /// A trailing newline on `msg` is folded into the record terminator, so
    /// adapted byte-stream writers cannot split a record across lines.
    pub fn log(
        &self,
        severity: Severity,
        msg: &str,
        err: Option<&dyn fmt::Display>,
        ctx: &[Field],
    ) {
        if !self.enabled(severity) {
            return;
        }

        let msg = msg.strip_suffix('\n').unwrap_or(msg);
        let line = encode(now_nanos(), severity, msg, &self.fields, err, ctx);

        let mut sink = self.core.sink.lock();
        if let Some(sink) = sink.as_mut() {
            let _ = sink.write_record(line.as_bytes());
        }
    }

    pub fn debug(&self, msg: &str, ctx: &[Field]) {
        self.log(Severity::Debug, msg, None, ctx);
    }

    pub fn info(&self, msg: &str, ctx: &[Field]) {
        self.log(Severity::Info, msg, None, ctx);
    }

    pub fn warn(&self, msg: &str, ctx: &[Field]) {
        self.log(Severity::Warn, msg, None, ctx);
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.log(Severity::Error, msg, Some(err), ctx);
    }

    #[cfg(test)]
    pub(crate) fn persistent_fields(&self) -> &[Field] {
        &self.fields
    }
}

fn now_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

/// One record per line: tab-separated timestamp, level and message, followed
/// by the ordered `key=value` context. Every arity of inline context takes
/// this same path, so output is identical however a call site supplies its
/// fields.
fn encode(
    ts: u128,
    severity: Severity,
    msg: &str,
    persistent: &[Field],
    err: Option<&dyn fmt::Display>,
    ctx: &[Field],
) -> String {
    let mut line = String::with_capacity(64 + msg.len());
    let _ = write!(line, "{ts}\t{severity}\t{msg}");

    let mut first = true;
    for field in persistent {
        push_field(&mut line, &mut first, field);
    }
    if let Some(err) = err {
        push_sep(&mut line, &mut first);
        line.push_str("error=");
        push_str_value(&mut line, &err.to_string());
    }
    for field in ctx {
        push_field(&mut line, &mut first, field);
    }

    line.push('\n');
    line
}

fn push_sep(line: &mut String, first: &mut bool) {
    line.push(if *first { '\t' } else { ' ' });
    *first = false;
}

fn push_field(line: &mut String, first: &mut bool, field: &Field) {
    push_sep(line, first);
    line.push_str(field.key());
    line.push('=');
    match field.value() {
        Value::Str(s) => push_str_value(line, s),
        other => {
            let _ = write!(line, "{other}");
        }
    }
}

/// String values are quoted (with escapes) only when the bare form would be
/// ambiguous in `key=value` output.
fn push_str_value(line: &mut String, s: &str) {
    let needs_quoting =
        s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '=' || c == '"');
    if needs_quoting {
        let _ = write!(line, "{s:?}");
    } else {
        line.push_str(s);
    }
}
