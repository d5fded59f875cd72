//! Task-execution engine diagnostics.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view of the task-execution engine. Forks narrow the context to
/// one task master, one task, one node, or one edge; the engine hands the
/// forked handler down to the component it belongs to.
#[derive(Clone)]
pub struct EngineHandler {
    inner: Handler,
}

impl EngineHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn with_context(&self, fields: &[Field]) -> EngineHandler {
        EngineHandler {
            inner: self.inner.with_context(fields),
        }
    }

    pub fn with_task(&self, task: &str) -> EngineHandler {
        self.with_context(&[Field::str("task", task)])
    }

    pub fn with_task_master(&self, task_master: &str) -> EngineHandler {
        self.with_context(&[Field::str("task_master", task_master)])
    }

    pub fn with_node(&self, node: &str) -> EngineHandler {
        self.with_context(&[Field::str("node", node)])
    }

    /// Per-edge diagnostics for the (task, parent, child) edge triple.
    pub fn with_edge(&self, task: &str, parent: &str, child: &str) -> EdgeHandler {
        EdgeHandler {
            inner: self.inner.with_context(&[
                Field::str("task", task),
                Field::str("parent", parent),
                Field::str("child", child),
            ]),
        }
    }

    pub fn task_master_opened(&self) {
        self.inner.info("opened task master", &[]);
    }

    pub fn task_master_closed(&self) {
        self.inner.info("closed task master", &[]);
    }

    pub fn starting_task(&self, task: &str) {
        self.inner.debug("starting task", &[Field::str("task", task)]);
    }

    pub fn started_task(&self, task: &str) {
        self.inner.info("started task", &[Field::str("task", task)]);
    }

    pub fn stopped_task(&self, task: &str) {
        self.inner.info("stopped task", &[Field::str("task", task)]);
    }

    pub fn stopped_task_with_error(&self, task: &str, err: &dyn fmt::Display) {
        self.inner
            .error("failed to stop task cleanly", err, &[Field::str("task", task)]);
    }

    pub fn task_master_dot(&self, dot: &str) {
        self.inner.debug("listing dot", &[Field::str("dot", dot)]);
    }

    pub fn closing_edge(&self, collected: i64, emitted: i64) {
        self.inner.debug(
            "closing edge",
            &[Field::int("collected", collected), Field::int("emitted", emitted)],
        );
    }

    pub fn alert_triggered(&self, level: &str, id: &str, message: &str, data: &str) {
        self.inner.debug(
            "alert triggered",
            &[
                Field::str("level", level),
                Field::str("id", id),
                Field::str("event_message", message),
                Field::str("data", data),
            ],
        );
    }

    pub fn setting_replicas(&self, new: i64, old: i64, id: &str) {
        self.inner.debug(
            "setting replicas",
            &[
                Field::int("new", new),
                Field::int("old", old),
                Field::str("event_id", id),
            ],
        );
    }

    pub fn starting_batch_query(&self, query: &str) {
        self.inner
            .debug("starting next batch query", &[Field::str("query", query)]);
    }

    /// Passthrough for log lines produced inside user-defined functions.
    pub fn udf_log(&self, text: &str) {
        self.inner.info("UDF log", &[Field::str("text", text)]);
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }
}

/// Edge-scoped diagnostics emitted on the collect/emit hot path.
#[derive(Clone)]
pub struct EdgeHandler {
    inner: Handler,
}

impl EdgeHandler {
    pub fn collect(&self, message_type: &str) {
        self.inner
            .debug("collected message", &[Field::str("message_type", message_type)]);
    }

    pub fn emit(&self, message_type: &str) {
        self.inner
            .debug("emitted message", &[Field::str("message_type", message_type)]);
    }
}
