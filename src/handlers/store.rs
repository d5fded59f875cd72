//! Task store and storage-layer diagnostics.

use std::fmt;

use crate::handlers::Handler;
use crate::logging::{Field, Logger};

/// Diagnostic view of the task store: startup task activation and storage
/// migration bookkeeping.
#[derive(Clone)]
pub struct TaskStoreHandler {
    inner: Handler,
}

impl TaskStoreHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn starting_task(&self, task_id: &str) {
        self.inner
            .debug("starting enabled task on startup", &[Field::str("task", task_id)]);
    }

    pub fn started_task(&self, task_id: &str) {
        self.inner
            .debug("started task during startup", &[Field::str("task", task_id)]);
    }

    pub fn finished_task(&self, task_id: &str) {
        self.inner.debug("task finished", &[Field::str("task", task_id)]);
    }

    pub fn debug(&self, msg: &str) {
        self.inner.debug(msg, &[]);
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }

    /// The field key is the entity kind, so records group by what migrated.
    pub fn already_migrated(&self, entity: &str, id: &str) {
        self.inner.debug(
            "entity has already been migrated, skipping",
            &[Field::str(entity, id)],
        );
    }

    pub fn migrated(&self, entity: &str, id: &str) {
        self.inner.debug(
            "entity was migrated to new storage service",
            &[Field::str(entity, id)],
        );
    }
}

/// Diagnostic view of the storage layer.
#[derive(Clone)]
pub struct StorageHandler {
    inner: Handler,
}

impl StorageHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}
