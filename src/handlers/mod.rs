//! Subsystem handler vocabularies over the core logger.
//!
//! Every subsystem receives a narrow, typed view of the same underlying
//! capability: leveled structured logging plus context forking. The generic
//! [`Handler`] implements that capability once; subsystem types wrap it and
//! add their own domain events ("task started", "alert triggered") as thin
//! methods translating into one leveled call each.
//!
//! # Design Decisions
//! - One generic handler, many thin wrappers: the forking boilerplate lives
//!   in exactly one place
//! - Handlers are values: cheap to clone, safe to share across threads, no
//!   teardown (the service owns the sink)
//! - Inline context is borrowed, so the common 0/1/2-field call shapes do
//!   not allocate

mod channel;
mod cluster;
mod engine;
mod httpd;
mod misc;
mod replay;
mod scraper;
mod server;
mod static_level;
mod store;
mod udp;

pub use channel::{AlertServiceHandler, ChannelHandler};
pub use cluster::{ClusterHandler, InfluxDbHandler};
pub use engine::{EdgeHandler, EngineHandler};
pub use httpd::{AccessLog, HttpdHandler};
pub use misc::{
    ConfigOverrideHandler, DeadmanHandler, NoAuthHandler, ReportingHandler, StatsHandler,
    UdfHandler,
};
pub use replay::ReplayHandler;
pub use scraper::{DiscoveryLog, ScraperHandler};
pub use server::{CmdHandler, ServerHandler};
pub use static_level::StaticLevelHandler;
pub use store::{StorageHandler, TaskStoreHandler};
pub use udp::UdpHandler;

use std::fmt;

use crate::logging::{Field, Logger, Severity};

/// The capability every subsystem view shares: leveled structured calls with
/// optional inline context, and pure context forking.
#[derive(Clone)]
pub struct Handler {
    logger: Logger,
}

impl Handler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Fork a handler whose records carry the given additional fields. The
    /// receiver is unchanged; both remain independently usable, so one base
    /// handler can spawn differently-tagged children concurrently.
    pub fn with_context(&self, fields: &[Field]) -> Handler {
        Handler::new(self.logger.with_fields(fields))
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.logger.log(Severity::Error, msg, Some(err), ctx);
    }

    /// Error record without an underlying error value.
    pub fn error_msg(&self, msg: &str, ctx: &[Field]) {
        self.logger.log(Severity::Error, msg, None, ctx);
    }

    pub fn warn(&self, msg: &str, ctx: &[Field]) {
        self.logger.log(Severity::Warn, msg, None, ctx);
    }

    pub fn info(&self, msg: &str, ctx: &[Field]) {
        self.logger.log(Severity::Info, msg, None, ctx);
    }

    pub fn debug(&self, msg: &str, ctx: &[Field]) {
        self.logger.log(Severity::Debug, msg, None, ctx);
    }

    pub(crate) fn logger(&self) -> &Logger {
        &self.logger
    }
}
