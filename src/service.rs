//! Diagnostic service: sink lifecycle and the handler factory surface.
//!
//! # Responsibilities
//! - Interpret the configured level and destination, exactly once, at open
//! - Own the single sink and release it at close
//! - Hand out per-subsystem handlers, each forked with a `service` field
//!
//! # Design Decisions
//! - No global state: the host constructs one `Service` and passes handlers
//!   down to subsystems at wiring time
//! - Standard streams are injected, so hosts and tests can redirect
//!   diagnostics without touching the process's file descriptors
//! - Level strings fail fast everywhere; nothing defaults silently

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::config::DiagnosticConfig;
use crate::handlers::{
    AlertServiceHandler, ChannelHandler, ClusterHandler, CmdHandler, ConfigOverrideHandler,
    DeadmanHandler, EngineHandler, Handler, HttpdHandler, InfluxDbHandler, NoAuthHandler,
    ReplayHandler, ReportingHandler, ScraperHandler, ServerHandler, StaticLevelHandler,
    StatsHandler, StorageHandler, TaskStoreHandler, UdfHandler, UdpHandler,
};
use crate::logging::logger::Core;
use crate::logging::sink::{SinkError, StreamWriter, STDERR, STDOUT};
use crate::logging::{Field, Logger, Severity, Sink};

/// Errors from the service lifecycle and level-validated factories.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("diagnostic service is already open")]
    AlreadyOpen,

    #[error("diagnostic service is already closed")]
    AlreadyClosed,

    #[error("failed to close log sink: {0}")]
    Close(#[from] io::Error),
}

/// Generates the factories whose handlers differ only by `service` tag.
macro_rules! channel_factories {
    ($($name:ident => $service:literal),+ $(,)?) => {
        $(
            pub fn $name(&self) -> ChannelHandler {
                ChannelHandler::new(self.subsystem($service))
            }
        )+
    };
}

/// Same table shape for the discovery scrapers; each gets its own adapter
/// instance with its own buffer.
macro_rules! scraper_factories {
    ($($name:ident => $service:literal),+ $(,)?) => {
        $(
            pub fn $name(&self) -> ScraperHandler {
                ScraperHandler::new(self.subsystem($service))
            }
        )+
    };
}

/// The central logging authority: owns the core logger's lifecycle and is the
/// exclusive factory for subsystem handlers.
pub struct Service {
    config: DiagnosticConfig,
    stdout: Option<StreamWriter>,
    stderr: Option<StreamWriter>,
    core: Option<Arc<Core>>,
    closed: bool,
}

impl Service {
    /// Service bound to the process's standard streams.
    pub fn new(config: DiagnosticConfig) -> Self {
        Self::with_streams(config, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Service with injected standard streams: the seam used by tests and by
    /// hosts that redirect diagnostics.
    pub fn with_streams(
        config: DiagnosticConfig,
        stdout: StreamWriter,
        stderr: StreamWriter,
    ) -> Self {
        Self {
            config,
            stdout: Some(stdout),
            stderr: Some(stderr),
            core: None,
            closed: false,
        }
    }

    /// Construct the core logger: parse the level, bind the sink. Called at
    /// most once; the service is not designed for reuse, so reopening (even
    /// after close) is an error.
    pub fn open(&mut self) -> Result<(), ServiceError> {
        if self.core.is_some() || self.closed {
            return Err(ServiceError::AlreadyOpen);
        }

        let threshold: Severity = self
            .config
            .level
            .parse()
            .map_err(|_| ServiceError::InvalidLevel(self.config.level.clone()))?;

        let sink = match self.config.file.as_str() {
            STDOUT => Sink::stream(self.stdout.take().ok_or(ServiceError::AlreadyOpen)?),
            STDERR => Sink::stream(self.stderr.take().ok_or(ServiceError::AlreadyOpen)?),
            path => Sink::file(path)?,
        };

        self.core = Some(Arc::new(Core::new(sink, threshold)));
        Ok(())
    }

    /// Release the sink. A service that was never opened closes as a no-op;
    /// closing twice is an error. Handlers that outlive the close keep
    /// working, their writes silently discarded.
    pub fn close(&mut self) -> Result<(), ServiceError> {
        if self.closed {
            return Err(ServiceError::AlreadyClosed);
        }
        self.closed = true;

        match self.core.take() {
            Some(core) => core.close().map_err(ServiceError::Close),
            None => Ok(()),
        }
    }

    /// Root logger for handler construction.
    ///
    /// # Panics
    /// Panics if the service has not been opened; handlers are only handed
    /// out between `open` and `close`.
    fn logger(&self) -> Logger {
        match &self.core {
            Some(core) => Logger::new(Arc::clone(core)),
            None => panic!("diagnostic service is not open"),
        }
    }

    fn subsystem(&self, name: &str) -> Logger {
        self.logger().with_field(Field::str("service", name))
    }

    channel_factories! {
        slack_handler => "slack",
        pagerduty_handler => "pagerduty",
        victorops_handler => "victorops",
        opsgenie_handler => "opsgenie",
        pushover_handler => "pushover",
        telegram_handler => "telegram",
        smtp_handler => "smtp",
        sensu_handler => "sensu",
        snmptrap_handler => "snmp",
        talk_handler => "talk",
        httppost_handler => "httppost",
        alerta_handler => "alerta",
    }

    scraper_factories! {
        scraper_handler => "scraper",
        azure_discovery_handler => "azure",
        consul_discovery_handler => "consul",
        dns_discovery_handler => "dns",
        ec2_discovery_handler => "ec2",
        file_discovery_handler => "file-discovery",
        gce_discovery_handler => "gce",
        marathon_discovery_handler => "marathon",
        nerve_discovery_handler => "nerve",
        serverset_discovery_handler => "serverset",
        static_discovery_handler => "static-discovery",
        triton_discovery_handler => "triton",
    }

    pub fn alert_service_handler(&self) -> AlertServiceHandler {
        AlertServiceHandler::new(self.subsystem("alert"))
    }

    pub fn engine_handler(&self) -> EngineHandler {
        EngineHandler::new(self.subsystem("engine"))
    }

    pub fn task_store_handler(&self) -> TaskStoreHandler {
        TaskStoreHandler::new(self.subsystem("task_store"))
    }

    pub fn storage_handler(&self) -> StorageHandler {
        StorageHandler::new(self.subsystem("storage"))
    }

    pub fn reporting_handler(&self) -> ReportingHandler {
        ReportingHandler::new(self.subsystem("reporting"))
    }

    pub fn httpd_handler(&self) -> HttpdHandler {
        HttpdHandler::new(self.subsystem("http"))
    }

    /// The server handler tags records with their source rather than an
    /// owning service; it logs on behalf of the whole daemon.
    pub fn server_handler(&self) -> ServerHandler {
        ServerHandler::new(self.logger().with_field(Field::str("source", "srv")))
    }

    pub fn replay_handler(&self) -> ReplayHandler {
        ReplayHandler::new(self.subsystem("replay"))
    }

    pub fn config_override_handler(&self) -> ConfigOverrideHandler {
        ConfigOverrideHandler::new(self.subsystem("config-override"))
    }

    pub fn kubernetes_handler(&self) -> ClusterHandler {
        ClusterHandler::new(self.subsystem("kubernetes"))
    }

    pub fn swarm_handler(&self) -> ClusterHandler {
        ClusterHandler::new(self.subsystem("swarm"))
    }

    pub fn influxdb_handler(&self) -> InfluxDbHandler {
        InfluxDbHandler::new(self.subsystem("influxdb"))
    }

    pub fn udp_handler(&self) -> UdpHandler {
        UdpHandler::new(self.subsystem("udp"))
    }

    pub fn udf_handler(&self) -> UdfHandler {
        UdfHandler::new(self.subsystem("udf"))
    }

    pub fn noauth_handler(&self) -> NoAuthHandler {
        NoAuthHandler::new(self.subsystem("noauth"))
    }

    pub fn deadman_handler(&self) -> DeadmanHandler {
        DeadmanHandler::new(self.subsystem("deadman"))
    }

    pub fn stats_handler(&self) -> StatsHandler {
        StatsHandler::new(self.subsystem("stats"))
    }

    pub fn cmd_handler(&self) -> CmdHandler {
        CmdHandler::new(self.subsystem("run"))
    }

    /// Generic handler for a subsystem that has no bespoke vocabulary.
    pub fn handler(&self, service: &str) -> Handler {
        Handler::new(self.subsystem(service))
    }

    /// Handler pinned to one severity, for adapting a foreign byte-stream
    /// writer. Fails closed: an unrecognized level yields an error and no
    /// handler.
    pub fn static_level_handler(
        &self,
        level: &str,
        service: &str,
    ) -> Result<StaticLevelHandler, ServiceError> {
        let severity: Severity = level
            .parse()
            .map_err(|_| ServiceError::InvalidLevel(level.to_string()))?;
        Ok(StaticLevelHandler::new(self.subsystem(service), severity))
    }
}
