//! Cluster and upstream-database diagnostics.

use std::fmt;

use crate::handlers::{Handler, UdpHandler};
use crate::logging::{Field, Logger};

/// Diagnostic view of a container-cluster integration (kubernetes, swarm).
/// Forks narrow records to one cluster.
#[derive(Clone)]
pub struct ClusterHandler {
    inner: Handler,
}

impl ClusterHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn with_cluster(&self, cluster_id: &str) -> ClusterHandler {
        ClusterHandler {
            inner: self.inner.with_context(&[Field::str("cluster_id", cluster_id)]),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display) {
        self.inner.error(msg, err, &[]);
    }
}

/// Diagnostic view of the upstream time-series database integration:
/// subscription management and the per-cluster/per-listener forks.
#[derive(Clone)]
pub struct InfluxDbHandler {
    inner: Handler,
}

impl InfluxDbHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            inner: Handler::new(logger),
        }
    }

    pub fn error(&self, msg: &str, err: &dyn fmt::Display, ctx: &[Field]) {
        self.inner.error(msg, err, ctx);
    }

    pub fn with_cluster(&self, id: &str) -> InfluxDbHandler {
        InfluxDbHandler {
            inner: self.inner.with_context(&[Field::str("cluster", id)]),
        }
    }

    /// Diagnostics for a UDP listener spawned on behalf of this integration.
    pub fn with_udp_listener(&self, id: &str) -> UdpHandler {
        UdpHandler::new(
            self.inner
                .logger()
                .with_field(Field::str("listener_id", id)),
        )
    }

    pub fn insecure_skip_verify(&self, urls: &[String]) {
        self.inner.warn(
            "using InsecureSkipVerify when connecting to InfluxDB; this is insecure",
            &[Field::str("urls", urls.join(","))],
        );
    }

    pub fn unlinking_subscriptions(&self, cluster: &str) {
        self.inner
            .debug("unlinking subscription for cluster", &[Field::str("cluster", cluster)]);
    }

    pub fn linking_subscriptions(&self, cluster: &str) {
        self.inner
            .debug("linking subscription for cluster", &[Field::str("cluster", cluster)]);
    }

    pub fn started_udp_listener(&self, dbrp: &str) {
        self.inner
            .info("started UDP listener", &[Field::str("dbrp", dbrp)]);
    }
}
