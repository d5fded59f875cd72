//! Diagnostic Logging Facade
//!
//! A central logging authority that produces narrowly-scoped, strongly-typed
//! handlers, one per subsystem, each exposing only the log events relevant to
//! its owner.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────────────┐
//!                 │                 DIAGNOSTIC SERVICE                      │
//!                 │                                                         │
//!   open(config)  │  ┌─────────┐     ┌──────────────┐     ┌─────────────┐  │
//!   ─────────────▶│  │ config  │────▶│ core logger  │────▶│    sink     │  │
//!                 │  │ level + │     │ threshold +  │     │ STDOUT/     │  │
//!                 │  │ file    │     │ encoder      │     │ STDERR/file │  │
//!                 │  └─────────┘     └──────┬───────┘     └─────────────┘  │
//!                 │                         │ fork (+service field)        │
//!                 │         ┌───────────────┼────────────────┐             │
//!                 │         ▼               ▼                ▼             │
//!                 │  ┌────────────┐  ┌────────────┐  ┌──────────────┐      │
//!                 │  │  channel   │  │   engine   │  │   scraper    │      │
//!                 │  │  handlers  │  │ task store │  │   adapter    │      │
//!                 │  │ (alerting) │  │ httpd, ... │  │ (discovery)  │      │
//!                 │  └────────────┘  └────────────┘  └──────────────┘      │
//!                 │         │               │                │             │
//!                 │         ▼               ▼                ▼             │
//!                 │   with_context    with_task/node    with(key, value)   │
//!                 │   (pure forks; parents stay valid and independent)     │
//!                 └────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers are plain values over an immutable logger handle: forking copies
//! the field list and shares the sink, so subsystems attach context without
//! mutating anything shared. The one mutable spot, the scraper adapter's
//! reusable render buffer, is guarded by its own lock.

// Core logging engine
pub mod config;
pub mod logging;

// Facade
pub mod handlers;
pub mod service;

pub use config::DiagnosticConfig;
pub use logging::{Field, InvalidLevel, Severity, Value};
pub use service::{Service, ServiceError};
