//! Core logging engine.
//!
//! # Data Flow
//! ```text
//! handler method call
//!     → level.rs (threshold gate, cheap reject)
//!     → logger.rs (encode one record: timestamp, level, message, fields)
//!     → sink.rs (single shared destination, writes serialized)
//! ```
//!
//! # Design Decisions
//! - Loggers are immutable handles; forking copies the field list and shares
//!   the sink, so handlers never need external synchronization
//! - Exactly one sink per service; records are encoded outside the sink lock
//!   and written with a single call while holding it
//! - Emission is best-effort: write failures never surface to callers

pub mod field;
pub mod level;
pub mod logger;
pub mod sink;

pub use field::{Field, Value};
pub use level::{InvalidLevel, Severity};
pub use logger::Logger;
pub use sink::Sink;
