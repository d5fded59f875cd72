//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DiagnosticConfig (validated, immutable)
//!     → Service::open interprets level + destination
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the service is not designed for reopen
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DiagnosticConfig;
