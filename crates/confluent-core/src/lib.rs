//! # confluent-core
//!
//! Foundation crate for the confluent config generator.
//! Holds the resolved data model handed to renderers, naming conventions,
//! one error enum per subsystem, the layered tool configuration and the
//! tracing setup.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

/// Version stamped into the generator banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
