//! Observability for confluent.
//! `tracing` crate with `EnvFilter`, configured through `CONFLUENT_LOG`.

pub mod setup;

pub use setup::init_tracing;
