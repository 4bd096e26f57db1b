//! Tool configuration for confluent.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod confluent_config;
pub mod output_config;
pub mod render_config;

pub use confluent_config::{CliOverrides, ConfluentConfig};
pub use output_config::OutputConfig;
pub use render_config::RenderConfig;
