//! Error handling for confluent.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod generate_error;
pub mod render_error;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use error_code::ConfluentErrorCode;
pub use generate_error::GenerateError;
pub use render_error::RenderError;
pub use resolve_error::ResolveError;
