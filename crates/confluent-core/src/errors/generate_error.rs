//! Top-level error for a full load -> resolve -> render -> write run.

use super::error_code::{self, ConfluentErrorCode};
use super::{ConfigError, RenderError, ResolveError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Render error in {file}: {source}")]
    Render {
        file: String,
        #[source]
        source: RenderError,
    },

    #[error("Output directory {path} does not exist")]
    OutputDirectoryMissing { path: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfluentErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Resolve(e) => e.error_code(),
            Self::Render { source, .. } => source.error_code(),
            Self::OutputDirectoryMissing { .. } | Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
