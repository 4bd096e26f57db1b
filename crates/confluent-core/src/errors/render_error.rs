//! Renderer errors. All of them are raised before any output is produced.

use super::error_code::{self, ConfluentErrorCode};
use crate::types::ValueKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("Key '{key}' is not a valid identifier")]
    InvalidKey { key: String },

    #[error("Key '{key}' is declared more than once")]
    DuplicateKey { key: String },

    #[error("Key '{key}' has a {kind} value, which cannot be rendered")]
    UnsupportedValueKind { key: String, kind: ValueKind },

    #[error("Value of '{key}' is out of range: {message}")]
    ValueOutOfRange { key: String, message: String },

    #[error("Key '{key}' references include '{alias}', which is not part of the file")]
    MissingInclude { key: String, alias: String },

    #[error("Invalid package name '{package}'")]
    InvalidPackage { package: String },

    #[error("Invalid type name '{name}'")]
    InvalidTypeName { name: String },

    #[error("Type '{name}' has no members, which {language} does not allow")]
    EmptyType { name: String, language: &'static str },
}

impl ConfluentErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => error_code::INVALID_KEY,
            Self::DuplicateKey { .. } => error_code::DUPLICATE_KEY,
            Self::UnsupportedValueKind { .. } => error_code::UNSUPPORTED_VALUE_KIND,
            Self::MissingInclude { .. } => error_code::MISSING_INCLUDE,
            Self::ValueOutOfRange { .. }
            | Self::InvalidPackage { .. }
            | Self::InvalidTypeName { .. }
            | Self::EmptyType { .. } => error_code::RENDER_ERROR,
        }
    }
}
