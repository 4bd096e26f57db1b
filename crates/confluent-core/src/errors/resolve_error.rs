//! Document resolution errors: YAML loading, includes, substitution.

use super::error_code::{self, ConfluentErrorCode};

/// Errors that can occur while turning a YAML document into rendered files.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("YAML error in {path}: {message}")]
    Yaml { path: String, message: String },

    #[error("Include '{path}' could not be found")]
    MissingInclude { path: String },

    #[error("The include alias '{alias}' is already in use")]
    AliasAlreadyInUse { alias: String },

    #[error("Include cycle detected at {path}")]
    IncludeCycle { path: String },

    #[error("Unknown property type '{type_name}'")]
    UnknownPropertyType { type_name: String },

    #[error("'{name}' is not a valid property name")]
    InvalidPropertyName { name: String },

    #[error("Property '{name}' already exists")]
    DuplicateProperty { name: String },

    #[error("Unknown language '{language}'")]
    UnknownLanguage { language: String },

    #[error("Unknown naming convention '{convention}'")]
    UnknownNamingConvention { convention: String },

    #[error("Unknown comment style '{style}'")]
    UnknownCommentStyle { style: String },

    #[error("Language '{language}' requires a package definition")]
    MissingPackage { language: String },

    #[error("No config name has been provided")]
    MissingConfigName,

    #[error("Invalid value for '{name}': {message}")]
    InvalidValue { name: String, message: String },

    #[error("Unknown substitution property '{reference}' in '{name}'")]
    UnknownSubstitution { name: String, reference: String },

    #[error("Property '{name}' must not reference itself")]
    SelfReference { name: String },

    #[error("Substitution cycle: {}", chain.join(" -> "))]
    SubstitutionCycle { chain: Vec<String> },

    #[error("References from '{name}' nest deeper than {limit} levels")]
    ReferenceTooDeep { name: String, limit: usize },

    #[error("Invalid expression in '{name}': {message}")]
    InvalidExpression { name: String, message: String },
}

impl ConfluentErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInclude { .. } => error_code::MISSING_INCLUDE,
            Self::UnknownSubstitution { .. }
            | Self::SelfReference { .. }
            | Self::SubstitutionCycle { .. }
            | Self::ReferenceTooDeep { .. }
            | Self::InvalidExpression { .. } => error_code::SUBSTITUTION_ERROR,
            Self::Read { .. } => error_code::IO_ERROR,
            _ => error_code::DOCUMENT_ERROR,
        }
    }
}
