//! ConfluentErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so callers (and the CLI exit message)
/// can match on a stable code instead of the display text.
pub trait ConfluentErrorCode {
    /// Returns the error code string (e.g., "RENDER_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_KEY: &str = "INVALID_KEY";
pub const DUPLICATE_KEY: &str = "DUPLICATE_KEY";
pub const UNSUPPORTED_VALUE_KIND: &str = "UNSUPPORTED_VALUE_KIND";
pub const MISSING_INCLUDE: &str = "MISSING_INCLUDE";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
pub const SUBSTITUTION_ERROR: &str = "SUBSTITUTION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
