//! Rendering defaults.

use serde::{Deserialize, Serialize};

use crate::types::CommentStyle;

pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;
pub const DEFAULT_FLOAT_SUFFIX: &str = "f";
pub const DEFAULT_DOUBLE_SUFFIX: &str = "d";

/// Formatting settings. Every field is optional so that layers (user file,
/// project file, env, CLI, document language block) can be stacked.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// `line` or `block`. Default: line.
    pub comment_style: Option<String>,
    /// Emit the generator banner. Default: true.
    pub banner: Option<bool>,
    /// Replaces the default banner text.
    pub banner_text: Option<String>,
    /// Literal suffix for single precision values. Default: `f`.
    pub float_suffix: Option<String>,
    /// Literal suffix for double precision values. Default: `d`.
    pub double_suffix: Option<String>,
    /// Spaces before each declaration. Default: 4.
    pub indent: Option<usize>,
}

impl RenderConfig {
    /// Returns the effective comment style, defaulting to line comments.
    pub fn effective_comment_style(&self) -> CommentStyle {
        self.comment_style
            .as_deref()
            .and_then(CommentStyle::parse)
            .unwrap_or_default()
    }

    pub fn effective_banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }

    pub fn effective_banner_text(&self) -> String {
        self.banner_text
            .clone()
            .unwrap_or_else(default_banner_text)
    }

    pub fn effective_float_suffix(&self) -> &str {
        self.float_suffix.as_deref().unwrap_or(DEFAULT_FLOAT_SUFFIX)
    }

    pub fn effective_double_suffix(&self) -> &str {
        self.double_suffix.as_deref().unwrap_or(DEFAULT_DOUBLE_SUFFIX)
    }

    pub fn effective_indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }

    /// Merge `other` into `self`; `other` wins wherever it has a value.
    pub fn merge(&mut self, other: &RenderConfig) {
        if other.comment_style.is_some() {
            self.comment_style = other.comment_style.clone();
        }
        if other.banner.is_some() {
            self.banner = other.banner;
        }
        if other.banner_text.is_some() {
            self.banner_text = other.banner_text.clone();
        }
        if other.float_suffix.is_some() {
            self.float_suffix = other.float_suffix.clone();
        }
        if other.double_suffix.is_some() {
            self.double_suffix = other.double_suffix.clone();
        }
        if other.indent.is_some() {
            self.indent = other.indent;
        }
    }
}

/// `Generated with confluent v<version> (https://pypi.org/project/confluent/).`
pub fn default_banner_text() -> String {
    format!(
        "Generated with confluent v{} (https://pypi.org/project/confluent/).",
        crate::VERSION
    )
}
