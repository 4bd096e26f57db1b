//! Formatting toggles for a render run.

use confluent_core::config::render_config::{
    default_banner_text, DEFAULT_DOUBLE_SUFFIX, DEFAULT_FLOAT_SUFFIX, DEFAULT_INDENT,
};
use confluent_core::config::RenderConfig;
use confluent_core::types::CommentStyle;

/// Every switch that changes rendered output lives here, so that output is a
/// function of `(RenderedFile, RenderOptions)` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub comment_style: CommentStyle,
    pub include_generator_banner: bool,
    pub banner_text: String,
    /// Java only. C floats always carry `f`; the other languages have a
    /// single float type.
    pub float_suffix: String,
    /// Java only.
    pub double_suffix: String,
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            comment_style: CommentStyle::Line,
            include_generator_banner: true,
            banner_text: default_banner_text(),
            float_suffix: DEFAULT_FLOAT_SUFFIX.to_string(),
            double_suffix: DEFAULT_DOUBLE_SUFFIX.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl RenderOptions {
    /// Resolves the effective options of a (possibly layered) config.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            comment_style: config.effective_comment_style(),
            include_generator_banner: config.effective_banner(),
            banner_text: config.effective_banner_text(),
            float_suffix: config.effective_float_suffix().to_string(),
            double_suffix: config.effective_double_suffix().to_string(),
            indent: config.effective_indent(),
        }
    }

    pub fn with_comment_style(mut self, style: CommentStyle) -> Self {
        self.comment_style = style;
        self
    }

    pub fn with_banner(mut self, enabled: bool) -> Self {
        self.include_generator_banner = enabled;
        self
    }
}
