//! Common interface of the language renderers.

use confluent_core::errors::RenderError;
use confluent_core::types::RenderedFile;

use crate::language::Language;

/// Turns a [`RenderedFile`] into the source text of one language.
pub trait Renderer {
    /// Language of the produced source.
    fn language(&self) -> Language;

    /// Validates the whole file, then renders it. Nothing is returned unless
    /// every entry renders.
    fn render(&self, file: &RenderedFile) -> Result<String, RenderError>;
}
