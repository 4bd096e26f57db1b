//! TypeScript class renderer.

use tracing::debug;

use confluent_core::errors::RenderError;
use confluent_core::types::{ConfigEntry, RenderedFile};

use crate::javascript::js_literal;
use crate::language::Language;
use crate::literal::{banner_line, comment};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::validate::{validate_file, IdentifierRules};

/// Renders a [`RenderedFile`] as
///
/// ```text
/// // Generated with confluent v0.1.1 (https://pypi.org/project/confluent/).
/// export class TestConfig {
///     public static readonly myBoolean = true;
/// }
/// ```
pub struct TypeScriptRenderer {
    options: RenderOptions,
}

impl TypeScriptRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn member(&self, entry: &ConfigEntry) -> Result<String, RenderError> {
        let literal = js_literal(&entry.key, &entry.value)?;
        let mut line = format!("public static readonly {} = {literal};", entry.key);
        if let Some(ref text) = entry.comment {
            line.push_str(&comment(self.options.comment_style, text));
        }
        Ok(line)
    }
}

impl Renderer for TypeScriptRenderer {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn render(&self, file: &RenderedFile) -> Result<String, RenderError> {
        validate_file(file, &IdentifierRules::TYPESCRIPT)?;

        let members = file
            .entries
            .iter()
            .map(|entry| self.member(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let indent = " ".repeat(self.options.indent);
        let mut out = String::new();
        if self.options.include_generator_banner {
            out.push_str(&banner_line(self.options.comment_style, &self.options.banner_text));
            out.push('\n');
        }

        out.push_str(&format!("export class {} {{\n", file.type_name));
        for member in &members {
            out.push_str(&indent);
            out.push_str(member);
            out.push('\n');
        }
        out.push_str("}\n");

        debug!(
            type_name = %file.type_name,
            entries = members.len(),
            "rendered typescript class"
        );
        Ok(out)
    }
}

impl Default for TypeScriptRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
