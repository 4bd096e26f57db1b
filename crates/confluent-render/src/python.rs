//! Python enum renderer.

use tracing::debug;

use confluent_core::errors::RenderError;
use confluent_core::types::{ConfigEntry, RenderedFile, Value};

use crate::language::Language;
use crate::literal::{double_precision, hash_comment, quote_single, single_line, unsupported};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::validate::{validate_file, IdentifierRules};

/// Renders a [`RenderedFile`] as
///
/// ```text
/// from enum import Enum
///
///
/// class TestConfig(Enum):
///     myBoolean = True
/// ```
///
/// Python has a single comment syntax, so the comment style option is
/// ignored.
pub struct PythonRenderer {
    options: RenderOptions,
}

impl PythonRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn member(&self, entry: &ConfigEntry) -> Result<String, RenderError> {
        let literal = python_literal(&entry.key, &entry.value)?;
        let mut line = format!("{} = {literal}", entry.key);
        if let Some(ref text) = entry.comment {
            line.push_str(&hash_comment(text));
        }
        Ok(line)
    }
}

impl Renderer for PythonRenderer {
    fn language(&self) -> Language {
        Language::Python
    }

    fn render(&self, file: &RenderedFile) -> Result<String, RenderError> {
        validate_file(file, &IdentifierRules::PYTHON)?;

        let members = file
            .entries
            .iter()
            .map(|entry| self.member(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let indent = " ".repeat(self.options.indent);
        let mut out = String::from("from enum import Enum\n\n\n");
        if self.options.include_generator_banner {
            out.push_str(&format!("# {}\n", single_line(&self.options.banner_text)));
        }

        out.push_str(&format!("class {}(Enum):\n", file.type_name));
        if members.is_empty() {
            out.push_str(&indent);
            out.push_str("pass\n");
        }
        for member in &members {
            out.push_str(&indent);
            out.push_str(member);
            out.push('\n');
        }

        debug!(
            type_name = %file.type_name,
            entries = members.len(),
            "rendered python enum"
        );
        Ok(out)
    }
}

impl Default for PythonRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Literal text of a value in Python.
pub fn python_literal(key: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) | Value::Double(f) => double_precision(key, *f),
        Value::String(s) => Ok(quote_single(s)),
        Value::Regex(pattern) => Ok(raw_string(pattern).unwrap_or_else(|| quote_single(pattern))),
        Value::List(_) | Value::Map(_) => Err(unsupported(key, value)),
    }
}

/// `r'pattern'`, or `None` when the pattern cannot be written raw: it holds
/// a quote or a control character, or ends in an odd run of backslashes.
fn raw_string(pattern: &str) -> Option<String> {
    if pattern.chars().any(|c| c == '\'' || c.is_control()) {
        return None;
    }
    let trailing = pattern.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        return None;
    }
    Some(format!("r'{pattern}'"))
}
