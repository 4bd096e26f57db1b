//! JavaScript class renderer. Constants are exposed as static getters so
//! they cannot be reassigned.

use tracing::debug;

use confluent_core::errors::RenderError;
use confluent_core::types::{ConfigEntry, RenderedFile, Value};

use crate::language::Language;
use crate::literal::{
    banner_line, comment, double_precision, out_of_range, quote_single, unsupported,
};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::validate::{validate_file, IdentifierRules};

/// Largest integer a JavaScript number holds exactly.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Renders a [`RenderedFile`] as
///
/// ```text
/// // Generated with confluent v0.1.1 (https://pypi.org/project/confluent/).
/// class TestConfig {
///     static get myBoolean() { return true; }
/// }
/// module.exports = TestConfig
/// ```
pub struct JavaScriptRenderer {
    options: RenderOptions,
}

impl JavaScriptRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn getter(&self, entry: &ConfigEntry) -> Result<String, RenderError> {
        let literal = js_literal(&entry.key, &entry.value)?;
        let mut line = format!("static get {}() {{ return {literal}; }}", entry.key);
        if let Some(ref text) = entry.comment {
            line.push_str(&comment(self.options.comment_style, text));
        }
        Ok(line)
    }
}

impl Renderer for JavaScriptRenderer {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn render(&self, file: &RenderedFile) -> Result<String, RenderError> {
        validate_file(file, &IdentifierRules::JAVASCRIPT)?;

        let getters = file
            .entries
            .iter()
            .map(|entry| self.getter(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let indent = " ".repeat(self.options.indent);
        let mut out = String::new();
        if self.options.include_generator_banner {
            out.push_str(&banner_line(self.options.comment_style, &self.options.banner_text));
            out.push('\n');
        }

        out.push_str(&format!("class {} {{\n", file.type_name));
        for getter in &getters {
            out.push_str(&indent);
            out.push_str(getter);
            out.push('\n');
        }
        out.push_str("}\n");
        out.push_str(&format!("module.exports = {}\n", file.type_name));

        debug!(
            type_name = %file.type_name,
            entries = getters.len(),
            "rendered javascript class"
        );
        Ok(out)
    }
}

impl Default for JavaScriptRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Literal text of a value in JavaScript and TypeScript.
pub fn js_literal(key: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(i) => {
            if i.unsigned_abs() > MAX_SAFE_INTEGER as u64 {
                return Err(out_of_range(
                    key,
                    format!("{i} is outside the safe integer range of a JavaScript number"),
                ));
            }
            Ok(i.to_string())
        }
        Value::Float(f) | Value::Double(f) => double_precision(key, *f),
        Value::String(s) => Ok(quote_single(s)),
        Value::Regex(pattern) => Ok(regex_literal(pattern)),
        Value::List(_) | Value::Map(_) => Err(unsupported(key, value)),
    }
}

/// `/pattern/` with every unescaped `/` and line break escaped. An empty
/// pattern becomes `/(?:)/`, since `//` opens a comment.
pub fn regex_literal(pattern: &str) -> String {
    if pattern.is_empty() {
        return "/(?:)/".to_string();
    }

    let mut out = String::with_capacity(pattern.len() + 2);
    out.push('/');
    let mut backslashes = 0usize;
    for c in pattern.chars() {
        let escaped = backslashes % 2 == 1;
        match c {
            '/' if !escaped => out.push_str("\\/"),
            '\n' => out.push_str(if escaped { "n" } else { "\\n" }),
            '\r' => out.push_str(if escaped { "r" } else { "\\r" }),
            '\u{2028}' | '\u{2029}' => {
                if !escaped {
                    out.push('\\');
                }
                out.push_str(&format!("u{:04x}", c as u32));
            }
            c => out.push(c),
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }
    if backslashes % 2 == 1 {
        out.push('\\');
    }
    out.push('/');
    out
}
