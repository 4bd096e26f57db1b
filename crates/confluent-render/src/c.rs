//! C header renderer.

use tracing::debug;

use confluent_core::errors::RenderError;
use confluent_core::types::{CommentStyle, NamingConvention, RenderedFile, Value};

use crate::language::Language;
use crate::literal::{comment, double_precision, int32, single_line, single_precision, unsupported};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::validate::{validate_file, IdentifierRules};

/// Renders a [`RenderedFile`] as a header with an include guard and a
/// constant anonymous struct:
///
/// ```text
/// #ifndef TEST_CONFIG_H
/// #define TEST_CONFIG_H
///
/// /* Generated with confluent v0.1.1 (https://pypi.org/project/confluent/). */
/// const struct {
///     unsigned char MyBoolean;
/// } TestConfig = {
///     1,
/// };
///
/// #endif /* TEST_CONFIG_H */
/// ```
pub struct CRenderer {
    options: RenderOptions,
}

impl CRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// A line comment ending in `\` would swallow the next line, so such
    /// text is always written as a block comment.
    fn comment(&self, text: &str) -> String {
        match self.options.comment_style {
            CommentStyle::Line if single_line(text).ends_with('\\') => {
                comment(CommentStyle::Block, text)
            }
            style => comment(style, text),
        }
    }
}

impl Renderer for CRenderer {
    fn language(&self) -> Language {
        Language::C
    }

    fn render(&self, file: &RenderedFile) -> Result<String, RenderError> {
        validate_file(file, &IdentifierRules::C)?;
        if file.entries.is_empty() {
            return Err(RenderError::EmptyType {
                name: file.type_name.clone(),
                language: Language::C.name(),
            });
        }

        let mut members = Vec::with_capacity(file.entries.len());
        let mut values = Vec::with_capacity(file.entries.len());
        for entry in &file.entries {
            let (c_type, literal) = c_literal(&entry.key, &entry.value)?;
            let mut member = format!("{c_type} {};", entry.key);
            if let Some(ref text) = entry.comment {
                member.push_str(&self.comment(text));
            }
            members.push(member);
            values.push(literal);
        }

        let guard = include_guard(&file.type_name);
        let indent = " ".repeat(self.options.indent);
        let mut out = format!("#ifndef {guard}\n#define {guard}\n\n");

        if self.options.include_generator_banner {
            out.push_str(self.comment(&self.options.banner_text).trim_start());
            out.push('\n');
        }

        out.push_str("const struct {\n");
        for member in &members {
            out.push_str(&format!("{indent}{member}\n"));
        }
        out.push_str(&format!("}} {} = {{\n", file.type_name));
        for value in &values {
            out.push_str(&format!("{indent}{value},\n"));
        }
        out.push_str("};\n\n");
        out.push_str(&format!("#endif /* {guard} */\n"));

        debug!(
            type_name = %file.type_name,
            guard = %guard,
            entries = members.len(),
            "rendered c header"
        );
        Ok(out)
    }
}

impl Default for CRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// `TestConfig` -> `TEST_CONFIG_H`
pub fn include_guard(type_name: &str) -> String {
    format!("{}_H", NamingConvention::ScreamingSnake.convert(type_name))
}

/// C member type and initializer text for a value.
pub fn c_literal(key: &str, value: &Value) -> Result<(&'static str, String), RenderError> {
    match value {
        Value::Bool(b) => Ok(("unsigned char", if *b { "1" } else { "0" }.to_string())),
        Value::Int(i) => Ok(("int", int32(key, *i)?)),
        Value::Float(f) => Ok(("float", format!("{}f", single_precision(key, *f)?))),
        Value::Double(d) => Ok(("double", double_precision(key, *d)?)),
        Value::String(s) | Value::Regex(s) => Ok(("char*", c_quote(s))),
        Value::List(_) | Value::Map(_) => Err(unsupported(key, value)),
    }
}

/// Double-quoted C string literal. Control characters become octal escapes
/// and `??` is broken up so no trigraph forms.
pub fn c_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut previous = None;
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '?' if previous == Some('?') => out.push_str("\\?"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
        previous = Some(c);
    }
    out.push('"');
    out
}
