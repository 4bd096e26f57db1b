//! Go anonymous-struct renderer.

use tracing::debug;

use confluent_core::errors::RenderError;
use confluent_core::types::{RenderedFile, Value};

use crate::language::Language;
use crate::literal::{banner_line, comment, double_precision, quote, unsupported};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::validate::{is_go_package, validate_file, IdentifierRules};

/// Renders a [`RenderedFile`] as a package-level variable of an anonymous
/// struct type, with field names and values aligned:
///
/// ```text
/// package myconfig
///
/// // Generated with confluent v0.1.1 (https://pypi.org/project/confluent/).
/// var TestConfig = struct {
///     myBoolean bool
///     myInteger int
/// }{
///     myBoolean: true,
///     myInteger: 142,
/// }
/// ```
pub struct GoRenderer {
    options: RenderOptions,
}

struct Field<'a> {
    name: &'a str,
    go_type: &'static str,
    literal: String,
    comment: Option<String>,
}

impl GoRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Renderer for GoRenderer {
    fn language(&self) -> Language {
        Language::Go
    }

    fn render(&self, file: &RenderedFile) -> Result<String, RenderError> {
        if !is_go_package(&file.package) {
            return Err(RenderError::InvalidPackage {
                package: file.package.clone(),
            });
        }
        validate_file(file, &IdentifierRules::GO)?;

        let fields = file
            .entries
            .iter()
            .map(|entry| -> Result<Field, RenderError> {
                let (go_type, literal) = go_literal(&entry.key, &entry.value)?;
                Ok(Field {
                    name: &entry.key,
                    go_type,
                    literal,
                    comment: entry
                        .comment
                        .as_deref()
                        .map(|text| comment(self.options.comment_style, text)),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        let indent = " ".repeat(self.options.indent);
        let mut out = format!("package {}\n\n", file.package);

        if self.options.include_generator_banner {
            out.push_str(&banner_line(self.options.comment_style, &self.options.banner_text));
            out.push('\n');
        }

        out.push_str(&format!("var {} = struct {{\n", file.type_name));
        for field in &fields {
            out.push_str(&format!("{indent}{:<width$} {}", field.name, field.go_type));
            if let Some(ref text) = field.comment {
                out.push_str(text);
            }
            out.push('\n');
        }
        out.push_str("}{\n");
        for field in &fields {
            let padding = " ".repeat(width - field.name.len());
            out.push_str(&format!("{indent}{}:{padding} {},\n", field.name, field.literal));
        }
        out.push_str("}\n");

        debug!(
            type_name = %file.type_name,
            package = %file.package,
            entries = fields.len(),
            "rendered go struct"
        );
        Ok(out)
    }
}

impl Default for GoRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Go field type and literal text for a value. Both float kinds map to
/// `float64`.
pub fn go_literal(key: &str, value: &Value) -> Result<(&'static str, String), RenderError> {
    match value {
        Value::Bool(b) => Ok(("bool", b.to_string())),
        Value::Int(i) => Ok(("int", i.to_string())),
        Value::Float(f) | Value::Double(f) => Ok(("float64", double_precision(key, *f)?)),
        Value::String(s) | Value::Regex(s) => Ok(("string", quote(s))),
        Value::List(_) | Value::Map(_) => Err(unsupported(key, value)),
    }
}
