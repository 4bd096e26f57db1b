//! Java constant-class renderer.

use tracing::debug;

use confluent_core::errors::RenderError;
use confluent_core::types::{ConfigEntry, RenderedFile, Value};

use crate::language::Language;
use crate::literal::{
    banner_line, comment, defuse_unicode_escapes, double_precision, int32, quote,
    single_precision, unsupported,
};
use crate::options::RenderOptions;
use crate::renderer::Renderer;
use crate::validate::{is_java_package, validate_file, IdentifierRules};

/// Renders a [`RenderedFile`] as
///
/// ```text
/// package my.test.package;
///
/// // Generated with confluent v0.1.1 (https://pypi.org/project/confluent/).
/// public class TestConfig {
///     public final static boolean myBoolean = true;
/// }
/// ```
pub struct JavaRenderer {
    options: RenderOptions,
}

impl JavaRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn declaration(&self, entry: &ConfigEntry) -> Result<String, RenderError> {
        let (java_type, literal) = java_literal(
            &entry.key,
            &entry.value,
            &self.options.float_suffix,
            &self.options.double_suffix,
        )?;

        let mut line = format!("public final static {java_type} {} = {literal};", entry.key);
        if let Some(ref text) = entry.comment {
            line.push_str(&comment(self.options.comment_style, &defuse_unicode_escapes(text)));
        }
        Ok(line)
    }
}

impl Renderer for JavaRenderer {
    fn language(&self) -> Language {
        Language::Java
    }

    fn render(&self, file: &RenderedFile) -> Result<String, RenderError> {
        if !is_java_package(&file.package) {
            return Err(RenderError::InvalidPackage {
                package: file.package.clone(),
            });
        }
        validate_file(file, &IdentifierRules::JAVA)?;

        let declarations = file
            .entries
            .iter()
            .map(|entry| self.declaration(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let indent = " ".repeat(self.options.indent);
        let mut out = String::new();
        out.push_str(&format!("package {};\n\n", file.package));

        if self.options.include_generator_banner {
            let text = defuse_unicode_escapes(&self.options.banner_text);
            out.push_str(&banner_line(self.options.comment_style, &text));
            out.push('\n');
        }

        out.push_str(&format!("public class {} {{\n", file.type_name));
        for declaration in &declarations {
            out.push_str(&indent);
            out.push_str(declaration);
            out.push('\n');
        }
        out.push_str("}\n");

        debug!(
            type_name = %file.type_name,
            entries = declarations.len(),
            comment_style = %self.options.comment_style,
            "rendered java class"
        );
        Ok(out)
    }
}

impl Default for JavaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Java type name and literal text for a value.
pub fn java_literal(
    key: &str,
    value: &Value,
    float_suffix: &str,
    double_suffix: &str,
) -> Result<(&'static str, String), RenderError> {
    match value {
        Value::Bool(b) => Ok(("boolean", b.to_string())),
        Value::Int(i) => Ok(("int", int32(key, *i)?)),
        Value::Float(f) => {
            let text = single_precision(key, *f)?;
            Ok(("float", format!("{text}{float_suffix}")))
        }
        Value::Double(d) => {
            let text = double_precision(key, *d)?;
            Ok(("double", format!("{text}{double_suffix}")))
        }
        Value::String(s) | Value::Regex(s) => Ok(("String", quote(s))),
        Value::List(_) | Value::Map(_) => Err(unsupported(key, value)),
    }
}
