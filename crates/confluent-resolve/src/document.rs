//! Serde model of the YAML config document.

use serde::Deserialize;

use confluent_core::config::RenderConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub includes: Vec<IncludeDecl>,
    #[serde(default)]
    pub languages: Vec<LanguageDecl>,
    pub properties: Vec<PropertyDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncludeDecl {
    pub path: String,
    #[serde(rename = "as")]
    pub alias: String,
    #[serde(default)]
    pub ignore: bool,
}

/// One output language. Formatting keys (`comment_style`, `banner`,
/// `indent`, ...) share their names with `[render]` in `confluent.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageDecl {
    pub language: String,
    pub package: Option<String>,
    pub file_naming: Option<String>,
    pub type_naming: Option<String>,
    pub property_naming: Option<String>,
    #[serde(default)]
    pub ignore: bool,
    #[serde(flatten)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDecl {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub value: serde_yaml::Value,
    #[serde(default)]
    pub hidden: bool,
    pub comment: Option<String>,
    #[serde(default)]
    pub ignore: bool,
}

impl Document {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let doc = Document::from_yaml(
            r#"
includes:
  - path: other.yaml
    as: other
languages:
  - language: java
    package: my.pkg
    comment_style: block
    banner: false
    indent: 2
properties:
  - type: int
    name: answer
    value: 42
    comment: The answer.
"#,
        )
        .unwrap();

        assert_eq!(doc.includes[0].alias, "other");
        let java = &doc.languages[0];
        assert_eq!(java.package.as_deref(), Some("my.pkg"));
        assert_eq!(java.render.comment_style.as_deref(), Some("block"));
        assert_eq!(java.render.banner, Some(false));
        assert_eq!(java.render.indent, Some(2));
        assert_eq!(doc.properties[0].comment.as_deref(), Some("The answer."));
        assert!(!doc.properties[0].hidden);
    }

    #[test]
    fn test_properties_are_required() {
        assert!(Document::from_yaml("languages: []\n").is_err());
    }
}
