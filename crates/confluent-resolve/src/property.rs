//! Properties as declared in a document, before and after substitution.

use std::sync::LazyLock;

use regex::Regex;

use confluent_core::errors::ResolveError;
use confluent_core::types::Value;

use crate::document::PropertyDecl;

/// Declared type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Bool,
    Int,
    Float,
    Double,
    String,
    Regex,
}

impl PropertyKind {
    pub fn parse(type_name: &str) -> Result<Self, ResolveError> {
        match type_name {
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "string" => Ok(Self::String),
            "regex" => Ok(Self::Regex),
            other => Err(ResolveError::UnknownPropertyType {
                type_name: other.to_string(),
            }),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Double)
    }
}

/// A property in a namespace. The root document's namespace is empty;
/// included documents use their include alias.
///
/// Until substitution has run, bool and numeric properties declared with a
/// text value hold that text as `Value::String`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub namespace: String,
    pub kind: PropertyKind,
    pub value: Value,
    pub hidden: bool,
    pub comment: Option<String>,
    /// Include alias the value was drawn from.
    pub source: Option<String>,
}

static PROPERTY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*$").expect("static pattern"));

impl Property {
    pub fn from_decl(decl: &PropertyDecl, namespace: &str) -> Result<Self, ResolveError> {
        if !PROPERTY_NAME_RE.is_match(&decl.name) {
            return Err(ResolveError::InvalidPropertyName {
                name: decl.name.clone(),
            });
        }
        let kind = PropertyKind::parse(&decl.type_name)?;
        let value = initial_value(&decl.name, kind, &decl.value)?;

        Ok(Self {
            name: decl.name.clone(),
            namespace: namespace.to_string(),
            kind,
            value,
            hidden: decl.hidden,
            comment: decl.comment.clone(),
            source: None,
        })
    }

    /// `name` for the root namespace, `alias.name` otherwise.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// Maps a YAML value onto the declared kind. Text for bool/numeric kinds is
/// kept verbatim and finalized after substitution.
fn initial_value(
    name: &str,
    kind: PropertyKind,
    raw: &serde_yaml::Value,
) -> Result<Value, ResolveError> {
    use serde_yaml::Value as Yaml;

    let value = match (kind, raw) {
        (_, Yaml::Null) => return Err(invalid(name, "missing value")),
        (_, Yaml::Sequence(_) | Yaml::Mapping(_) | Yaml::Tagged(_)) => yaml_to_value(raw),
        (_, Yaml::String(s)) => match kind {
            PropertyKind::Regex => Value::Regex(s.clone()),
            _ => Value::String(s.clone()),
        },

        (PropertyKind::Bool, Yaml::Bool(b)) => Value::Bool(*b),
        (PropertyKind::Bool, Yaml::Number(n)) => Value::Bool(n.as_f64().is_some_and(|f| f != 0.0)),

        (PropertyKind::Int, Yaml::Number(n)) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => return Err(invalid(name, format!("{n} is not an integer"))),
        },
        (PropertyKind::Float | PropertyKind::Double, Yaml::Number(n)) => {
            let f = n
                .as_f64()
                .ok_or_else(|| invalid(name, format!("{n} is not a number")))?;
            if kind == PropertyKind::Float {
                Value::Float(f)
            } else {
                Value::Double(f)
            }
        }
        (PropertyKind::Int | PropertyKind::Float | PropertyKind::Double, Yaml::Bool(_)) => {
            return Err(invalid(name, "a boolean is not a number"))
        }

        (PropertyKind::String, Yaml::Bool(b)) => Value::String(b.to_string()),
        (PropertyKind::String, Yaml::Number(n)) => Value::String(n.to_string()),
        (PropertyKind::Regex, Yaml::Bool(b)) => Value::Regex(b.to_string()),
        (PropertyKind::Regex, Yaml::Number(n)) => Value::Regex(n.to_string()),
    };
    Ok(value)
}

/// Structural conversion used for values no renderer supports.
fn yaml_to_value(raw: &serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match raw {
        Yaml::Null => Value::String(String::new()),
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::List(items.iter().map(yaml_to_value).collect()),
        Yaml::Mapping(map) => Value::Map(
            map.iter()
                .map(|(k, v)| {
                    let key = match k {
                        Yaml::String(s) => s.clone(),
                        other => serde_yaml::to_string(other)
                            .map(|s| s.trim_end().to_string())
                            .unwrap_or_default(),
                    };
                    (key, yaml_to_value(v))
                })
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_value(&tagged.value),
    }
}

/// Lenient boolean spellings accepted in text values.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn invalid(name: &str, message: impl Into<String>) -> ResolveError {
    ResolveError::InvalidValue {
        name: name.to_string(),
        message: message.into(),
    }
}
