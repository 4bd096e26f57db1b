//! Typed property values.

use std::fmt;

/// A resolved property value.
///
/// `List` and `Map` can be carried through resolution (YAML allows them)
/// but no renderer has a rule for them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    /// Single precision in the target language.
    Float(f64),
    /// Double precision in the target language.
    Double(f64),
    String(String),
    /// Rendered like a string by languages without regex literals.
    Regex(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

/// Discriminant of [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Double,
    String,
    Regex,
    List,
    Map,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::String(_) => ValueKind::String,
            Self::Regex(_) => ValueKind::Regex,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Plain-text form used when the value is substituted into another
    /// property. Returns `None` for lists and maps.
    pub fn substitution_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) | Self::Double(f) => Some(decimal_string(*f)),
            Self::String(s) | Self::Regex(s) => Some(s.clone()),
            Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Regex => "regex",
            Self::List => "list",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}

/// Shortest round-trip decimal form that always carries a fractional part
/// (`322.0`, `233.9`). Callers must reject non-finite values first.
pub fn decimal_string(value: f64) -> String {
    let mut s = value.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}
