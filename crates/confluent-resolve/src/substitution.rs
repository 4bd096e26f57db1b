//! `${name}` / `${alias.name}` expansion.
//!
//! References are resolved depth-first, so a property may reference another
//! property that itself still contains references, regardless of declaration
//! order. After expansion, bool and numeric properties are finalized from
//! their text.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::trace;

use confluent_core::errors::ResolveError;
use confluent_core::types::Value;

use crate::expression;
use crate::property::{invalid, parse_bool, Property, PropertyKind};

/// Longest chain of nested references followed from a single property.
pub const MAX_REFERENCE_DEPTH: usize = 200;

static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(?:(\w+)\.)?(\w+)\}").expect("static pattern"));

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Visiting,
    Done,
}

/// Expands every reference in `properties` in place and finalizes typed
/// values. Hidden properties take part; removing them is up to the caller.
pub fn substitute(properties: &mut [Property]) -> Result<(), ResolveError> {
    let index: FxHashMap<(String, String), usize> = properties
        .iter()
        .enumerate()
        .map(|(i, p)| ((p.namespace.clone(), p.name.clone()), i))
        .collect();

    let len = properties.len();
    let mut substitutor = Substitutor {
        properties,
        index,
        state: vec![State::Pending; len],
        stack: Vec::new(),
    };

    for i in 0..len {
        substitutor.resolve(i)?;
    }
    Ok(())
}

struct Substitutor<'a> {
    properties: &'a mut [Property],
    index: FxHashMap<(String, String), usize>,
    state: Vec<State>,
    stack: Vec<usize>,
}

impl Substitutor<'_> {
    fn resolve(&mut self, i: usize) -> Result<(), ResolveError> {
        match self.state[i] {
            State::Done => return Ok(()),
            State::Visiting => {
                let start = self.stack.iter().position(|&s| s == i).unwrap_or(0);
                let mut chain: Vec<String> = self.stack[start..]
                    .iter()
                    .map(|&s| self.properties[s].qualified_name())
                    .collect();
                chain.push(self.properties[i].qualified_name());
                return Err(ResolveError::SubstitutionCycle { chain });
            }
            State::Pending => {}
        }
        if self.stack.len() >= MAX_REFERENCE_DEPTH {
            let root = self.stack.first().copied().unwrap_or(i);
            return Err(ResolveError::ReferenceTooDeep {
                name: self.properties[root].qualified_name(),
                limit: MAX_REFERENCE_DEPTH,
            });
        }

        self.state[i] = State::Visiting;
        self.stack.push(i);

        if let Some(text) = text_of(&self.properties[i].value) {
            let expanded = self.expand(i, &text)?;
            let property = &mut self.properties[i];
            property.value = finalize(property, expanded)?;
        }

        self.stack.pop();
        self.state[i] = State::Done;
        Ok(())
    }

    fn expand(&mut self, i: usize, text: &str) -> Result<String, ResolveError> {
        let pattern = &*REFERENCE_RE;
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let alias = caps.get(1).map(|m| m.as_str());
            let name = caps.get(2).map_or("", |m| m.as_str());

            let current = &self.properties[i];
            let namespace = alias.unwrap_or(current.namespace.as_str()).to_string();
            if namespace == current.namespace && name == current.name {
                return Err(ResolveError::SelfReference {
                    name: current.qualified_name(),
                });
            }

            let key = (namespace, name.to_string());
            let Some(&target) = self.index.get(&key) else {
                return Err(ResolveError::UnknownSubstitution {
                    name: self.properties[i].qualified_name(),
                    reference: match alias {
                        Some(a) => format!("{a}.{name}"),
                        None => name.to_string(),
                    },
                });
            };

            self.resolve(target)?;

            let replacement = self.properties[target].value.substitution_text().ok_or_else(|| {
                invalid(
                    &self.properties[i].qualified_name(),
                    format!("{} cannot be substituted", self.properties[target].qualified_name()),
                )
            })?;

            let source = match alias {
                Some(a) if a != self.properties[i].namespace => Some(a.to_string()),
                _ => self.properties[target].source.clone(),
            };
            if self.properties[i].source.is_none() {
                self.properties[i].source = source;
            }

            trace!(
                property = %self.properties[i].qualified_name(),
                reference = %self.properties[target].qualified_name(),
                "substituted reference"
            );

            out.push_str(&text[last..whole.start()]);
            out.push_str(&replacement);
            last = whole.end();
        }

        out.push_str(&text[last..]);
        Ok(out)
    }
}

/// Text still subject to expansion.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) | Value::Regex(s) => Some(s.clone()),
        _ => None,
    }
}

/// Turns expanded text into the property's declared kind.
fn finalize(property: &Property, text: String) -> Result<Value, ResolveError> {
    let name = property.qualified_name();
    match property.kind {
        PropertyKind::String => Ok(Value::String(text)),
        PropertyKind::Regex => Ok(Value::Regex(text)),
        PropertyKind::Bool => parse_bool(&text)
            .map(Value::Bool)
            .ok_or_else(|| invalid(&name, format!("'{text}' is not a boolean"))),
        PropertyKind::Int | PropertyKind::Float | PropertyKind::Double => {
            let number = expression::evaluate(&text).map_err(|message| {
                ResolveError::InvalidExpression {
                    name: name.clone(),
                    message: format!("{message} in '{text}'"),
                }
            })?;
            match property.kind {
                PropertyKind::Int => {
                    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
                        return Err(invalid(&name, format!("{number} is not an integer")));
                    }
                    Ok(Value::Int(number as i64))
                }
                PropertyKind::Float => Ok(Value::Float(number)),
                _ => Ok(Value::Double(number)),
            }
        }
    }
}
