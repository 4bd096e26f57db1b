//! # confluent-resolve
//!
//! Everything between a YAML config document and rendered source files:
//! document schema, include loading, `${...}` substitution with arithmetic
//! for numeric properties, language resolution and writing output.

pub mod document;
pub mod expression;
pub mod generator;
pub mod language;
pub mod loader;
pub mod property;
pub mod substitution;

pub use generator::{GeneratedFile, Generator};
pub use language::ResolvedLanguage;
pub use loader::{DocumentLoader, LoadedDocument};
pub use property::{Property, PropertyKind};
