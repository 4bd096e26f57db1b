//! Entries and files handed to a renderer.

use std::path::PathBuf;

use super::Value;

/// One logical configuration key with its resolved value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: Value,
    pub comment: Option<String>,
    /// Alias of the include this value was drawn from, if any.
    pub source: Option<String>,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
            comment: None,
            source: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_source(mut self, alias: impl Into<String>) -> Self {
        self.source = Some(alias.into());
        self
    }
}

/// An include that took part in building a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRef {
    pub alias: String,
    pub path: PathBuf,
}

/// Ordered entries plus the naming metadata for one output file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedFile {
    pub package: String,
    pub type_name: String,
    pub entries: Vec<ConfigEntry>,
    pub includes: Vec<IncludeRef>,
}

impl RenderedFile {
    pub fn new(package: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            type_name: type_name.into(),
            entries: Vec::new(),
            includes: Vec::new(),
        }
    }

    /// Appends an entry. Order of calls is the declaration order.
    pub fn push(&mut self, entry: ConfigEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn has_include(&self, alias: &str) -> bool {
        self.includes.iter().any(|i| i.alias == alias)
    }
}
