//! Output location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory generated files are written to. Default: current directory.
    pub directory: Option<PathBuf>,
}

impl OutputConfig {
    pub fn effective_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
