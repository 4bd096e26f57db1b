//! Top-level tool configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::render_config::MAX_INDENT;
use super::{OutputConfig, RenderConfig};
use crate::errors::ConfigError;
use crate::types::CommentStyle;

/// Project config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "confluent.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CONFLUENT_*`)
/// 3. Project config (`confluent.toml` in the working root)
/// 4. User config (`~/.confluent/config.toml`)
/// 5. Compiled defaults
///
/// A document's language block is more specific than all of these and is
/// merged on top by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfluentConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub comment_style: Option<String>,
    pub banner: Option<bool>,
    pub indent: Option<usize>,
    pub output_directory: Option<PathBuf>,
}

impl ConfluentConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        warn!(path = %user_config_path.display(), error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConfluentConfig) -> Result<(), ConfigError> {
        if let Some(ref style) = config.render.comment_style {
            if CommentStyle::parse(style).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "render.comment_style".to_string(),
                    message: format!("'{style}' is neither 'line' nor 'block'"),
                });
            }
        }
        if let Some(indent) = config.render.indent {
            if indent > MAX_INDENT {
                return Err(ConfigError::ValidationFailed {
                    field: "render.indent".to_string(),
                    message: format!("must be at most {MAX_INDENT}"),
                });
            }
        }
        for (field, suffix) in [
            ("render.float_suffix", &config.render.float_suffix),
            ("render.double_suffix", &config.render.double_suffix),
        ] {
            if let Some(suffix) = suffix {
                if !suffix.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must consist of ASCII letters".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.confluent/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".confluent").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ConfluentConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConfluentConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ConfluentConfig, other: &ConfluentConfig) {
        base.render.merge(&other.render);

        if other.output.directory.is_some() {
            base.output.directory = other.output.directory.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONFLUENT_COMMENT_STYLE`, `CONFLUENT_INDENT`, etc.
    /// Malformed values are errors.
    fn apply_env_overrides(config: &mut ConfluentConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CONFLUENT_COMMENT_STYLE") {
            config.render.comment_style = Some(val);
        }
        if let Ok(val) = std::env::var("CONFLUENT_BANNER") {
            let banner = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: "CONFLUENT_BANNER".to_string(),
                message: format!("'{val}' is not a boolean"),
            })?;
            config.render.banner = Some(banner);
        }
        if let Ok(val) = std::env::var("CONFLUENT_INDENT") {
            let indent = val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: "CONFLUENT_INDENT".to_string(),
                message: format!("'{val}' is not a non-negative integer"),
            })?;
            config.render.indent = Some(indent);
        }
        if let Ok(val) = std::env::var("CONFLUENT_OUTPUT_DIR") {
            config.output.directory = Some(PathBuf::from(val));
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ConfluentConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.comment_style {
            config.render.comment_style = Some(v.clone());
        }
        if let Some(v) = cli.banner {
            config.render.banner = Some(v);
        }
        if let Some(v) = cli.indent {
            config.render.indent = Some(v);
        }
        if let Some(ref v) = cli.output_directory {
            config.output.directory = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
