//! Tests for the layered tool configuration.

use std::sync::Mutex;

use confluent_core::config::{CliOverrides, ConfluentConfig};
use confluent_core::errors::{ConfigError, ConfluentErrorCode};
use confluent_core::types::CommentStyle;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Points the home directory at an empty tempdir so a real
/// `~/.confluent/config.toml` never leaks into a test.
fn isolate_home() -> tempfile::TempDir {
    let home = tempdir();
    std::env::set_var("HOME", home.path());
    std::env::set_var("USERPROFILE", home.path());
    home
}

/// Clear all CONFLUENT_ env vars to prevent cross-test contamination.
fn clear_confluent_env_vars() {
    for key in [
        "CONFLUENT_COMMENT_STYLE",
        "CONFLUENT_BANNER",
        "CONFLUENT_INDENT",
        "CONFLUENT_OUTPUT_DIR",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_confluent_env_vars();
    let _home = isolate_home();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("confluent.toml"),
        r#"
[render]
comment_style = "block"
indent = 2
banner = true

[output]
directory = "generated"
"#,
    )
    .unwrap();

    std::env::set_var("CONFLUENT_INDENT", "6");

    let cli = CliOverrides {
        banner: Some(false),
        ..Default::default()
    };
    let config = ConfluentConfig::load(dir.path(), Some(&cli)).unwrap();

    // Project file
    assert_eq!(config.render.effective_comment_style(), CommentStyle::Block);
    // Env beats project
    assert_eq!(config.render.effective_indent(), 6);
    // CLI beats project
    assert!(!config.render.effective_banner());
    assert_eq!(
        config.output.effective_directory(),
        std::path::PathBuf::from("generated")
    );

    clear_confluent_env_vars();
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_confluent_env_vars();
    let _home = isolate_home();

    let dir = tempdir();
    let config = ConfluentConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.render.effective_indent(), 4);
    assert_eq!(config.render.effective_float_suffix(), "f");
    assert_eq!(config.render.effective_double_suffix(), "d");
}

#[test]
fn test_user_config_is_lowest_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_confluent_env_vars();
    let home = isolate_home();

    let user_dir = home.path().join(".confluent");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[render]\nbanner = false\nindent = 8\n",
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(dir.path().join("confluent.toml"), "[render]\nindent = 2\n").unwrap();

    let config = ConfluentConfig::load(dir.path(), None).unwrap();
    assert!(!config.render.effective_banner());
    assert_eq!(config.render.effective_indent(), 2);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_confluent_env_vars();
    let _home = isolate_home();

    let dir = tempdir();
    std::fs::write(dir.path().join("confluent.toml"), "[render\nindent = ").unwrap();

    match ConfluentConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_unknown_comment_style_fails_validation() {
    let config = ConfluentConfig::from_toml("[render]\ncomment_style = \"hash\"\n").unwrap();
    let err = ConfluentConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "render.comment_style"));
    assert!(err.coded_string().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn test_indent_upper_bound() {
    let config = ConfluentConfig::from_toml("[render]\nindent = 40\n").unwrap();
    assert!(ConfluentConfig::validate(&config).is_err());
}

#[test]
fn test_suffix_must_be_letters() {
    let config = ConfluentConfig::from_toml("[render]\nfloat_suffix = \"1\"\n").unwrap();
    assert!(ConfluentConfig::validate(&config).is_err());
}

#[test]
fn test_malformed_env_value_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_confluent_env_vars();
    let _home = isolate_home();

    let dir = tempdir();
    std::env::set_var("CONFLUENT_BANNER", "maybe");
    let result = ConfluentConfig::load(dir.path(), None);
    clear_confluent_env_vars();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_toml_round_trip() {
    let config = ConfluentConfig::from_toml(
        "[render]\ncomment_style = \"line\"\nfloat_suffix = \"F\"\n",
    )
    .unwrap();
    let serialized = config.to_toml().unwrap();
    let reparsed = ConfluentConfig::from_toml(&serialized).unwrap();
    assert_eq!(config, reparsed);
}
