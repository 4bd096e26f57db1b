//! End-to-end resolution: YAML document -> generated source.

use std::path::{Path, PathBuf};

use confluent_core::config::ConfluentConfig;
use confluent_core::errors::{ConfluentErrorCode, GenerateError, RenderError, ResolveError};
use confluent_core::types::{CommentStyle, ValueKind};
use confluent_resolve::Generator;

const EXPECTED_JAVA: &str = include_str!("../../confluent-render/tests/fixtures/TestConfig.java");
const EXPECTED_JAVASCRIPT: &str = include_str!("../../confluent-render/tests/fixtures/TEST_CONFIG.js");
const EXPECTED_TYPESCRIPT: &str = include_str!("../../confluent-render/tests/fixtures/test-config.ts");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn generate(yaml: &str) -> Result<Generator, ResolveError> {
    Generator::from_yaml(yaml, "TestConfig", Path::new("."), &ConfluentConfig::default())
}

fn render_single(yaml: &str) -> String {
    let files = generate(yaml).unwrap().render_all().unwrap();
    assert_eq!(files.len(), 1);
    files.into_iter().next().unwrap().contents
}

#[test]
fn test_fixture_document_renders_expected_java() {
    let generator =
        Generator::from_path(&fixture("test-config.yaml"), &ConfluentConfig::default()).unwrap();

    let files = generator.render_all().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "TestConfig.java");
    assert_eq!(files[0].contents, EXPECTED_JAVA);
}

#[test]
fn test_included_values_carry_alias_source() {
    let generator =
        Generator::from_path(&fixture("test-config.yaml"), &ConfluentConfig::default()).unwrap();
    let file = &generator.languages()[0].file;

    let source_of = |key: &str| {
        file.entries
            .iter()
            .find(|e| e.key == key)
            .and_then(|e| e.source.clone())
    };
    assert_eq!(source_of("myIncludedString").as_deref(), Some("incl"));
    assert_eq!(source_of("myCombinedString").as_deref(), Some("incl"));
    assert_eq!(source_of("mySubstitutedString"), None);
    assert!(file.has_include("incl"));
    assert!(file.entries.iter().all(|e| e.key != "myString"));
}

#[test]
fn test_write_creates_java_file() {
    let dir = tempfile::tempdir().unwrap();
    let generator =
        Generator::from_path(&fixture("test-config.yaml"), &ConfluentConfig::default()).unwrap();

    let written = generator.write(dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("TestConfig.java")]);
    let on_disk = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(on_disk, EXPECTED_JAVA);
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let generator =
        Generator::from_path(&fixture("test-config.yaml"), &ConfluentConfig::default()).unwrap();

    let err = generator.write(&missing).unwrap_err();
    assert!(matches!(err, GenerateError::OutputDirectoryMissing { .. }));
    assert_eq!(err.error_code(), "IO_ERROR");
    assert!(!missing.exists());
}

#[test]
fn test_hidden_and_ignored_properties_are_not_exported() {
    let yaml = r#"
languages:
  - language: java
    package: com.example
    banner: false
properties:
  - type: int
    name: base
    value: 20
    hidden: true
  - type: int
    name: doubled
    value: ${base} * 2
  - type: string
    name: skipped
    value: gone
    ignore: true
"#;
    let out = render_single(yaml);
    assert_eq!(
        out,
        "package com.example;\n\npublic class TestConfig {\n    public final static int doubled = 40;\n}\n"
    );
}

#[test]
fn test_ignored_language_produces_nothing() {
    let yaml = r#"
languages:
  - language: java
    package: com.example
    ignore: true
properties:
  - type: bool
    name: flag
    value: false
"#;
    let files = generate(yaml).unwrap().render_all().unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_naming_conventions_apply() {
    let yaml = r#"
languages:
  - language: java
    package: com.example
    banner: false
    file_naming: screaming_snake
    property_naming: screaming_snake
properties:
  - type: int
    name: maxRetries
    value: 3
"#;
    let generator =
        Generator::from_yaml(yaml, "net-config", Path::new("."), &ConfluentConfig::default())
            .unwrap();
    let files = generator.render_all().unwrap();
    assert_eq!(files[0].file_name, "NET_CONFIG.java");
    assert!(files[0].contents.contains("public class NET_CONFIG {"));
    assert!(files[0].contents.contains("public final static int MAX_RETRIES = 3;"));
}

#[test]
fn test_language_block_overrides_tool_config() {
    let yaml = r#"
languages:
  - language: java
    package: com.example
    comment_style: line
properties:
  - type: bool
    name: flag
    value: true
"#;
    let mut config = ConfluentConfig::default();
    config.render.comment_style = Some("block".into());
    config.render.indent = Some(2);

    let generator = Generator::from_yaml(yaml, "Flags", Path::new("."), &config).unwrap();
    let options = &generator.languages()[0].options;
    assert_eq!(options.comment_style, CommentStyle::Line);
    assert_eq!(options.indent, 2);
}

#[test]
fn test_list_value_fails_at_render() {
    let yaml = r#"
languages:
  - language: java
    package: com.example
properties:
  - type: string
    name: hosts
    value: [a, b]
"#;
    let err = generate(yaml).unwrap().render_all().unwrap_err();
    match err {
        GenerateError::Render { file, source } => {
            assert_eq!(file, "TestConfig.java");
            assert_eq!(
                source,
                RenderError::UnsupportedValueKind {
                    key: "hosts".into(),
                    kind: ValueKind::List,
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_language_and_missing_package() {
    let unknown = r#"
languages:
  - language: cobol
    package: x
properties: []
"#;
    assert!(matches!(
        generate(unknown).unwrap_err(),
        ResolveError::UnknownLanguage { language } if language == "cobol"
    ));

    let no_package = r#"
languages:
  - language: java
properties: []
"#;
    assert!(matches!(
        generate(no_package).unwrap_err(),
        ResolveError::MissingPackage { .. }
    ));
}

#[test]
fn test_unknown_naming_convention() {
    let yaml = r#"
languages:
  - language: java
    package: x
    type_naming: title
properties: []
"#;
    assert!(matches!(
        generate(yaml).unwrap_err(),
        ResolveError::UnknownNamingConvention { convention } if convention == "title"
    ));
}

#[test]
fn test_alias_reuse_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.yaml"),
        "properties:\n  - type: int\n    name: x\n    value: 1\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("b.yaml"),
        "properties:\n  - type: int\n    name: y\n    value: 2\n",
    )
    .unwrap();
    let root = dir.path().join("root.yaml");
    std::fs::write(
        &root,
        "includes:\n  - path: a.yaml\n    as: shared\n  - path: b.yaml\n    as: shared\nproperties: []\n",
    )
    .unwrap();

    let err = Generator::from_path(&root, &ConfluentConfig::default()).unwrap_err();
    assert!(matches!(err, ResolveError::AliasAlreadyInUse { alias } if alias == "shared"));
}

#[test]
fn test_missing_include_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root.yaml");
    std::fs::write(
        &root,
        "includes:\n  - path: absent.yaml\n    as: gone\nproperties: []\n",
    )
    .unwrap();

    let err = Generator::from_path(&root, &ConfluentConfig::default()).unwrap_err();
    assert!(matches!(err, ResolveError::MissingInclude { .. }));
    assert_eq!(err.error_code(), "MISSING_INCLUDE");
}

#[test]
fn test_include_cycle_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.yaml"),
        "includes:\n  - path: b.yaml\n    as: b\nproperties: []\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("b.yaml"),
        "includes:\n  - path: a.yaml\n    as: a\nproperties: []\n",
    )
    .unwrap();

    let err = Generator::from_path(&dir.path().join("a.yaml"), &ConfluentConfig::default())
        .unwrap_err();
    assert!(matches!(err, ResolveError::IncludeCycle { .. }));
}

#[test]
fn test_duplicate_property_is_rejected() {
    let yaml = r#"
properties:
  - type: int
    name: x
    value: 1
  - type: int
    name: x
    value: 2
"#;
    assert!(matches!(
        generate(yaml).unwrap_err(),
        ResolveError::DuplicateProperty { name } if name == "x"
    ));
}

#[test]
fn test_same_name_in_include_and_root_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("inc.yaml"),
        "properties:\n  - type: string\n    name: name\n    value: inner\n",
    )
    .unwrap();
    let root = dir.path().join("app.yaml");
    std::fs::write(
        &root,
        r#"includes:
  - path: inc.yaml
    as: inc
languages:
  - language: java
    package: com.example
    banner: false
properties:
  - type: string
    name: name
    value: outer and ${inc.name}
"#,
    )
    .unwrap();

    let files = Generator::from_path(&root, &ConfluentConfig::default())
        .unwrap()
        .render_all()
        .unwrap();
    assert_eq!(files[0].file_name, "App.java");
    assert!(files[0]
        .contents
        .contains("public final static String name = \"outer and inner\";"));
}

#[test]
fn test_long_reference_chain_fails_cleanly() {
    let mut yaml = String::from("properties:\n");
    for i in 0..1000 {
        yaml.push_str(&format!(
            "  - type: string\n    name: p{i}\n    value: '${{p{}}}'\n",
            i + 1
        ));
    }
    yaml.push_str("  - type: string\n    name: p1000\n    value: end\n");

    let err = generate(&yaml).unwrap_err();
    assert!(matches!(err, ResolveError::ReferenceTooDeep { .. }));
    assert_eq!(err.error_code(), "SUBSTITUTION_ERROR");
}

#[test]
fn test_every_language_from_one_document() {
    let generator = Generator::from_path(
        &fixture("languages/test-config.yaml"),
        &ConfluentConfig::default(),
    )
    .unwrap();
    let files = generator.render_all().unwrap();

    let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "TestConfig.java",
            "TEST_CONFIG.js",
            "test-config.ts",
            "test_config.py",
            "test_config.go",
            "test_config.h",
        ]
    );
    assert_eq!(files[0].contents, EXPECTED_JAVA);
    assert_eq!(files[1].contents, EXPECTED_JAVASCRIPT);
    assert_eq!(files[2].contents, EXPECTED_TYPESCRIPT);
    assert!(files[3]
        .contents
        .contains("    myCombinedFloat = 45724.0\n"));
    assert!(files[4].contents.starts_with("package myconfig\n\n"));
    assert!(files[5]
        .contents
        .contains("    char* myRegex; /* Just another RegEx. */\n"));
}

#[test]
fn test_package_only_required_where_the_language_has_one() {
    let yaml = |language: &str| {
        format!(
            "languages:\n  - language: {language}\n    banner: false\nproperties:\n  - type: int\n    name: x\n    value: 1\n"
        )
    };

    for language in ["javascript", "typescript", "python", "c"] {
        assert!(generate(&yaml(language)).is_ok(), "{language}");
    }
    assert!(matches!(
        generate(&yaml("go")).unwrap_err(),
        ResolveError::MissingPackage { language } if language == "go"
    ));
}

#[test]
fn test_file_naming_leaves_non_java_type_names_alone() {
    let yaml = r#"
languages:
  - language: typescript
    banner: false
    file_naming: snake
properties:
  - type: int
    name: retries
    value: 3
"#;
    let files = generate(yaml).unwrap().render_all().unwrap();
    assert_eq!(files[0].file_name, "test_config.ts");
    assert_eq!(
        files[0].contents,
        "export class TestConfig {\n    public static readonly retries = 3;\n}\n"
    );
}

#[test]
fn test_invalid_go_package_fails_at_render() {
    let yaml = r#"
languages:
  - language: go
    package: my.config
properties:
  - type: int
    name: x
    value: 1
"#;
    let err = generate(yaml).unwrap().render_all().unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Render { ref file, source: RenderError::InvalidPackage { .. } }
            if file == "test_config.go"
    ));
}
