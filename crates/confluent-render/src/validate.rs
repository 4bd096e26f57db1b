//! Identifier and file-level validation.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use confluent_core::errors::RenderError;
use confluent_core::types::RenderedFile;

/// Java keywords plus the `true`, `false` and `null` literals.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Strict-mode ECMAScript reserved words.
const JAVASCRIPT_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// ECMAScript reserved words plus the predefined type names a class cannot take.
const TYPESCRIPT_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "any", "bigint",
    "boolean", "never", "number", "object", "string", "symbol", "undefined", "unknown",
];

const PYTHON_RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

const GO_RESERVED: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var", "_",
];

/// C23 keywords, including the underscore spellings of earlier standards.
const C_RESERVED: &[&str] = &[
    "alignas", "alignof", "auto", "bool", "break", "case", "char", "const", "constexpr",
    "continue", "default", "do", "double", "else", "enum", "extern", "false", "float", "for",
    "goto", "if", "inline", "int", "long", "nullptr", "register", "restrict", "return", "short",
    "signed", "sizeof", "static", "static_assert", "struct", "switch", "thread_local", "true",
    "typedef", "typeof", "typeof_unqual", "union", "unsigned", "void", "volatile", "while",
    "_Alignas", "_Alignof", "_Atomic", "_BitInt", "_Bool", "_Complex", "_Decimal128",
    "_Decimal32", "_Decimal64", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

static GO_PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]+$").expect("static pattern"));

/// Identifier rules of one target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierRules {
    /// `$` may appear anywhere in an identifier.
    pub allow_dollar: bool,
    /// Words that name neither the type nor a key.
    pub reserved: &'static [&'static str],
    /// Words that may name the type but no key.
    pub reserved_keys: &'static [&'static str],
    /// Keys starting with `__`, or starting and ending with `_`, are taken by
    /// Python's enum machinery.
    pub enum_member_keys: bool,
}

impl IdentifierRules {
    pub const JAVA: Self = Self {
        allow_dollar: true,
        reserved: JAVA_RESERVED,
        reserved_keys: &[],
        enum_member_keys: false,
    };

    pub const JAVASCRIPT: Self = Self {
        allow_dollar: true,
        reserved: JAVASCRIPT_RESERVED,
        reserved_keys: &["prototype"],
        enum_member_keys: false,
    };

    pub const TYPESCRIPT: Self = Self {
        allow_dollar: true,
        reserved: TYPESCRIPT_RESERVED,
        reserved_keys: &["arguments", "caller", "length", "name", "prototype"],
        enum_member_keys: false,
    };

    pub const PYTHON: Self = Self {
        allow_dollar: false,
        reserved: PYTHON_RESERVED,
        reserved_keys: &[],
        enum_member_keys: true,
    };

    pub const GO: Self = Self {
        allow_dollar: false,
        reserved: GO_RESERVED,
        reserved_keys: &[],
        enum_member_keys: false,
    };

    pub const C: Self = Self {
        allow_dollar: false,
        reserved: C_RESERVED,
        reserved_keys: &[],
        enum_member_keys: false,
    };

    /// ASCII identifier that is not a reserved word.
    pub fn is_identifier(&self, name: &str) -> bool {
        has_identifier_syntax(name, self.allow_dollar) && !self.reserved.contains(&name)
    }

    pub fn is_key(&self, name: &str) -> bool {
        self.is_identifier(name)
            && !self.reserved_keys.contains(&name)
            && !(self.enum_member_keys && is_enum_internal(name))
    }
}

/// `__private` and `_sunder_` names never become enum members.
fn is_enum_internal(name: &str) -> bool {
    name.starts_with("__") || (name.len() > 1 && name.starts_with('_') && name.ends_with('_'))
}

pub fn is_java_identifier(name: &str) -> bool {
    IdentifierRules::JAVA.is_identifier(name)
}

/// Dotted package name, e.g. `my.test.package`.
/// Segments are checked for syntax only.
pub fn is_java_package(package: &str) -> bool {
    !package.is_empty() && package.split('.').all(|segment| has_identifier_syntax(segment, true))
}

/// Short lower-case package name, e.g. `myconfig`.
pub fn is_go_package(package: &str) -> bool {
    GO_PACKAGE_RE.is_match(package) && !GO_RESERVED.contains(&package)
}

fn has_identifier_syntax(name: &str, allow_dollar: bool) -> bool {
    let is_extra = |c: char| c == '_' || (allow_dollar && c == '$');
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || is_extra(first))
        && chars.all(|c| c.is_ascii_alphanumeric() || is_extra(c))
}

/// Checks the type name, key uniqueness and provenance of a file under the
/// given identifier rules. Packages are checked by the renderers that emit
/// one; value kinds are checked while formatting literals.
pub fn validate_file(file: &RenderedFile, rules: &IdentifierRules) -> Result<(), RenderError> {
    if !rules.is_identifier(&file.type_name) {
        return Err(RenderError::InvalidTypeName {
            name: file.type_name.clone(),
        });
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for entry in &file.entries {
        if !rules.is_key(&entry.key) {
            return Err(RenderError::InvalidKey {
                key: entry.key.clone(),
            });
        }
        if !seen.insert(entry.key.as_str()) {
            return Err(RenderError::DuplicateKey {
                key: entry.key.clone(),
            });
        }
        if let Some(ref alias) = entry.source {
            if !file.has_include(alias) {
                return Err(RenderError::MissingInclude {
                    key: entry.key.clone(),
                    alias: alias.clone(),
                });
            }
        }
    }
    Ok(())
}
