//! Naming conventions for type, file and property names.
//!
//! Conversion first splits camel/pascal humps with `_`, collapses every run
//! of non-word characters into a single `_`, then joins the words in the
//! requested style.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    Snake,
    ScreamingSnake,
    Camel,
    Pascal,
    Kebab,
}

impl NamingConvention {
    /// Parses the document spelling. Both `kebap` and `kebab` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "snake" => Some(Self::Snake),
            "screaming_snake" => Some(Self::ScreamingSnake),
            "camel" => Some(Self::Camel),
            "pascal" => Some(Self::Pascal),
            "kebap" | "kebab" => Some(Self::Kebab),
            _ => None,
        }
    }

    pub fn convert(self, name: &str) -> String {
        let words = split_words(name);

        match self {
            Self::Snake => words.to_lowercase(),
            Self::ScreamingSnake => words.to_uppercase(),
            Self::Camel => camelize(&words),
            Self::Pascal => {
                let camel = camelize(&words);
                let mut chars = camel.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => camel,
                }
            }
            Self::Kebab => {
                let mut out = String::with_capacity(words.len());
                let mut last_was_separator = false;
                for c in words.chars() {
                    if c == '_' {
                        if !last_was_separator {
                            out.push('-');
                        }
                        last_was_separator = true;
                    } else {
                        out.push(c);
                        last_was_separator = false;
                    }
                }
                out
            }
        }
    }
}

/// `myTest-name` -> `my_test_name`.
fn split_words(name: &str) -> String {
    let mut humps = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            humps.push('_');
            humps.push(c.to_ascii_lowercase());
        } else {
            humps.push(c);
        }
    }

    let mut words = String::with_capacity(humps.len());
    let mut in_separator_run = false;
    for c in humps.trim_start_matches('_').chars() {
        if c.is_alphanumeric() || c == '_' {
            words.push(c);
            in_separator_run = false;
        } else if !in_separator_run {
            words.push('_');
            in_separator_run = true;
        }
    }
    words
}

/// Replaces every `_+x` with `X`. Underscores not followed by an ASCII
/// alphanumeric stay untouched.
fn camelize(words: &str) -> String {
    let chars: Vec<char> = words.chars().collect();
    let mut out = String::with_capacity(words.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '_' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && chars[i] == '_' {
            i += 1;
        }
        match chars.get(i) {
            Some(c) if c.is_ascii_alphanumeric() => {
                out.push(c.to_ascii_uppercase());
                i += 1;
            }
            _ => out.extend(&chars[run_start..i]),
        }
    }
    out
}
