//! Supported target languages.

use std::fmt;

use confluent_core::types::NamingConvention;

use crate::c::CRenderer;
use crate::go::GoRenderer;
use crate::java::JavaRenderer;
use crate::javascript::JavaScriptRenderer;
use crate::options::RenderOptions;
use crate::python::PythonRenderer;
use crate::renderer::Renderer;
use crate::typescript::TypeScriptRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    JavaScript,
    TypeScript,
    Python,
    Go,
    C,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Self::Java,
        Self::JavaScript,
        Self::TypeScript,
        Self::Python,
        Self::Go,
        Self::C,
    ];

    /// Parses a `language:` value. Common short forms are accepted.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "java" => Some(Self::Java),
            "javascript" | "js" => Some(Self::JavaScript),
            "typescript" | "ts" => Some(Self::TypeScript),
            "python" | "py" => Some(Self::Python),
            "go" | "golang" => Some(Self::Go),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Go => "go",
            Self::C => "c",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
            Self::Python => "py",
            Self::Go => "go",
            Self::C => "h",
        }
    }

    /// Convention for the file name when the document names none. Java files
    /// are always named after their class.
    pub fn default_file_naming(self) -> NamingConvention {
        match self {
            Self::Java => NamingConvention::Pascal,
            Self::JavaScript | Self::TypeScript => NamingConvention::Kebab,
            Self::Python | Self::Go | Self::C => NamingConvention::Snake,
        }
    }

    /// Whether the language block must name a package.
    pub fn requires_package(self) -> bool {
        matches!(self, Self::Java | Self::Go)
    }

    /// `<stem>.<extension>`
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }

    pub fn renderer(self, options: RenderOptions) -> Box<dyn Renderer> {
        match self {
            Self::Java => Box::new(JavaRenderer::new(options)),
            Self::JavaScript => Box::new(JavaScriptRenderer::new(options)),
            Self::TypeScript => Box::new(TypeScriptRenderer::new(options)),
            Self::Python => Box::new(PythonRenderer::new(options)),
            Self::Go => Box::new(GoRenderer::new(options)),
            Self::C => Box::new(CRenderer::new(options)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_short_forms() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.name()), Some(language));
        }
        assert_eq!(Language::parse(" JS "), Some(Language::JavaScript));
        assert_eq!(Language::parse("ts"), Some(Language::TypeScript));
        assert_eq!(Language::parse("py"), Some(Language::Python));
        assert_eq!(Language::parse("golang"), Some(Language::Go));
        assert_eq!(Language::parse("cobol"), None);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Language::Java.file_name("TestConfig"), "TestConfig.java");
        assert_eq!(Language::JavaScript.file_name("TEST_CONFIG"), "TEST_CONFIG.js");
        assert_eq!(Language::C.file_name("test_config"), "test_config.h");
    }

    #[test]
    fn test_default_file_naming() {
        let stem = "TestConfig";
        let name = |language: Language| language.default_file_naming().convert(stem);
        assert_eq!(name(Language::JavaScript), "test-config");
        assert_eq!(name(Language::TypeScript), "test-config");
        assert_eq!(name(Language::Python), "test_config");
        assert_eq!(name(Language::Go), "test_config");
        assert_eq!(name(Language::C), "test_config");
    }

    #[test]
    fn test_packages_required_for_java_and_go() {
        let requiring: Vec<_> = Language::ALL
            .into_iter()
            .filter(|l| l.requires_package())
            .collect();
        assert_eq!(requiring, vec![Language::Java, Language::Go]);
    }

    #[test]
    fn test_renderer_reports_its_language() {
        for language in Language::ALL {
            assert_eq!(language.renderer(RenderOptions::default()).language(), language);
        }
    }
}
