//! Reads a document and, recursively, its includes.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::debug;

use confluent_core::errors::ResolveError;
use confluent_core::types::IncludeRef;

use crate::document::{Document, IncludeDecl, LanguageDecl};
use crate::property::Property;

/// A root document with all of its includes read, before substitution.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Base name for generated types and files (the file stem of the root
    /// document, e.g. `test-config`).
    pub config_name: String,
    pub languages: Vec<LanguageDecl>,
    /// Properties of every namespace. Included ones are hidden.
    pub properties: Vec<Property>,
    pub includes: Vec<IncludeRef>,
}

/// Include aliases are global across the whole include tree.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    aliases: FxHashSet<String>,
    stack: Vec<PathBuf>,
    includes: Vec<IncludeRef>,
}

impl DocumentLoader {
    /// Loads a document from disk. Relative include paths are resolved
    /// against the document's directory.
    pub fn load_path(path: &Path) -> Result<LoadedDocument, ResolveError> {
        let config_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .ok_or(ResolveError::MissingConfigName)?;
        let content = read(path)?;
        let base_dir = parent_dir(path);

        let mut loader = Self::default();
        loader.stack.push(canonical(path));
        let (languages, properties) =
            loader.parse(&content, &path.display().to_string(), "", &base_dir)?;

        Ok(LoadedDocument {
            config_name,
            languages,
            properties,
            includes: loader.includes,
        })
    }

    /// Loads a document from a string.
    pub fn load_str(
        content: &str,
        config_name: &str,
        base_dir: &Path,
    ) -> Result<LoadedDocument, ResolveError> {
        if config_name.trim().is_empty() {
            return Err(ResolveError::MissingConfigName);
        }

        let mut loader = Self::default();
        let (languages, properties) = loader.parse(content, "<string>", "", base_dir)?;

        Ok(LoadedDocument {
            config_name: config_name.to_string(),
            languages,
            properties,
            includes: loader.includes,
        })
    }

    fn parse(
        &mut self,
        content: &str,
        origin: &str,
        namespace: &str,
        base_dir: &Path,
    ) -> Result<(Vec<LanguageDecl>, Vec<Property>), ResolveError> {
        let document = Document::from_yaml(content).map_err(|e| ResolveError::Yaml {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        let mut properties = Vec::new();
        for include in document.includes.iter().filter(|i| !i.ignore) {
            properties.extend(self.include(include, base_dir)?);
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for decl in document.properties.iter().filter(|p| !p.ignore) {
            let property = Property::from_decl(decl, namespace)?;
            if !seen.insert(decl.name.as_str()) {
                return Err(ResolveError::DuplicateProperty {
                    name: property.qualified_name(),
                });
            }
            properties.push(property);
        }

        Ok((document.languages, properties))
    }

    fn include(
        &mut self,
        include: &IncludeDecl,
        base_dir: &Path,
    ) -> Result<Vec<Property>, ResolveError> {
        let alias = include.alias.as_str();
        if alias.is_empty() || !alias.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ResolveError::InvalidValue {
                name: format!("includes[{}].as", include.path),
                message: format!("'{alias}' is not a valid alias"),
            });
        }
        if !self.aliases.insert(alias.to_string()) {
            return Err(ResolveError::AliasAlreadyInUse {
                alias: alias.to_string(),
            });
        }

        let path = if Path::new(&include.path).is_absolute() {
            PathBuf::from(&include.path)
        } else {
            base_dir.join(&include.path)
        };
        if !path.is_file() {
            return Err(ResolveError::MissingInclude {
                path: path.display().to_string(),
            });
        }

        let canonical_path = canonical(&path);
        if self.stack.contains(&canonical_path) {
            return Err(ResolveError::IncludeCycle {
                path: path.display().to_string(),
            });
        }

        debug!(alias, path = %path.display(), "loading include");
        let content = read(&path)?;
        self.includes.push(IncludeRef {
            alias: alias.to_string(),
            path: path.clone(),
        });

        self.stack.push(canonical_path);
        let (_, mut properties) = self.parse(
            &content,
            &path.display().to_string(),
            alias,
            &parent_dir(&path),
        )?;
        self.stack.pop();

        // Included properties are not exported by default.
        for property in &mut properties {
            property.hidden = true;
        }
        Ok(properties)
    }
}

fn read(path: &Path) -> Result<String, ResolveError> {
    std::fs::read_to_string(path).map_err(|e| ResolveError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_str_requires_name() {
        let err = DocumentLoader::load_str("properties: []", " ", Path::new(".")).unwrap_err();
        assert!(matches!(err, ResolveError::MissingConfigName));
    }

    #[test]
    fn test_included_properties_are_hidden_and_namespaced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("inc.yaml"),
            "properties:\n  - type: string\n    name: greeting\n    value: hi\n",
        )
        .unwrap();

        let doc = DocumentLoader::load_str(
            "includes:\n  - path: inc.yaml\n    as: inc\nproperties:\n  - type: int\n    name: n\n    value: 1\n",
            "Root",
            dir.path(),
        )
        .unwrap();

        assert_eq!(doc.properties.len(), 2);
        assert_eq!(doc.properties[0].qualified_name(), "inc.greeting");
        assert!(doc.properties[0].hidden);
        assert_eq!(doc.properties[1].qualified_name(), "n");
        assert!(!doc.properties[1].hidden);
        assert_eq!(doc.includes.len(), 1);
        assert_eq!(doc.includes[0].alias, "inc");
    }

    #[test]
    fn test_invalid_alias() {
        let err = DocumentLoader::load_str(
            "includes:\n  - path: x.yaml\n    as: my-alias\nproperties: []\n",
            "Root",
            Path::new("."),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidValue { .. }));
    }

    #[test]
    fn test_ignored_include_is_skipped() {
        let doc = DocumentLoader::load_str(
            "includes:\n  - path: absent.yaml\n    as: gone\n    ignore: true\nproperties: []\n",
            "Root",
            Path::new("."),
        )
        .unwrap();
        assert!(doc.includes.is_empty());
    }
}
