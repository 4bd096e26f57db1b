//! Load -> resolve -> render -> write.

use std::path::{Path, PathBuf};

use tracing::info;

use confluent_core::config::ConfluentConfig;
use confluent_core::errors::{GenerateError, ResolveError};
use crate::language::{resolve_languages, ResolvedLanguage};
use crate::loader::{DocumentLoader, LoadedDocument};
use crate::substitution::substitute;

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

/// Fully resolved languages of one config document.
#[derive(Debug, Clone)]
pub struct Generator {
    languages: Vec<ResolvedLanguage>,
}

impl Generator {
    pub fn from_path(path: &Path, config: &ConfluentConfig) -> Result<Self, ResolveError> {
        Self::from_document(DocumentLoader::load_path(path)?, config)
    }

    /// `base_dir` anchors relative include paths.
    pub fn from_yaml(
        content: &str,
        config_name: &str,
        base_dir: &Path,
        config: &ConfluentConfig,
    ) -> Result<Self, ResolveError> {
        Self::from_document(DocumentLoader::load_str(content, config_name, base_dir)?, config)
    }

    pub fn from_document(
        document: LoadedDocument,
        config: &ConfluentConfig,
    ) -> Result<Self, ResolveError> {
        let mut properties = document.properties.clone();
        substitute(&mut properties)?;
        properties.retain(|p| !p.hidden);

        let languages = resolve_languages(&document, &properties, &config.render)?;
        Ok(Self { languages })
    }

    pub fn languages(&self) -> &[ResolvedLanguage] {
        &self.languages
    }

    /// Renders every language. Fails on the first error.
    pub fn render_all(&self) -> Result<Vec<GeneratedFile>, GenerateError> {
        self.languages
            .iter()
            .map(|resolved| {
                let contents = resolved
                    .language
                    .renderer(resolved.options.clone())
                    .render(&resolved.file)
                    .map_err(|source| GenerateError::Render {
                        file: resolved.file_name.clone(),
                        source,
                    })?;

                Ok(GeneratedFile {
                    file_name: resolved.file_name.clone(),
                    contents,
                })
            })
            .collect()
    }

    /// Renders everything, then writes into `directory`. Nothing is written
    /// if any language fails to render.
    pub fn write(&self, directory: &Path) -> Result<Vec<PathBuf>, GenerateError> {
        if !directory.is_dir() {
            return Err(GenerateError::OutputDirectoryMissing {
                path: directory.display().to_string(),
            });
        }

        let files = self.render_all()?;
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = directory.join(&file.file_name);
            std::fs::write(&path, &file.contents).map_err(|source| GenerateError::Io {
                path: path.display().to_string(),
                source,
            })?;
            info!(path = %path.display(), "wrote config");
            written.push(path);
        }
        Ok(written)
    }
}
