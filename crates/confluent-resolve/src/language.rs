//! Turns language blocks into render-ready files.

use tracing::debug;

use confluent_core::config::render_config::MAX_INDENT;
use confluent_core::config::RenderConfig;
use confluent_core::errors::ResolveError;
use confluent_core::types::{CommentStyle, ConfigEntry, NamingConvention, RenderedFile};
use confluent_render::{Language, RenderOptions};

use crate::document::LanguageDecl;
use crate::loader::LoadedDocument;
use crate::property::Property;

/// Everything needed to render and place one output file.
#[derive(Debug, Clone)]
pub struct ResolvedLanguage {
    pub language: Language,
    pub file: RenderedFile,
    pub options: RenderOptions,
    pub file_name: String,
}

/// Builds one [`ResolvedLanguage`] per non-ignored language block.
///
/// `properties` must already be substituted with hidden ones removed.
/// Formatting keys of a language block override `base`.
pub fn resolve_languages(
    document: &LoadedDocument,
    properties: &[Property],
    base: &RenderConfig,
) -> Result<Vec<ResolvedLanguage>, ResolveError> {
    document
        .languages
        .iter()
        .filter(|decl| !decl.ignore)
        .map(|decl| resolve_language(document, decl, properties, base))
        .collect()
}

fn resolve_language(
    document: &LoadedDocument,
    decl: &LanguageDecl,
    properties: &[Property],
    base: &RenderConfig,
) -> Result<ResolvedLanguage, ResolveError> {
    let language = Language::parse(&decl.language).ok_or_else(|| ResolveError::UnknownLanguage {
        language: decl.language.clone(),
    })?;

    let package = decl
        .package
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let package = match package {
        Some(package) => package,
        None if language.requires_package() => {
            return Err(ResolveError::MissingPackage {
                language: language.name().to_string(),
            })
        }
        None => "",
    };

    let file_naming = parse_convention(decl.file_naming.as_deref())?;
    let property_naming = parse_convention(decl.property_naming.as_deref())?;
    let type_naming = match parse_convention(decl.type_naming.as_deref())? {
        Some(convention) => convention,
        // Java file names follow the class name, so `file_naming` doubles as
        // the type convention there.
        None if language == Language::Java => file_naming.unwrap_or(NamingConvention::Pascal),
        None => NamingConvention::Pascal,
    };

    let type_name = type_naming.convert(&document.config_name);
    let file_stem = match language {
        Language::Java => type_name.clone(),
        _ => file_naming
            .unwrap_or_else(|| language.default_file_naming())
            .convert(&document.config_name),
    };

    let mut file = RenderedFile::new(package, type_name.clone());
    file.includes = document.includes.clone();
    for property in properties {
        let key = match property_naming {
            Some(convention) => convention.convert(&property.name),
            None => property.name.clone(),
        };
        file.push(ConfigEntry {
            key,
            value: property.value.clone(),
            comment: property.comment.clone(),
            source: property.source.clone(),
        });
    }

    let mut render = base.clone();
    render.merge(&decl.render);
    if let Some(ref style) = render.comment_style {
        if CommentStyle::parse(style).is_none() {
            return Err(ResolveError::UnknownCommentStyle {
                style: style.clone(),
            });
        }
    }
    if render.indent.is_some_and(|indent| indent > MAX_INDENT) {
        return Err(ResolveError::InvalidValue {
            name: format!("languages[{}].indent", language.name()),
            message: format!("must be at most {MAX_INDENT}"),
        });
    }

    debug!(
        language = language.name(),
        type_name = %type_name,
        entries = file.entries.len(),
        "resolved language"
    );

    Ok(ResolvedLanguage {
        language,
        file_name: language.file_name(&file_stem),
        file,
        options: RenderOptions::from_config(&render),
    })
}

fn parse_convention(name: Option<&str>) -> Result<Option<NamingConvention>, ResolveError> {
    name.map(|n| {
        NamingConvention::parse(n).ok_or_else(|| ResolveError::UnknownNamingConvention {
            convention: n.to_string(),
        })
    })
    .transpose()
}
