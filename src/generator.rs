//! The batch generation pipeline.
//!
//! One run loads the reference document, flattens it once, and then
//! produces every catalog target in order: merge the locale's override
//! table over the reference, rebuild the nested tree, stamp the metadata
//! block, write the file. Alias targets copy the already-written document
//! of the locale they point at. A failing locale is recorded and the batch
//! moves on, so one bad table never blocks the rest.

use std::collections::HashMap;

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::catalog::{
    self,
    LocaleTarget,
    TranslationSource,
};
use crate::config::GeneratorSettings;
use crate::transform::{
    self,
    TransformError,
};
use crate::writer::{
    self,
    WriterError,
};

/// Defines errors that may occur while generating locale documents
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Error when the reference document cannot be read or parsed
    #[error("Failed to load reference locale '{locale}': {source}")]
    ReferenceUnavailable {
        /// The reference locale code
        locale: String,
        /// Underlying read/parse error
        source: WriterError,
    },
    /// Error when an alias points at a locale that this run did not generate
    #[error("Cannot copy from '{source_locale}': it was not generated in this run")]
    AliasSourceUnavailable {
        /// The alias locale code
        locale: String,
        /// The locale the alias copies
        source_locale: String,
    },
    /// Error from the tree/table transforms
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// Error from reading or writing locale files
    #[error(transparent)]
    Write(#[from] WriterError),
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Locale codes written successfully, in generation order.
    pub succeeded: Vec<String>,
    /// Locales that could not be generated, with the error that stopped
    /// each one.
    pub failures: Vec<LocaleFailure>,
}

/// A locale the run could not generate.
#[derive(Debug)]
pub struct LocaleFailure {
    /// Locale code of the failed target.
    pub locale: String,
    /// What went wrong.
    pub error: GenerateError,
}

/// Generate every locale in the built-in catalog.
///
/// # Errors
/// Returns an error only when the reference document itself is unusable;
/// per-locale failures are reported through [`RunSummary::failures`].
pub fn run(settings: &GeneratorSettings) -> Result<RunSummary, GenerateError> {
    run_with_targets(settings, catalog::TARGETS)
}

/// Generate the given targets in order.
///
/// # Errors
/// Returns an error only when the reference document itself is unusable.
pub fn run_with_targets(
    settings: &GeneratorSettings,
    targets: &[LocaleTarget],
) -> Result<RunSummary, GenerateError> {
    let reference =
        writer::read_locale_file(&settings.translations_dir, &settings.reference_locale).map_err(
            |source| GenerateError::ReferenceUnavailable {
                locale: settings.reference_locale.clone(),
                source,
            },
        )?;
    let mut base = transform::flatten_tree(&reference, &settings.key_separator)?;
    strip_metadata_keys(&mut base, settings);

    tracing::info!(
        reference = %settings.reference_locale,
        strings = base.len(),
        locales = targets.len(),
        "Generating translation files"
    );

    let mut summary = RunSummary::default();
    // 生成済みロケールのカバレッジ (エイリアス解決に使う)
    let mut coverages: HashMap<&str, usize> = HashMap::new();
    for target in targets {
        let result = match target.source {
            TranslationSource::Overrides(entries) => {
                generate_from_overrides(settings, &base, target, entries)
            }
            TranslationSource::CopyOf(source_code) => {
                copy_from_locale(settings, target, source_code, coverages.get(source_code).copied())
            }
        };
        match result {
            Ok(coverage) => {
                tracing::info!(locale = %target.code, coverage, "Generated translation file");
                coverages.insert(target.code, coverage);
                summary.succeeded.push(target.code.to_string());
            }
            Err(error) => {
                tracing::error!(locale = %target.code, %error, "Failed to generate translation file");
                summary.failures.push(LocaleFailure { locale: target.code.to_string(), error });
            }
        }
    }

    tracing::info!(
        succeeded = summary.succeeded.len(),
        failed = summary.failures.len(),
        "Translation generation finished"
    );
    Ok(summary)
}

/// Merge an override table over the reference and write the result.
/// Returns the coverage percent recorded in the metadata block.
fn generate_from_overrides(
    settings: &GeneratorSettings,
    base: &Map<String, Value>,
    target: &LocaleTarget,
    entries: &[(&str, &str)],
) -> Result<usize, GenerateError> {
    let overrides = catalog::flat_table(entries);
    let coverage = transform::override_coverage(base, &overrides);
    let merged = transform::merge_tables(base, &overrides);
    let mut tree = transform::unflatten_table(&merged, &settings.key_separator)?;
    attach_metadata(&mut tree, settings, target, coverage, None);
    writer::write_locale_file(&settings.translations_dir, target.code, &tree)?;
    Ok(coverage)
}

/// Re-publish another locale's already-written document under this code.
///
/// The copied tree keeps its strings; only the metadata block is re-stamped
/// so the file identifies itself correctly.
fn copy_from_locale(
    settings: &GeneratorSettings,
    target: &LocaleTarget,
    source_code: &str,
    source_coverage: Option<usize>,
) -> Result<usize, GenerateError> {
    let Some(coverage) = source_coverage else {
        return Err(GenerateError::AliasSourceUnavailable {
            locale: target.code.to_string(),
            source_locale: source_code.to_string(),
        });
    };

    let mut tree = writer::read_locale_file(&settings.translations_dir, source_code)?;
    attach_metadata(&mut tree, settings, target, coverage, Some(source_code));
    writer::write_locale_file(&settings.translations_dir, target.code, &tree)?;
    Ok(coverage)
}

/// Stamp the bookkeeping block onto a generated tree.
fn attach_metadata(
    tree: &mut Value,
    settings: &GeneratorSettings,
    target: &LocaleTarget,
    coverage: usize,
    copied_from: Option<&str>,
) {
    let status = if coverage == 100 { "complete" } else { "partial" };
    let mut meta = Map::new();
    meta.insert("language".to_string(), Value::String(target.display_name.to_string()));
    meta.insert("locale".to_string(), Value::String(target.code.to_string()));
    meta.insert("translation_status".to_string(), Value::String(status.to_string()));
    meta.insert("coverage".to_string(), Value::String(format!("{coverage}%")));
    if let Some(code) = copied_from {
        meta.insert("copied_from".to_string(), Value::String(code.to_string()));
    }
    if let Value::Object(root) = tree {
        root.insert(settings.metadata_key.clone(), Value::Object(meta));
    }
}

/// Drop metadata entries from the flattened reference; bookkeeping is
/// never translatable content.
fn strip_metadata_keys(base: &mut Map<String, Value>, settings: &GeneratorSettings) {
    let prefix = format!("{}{}", settings.metadata_key, settings.key_separator);
    base.retain(|key, _| key != &settings.metadata_key && !key.starts_with(&prefix));
}
