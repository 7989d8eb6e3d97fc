use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keySeparator")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for one generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Directory holding the reference document and the generated files.
    pub translations_dir: PathBuf,

    /// Locale whose document is complete and serves as the fallback base.
    pub reference_locale: String,

    /// Separator joining path segments in flat translation keys.
    pub key_separator: String,

    /// Key of the bookkeeping block attached to each generated document.
    /// Never part of the translatable content.
    pub metadata_key: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from("assets/translations"),
            reference_locale: "en".to_string(),
            key_separator: ".".to_string(),
            metadata_key: "_meta".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// # Errors
    /// - Required field is empty
    /// - Reference locale contains a path separator
    /// - Metadata key contains the key separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.reference_locale.is_empty() {
            errors.push(ValidationError::new(
                "referenceLocale",
                "The reference locale cannot be empty. Example: \"en\"",
            ));
        } else if self.reference_locale.contains(['/', '\\']) {
            errors.push(ValidationError::new(
                "referenceLocale",
                format!(
                    "'{}' is not a locale code: it contains a path separator",
                    self.reference_locale
                ),
            ));
        }

        if self.metadata_key.is_empty() {
            errors.push(ValidationError::new(
                "metadataKey",
                "The metadata key cannot be empty. Example: \"_meta\"",
            ));
        } else if !self.key_separator.is_empty() && self.metadata_key.contains(&self.key_separator)
        {
            errors.push(ValidationError::new(
                "metadataKey",
                format!(
                    "'{}' must not contain the key separator '{}'",
                    self.metadata_key, self.key_separator
                ),
            ));
        }

        if self.translations_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "translationsDir",
                "The translations directory cannot be empty. Example: \"assets/translations\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
