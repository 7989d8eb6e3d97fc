//! Generator configuration: defaults, optional workspace file, validation.

mod loader;
mod types;

use std::path::Path;

pub use types::{
    ConfigError,
    GeneratorSettings,
    ValidationError,
};

/// Resolve the effective settings for a workspace.
///
/// Reads `.pipbox-i18n.json` from `workspace_root` when present, otherwise
/// falls back to [`GeneratorSettings::default`], then validates the result.
///
/// # Errors
/// - File read or parse failure
/// - Validation failure (invalid separator, locale, directory, ...)
pub fn resolve(workspace_root: &Path) -> Result<GeneratorSettings, ConfigError> {
    let settings = loader::load_from_workspace(workspace_root)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn resolve_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let settings = resolve(temp_dir.path()).unwrap();

        assert_that!(settings.reference_locale, eq("en"));
        assert_that!(settings.key_separator, eq("."));
    }

    #[rstest]
    fn resolve_rejects_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".pipbox-i18n.json"), r#"{"keySeparator": ""}"#).unwrap();

        let result = resolve(temp_dir.path());

        assert_that!(result, err(anything()));
    }
}
