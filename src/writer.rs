//! Locale file persistence.
//!
//! Thin collaborator over the file system: reads and writes one JSON
//! document per locale. The transform functions in [`crate::transform`]
//! only see in-memory trees and never touch storage.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;
use thiserror::Error;

/// Defines errors that may occur while reading or writing locale files
#[derive(Error, Debug)]
pub enum WriterError {
    /// Error when reading a locale document fails
    #[error("Failed to read translation file {}: {source}", path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Error when a locale document is not valid JSON
    #[error("Failed to parse translation file {}: {source}", path.display())]
    Parse {
        /// The file that could not be parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// Error when writing a locale document fails
    #[error("Failed to write translation file {}: {source}", path.display())]
    Write {
        /// The file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Path of the JSON document for `locale` inside `dir`.
#[must_use]
pub fn locale_path(dir: &Path, locale: &str) -> PathBuf {
    dir.join(format!("{locale}.json"))
}

/// Read and parse the JSON document for `locale` from `dir`.
///
/// # Errors
/// - The file does not exist or cannot be read
/// - The file is not valid JSON
pub fn read_locale_file(dir: &Path, locale: &str) -> Result<Value, WriterError> {
    let path = locale_path(dir, locale);
    let content = std::fs::read_to_string(&path)
        .map_err(|source| WriterError::Read { path: path.clone(), source })?;
    serde_json::from_str(&content).map_err(|source| WriterError::Parse { path, source })
}

/// Write `tree` as the JSON document for `locale`, overwriting any existing
/// file.
///
/// Formatting follows the hand-edited documents: 2-space indentation, keys
/// in insertion order, non-ASCII characters written literally, and a
/// trailing newline.
///
/// # Errors
/// - The file cannot be created or written
pub fn write_locale_file(dir: &Path, locale: &str, tree: &Value) -> Result<(), WriterError> {
    let path = locale_path(dir, locale);
    // serde_json never fails on a Value tree, so only I/O can error here.
    let mut content = serde_json::to_string_pretty(tree)
        .map_err(|source| WriterError::Write {
            path: path.clone(),
            source: std::io::Error::other(source),
        })?;
    content.push('\n');
    std::fs::write(&path, content)
        .map_err(|source| WriterError::Write { path: path.clone(), source })?;

    tracing::debug!("Wrote translation file: {:?}", path);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let tree = json!({ "timer": { "play": "Play", "pause": "Pause" } });

        write_locale_file(temp_dir.path(), "en", &tree).unwrap();
        let read_back = read_locale_file(temp_dir.path(), "en").unwrap();

        assert_that!(&read_back, eq(&tree));
    }

    #[rstest]
    fn write_uses_two_space_indent_and_literal_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let tree = json!({ "timer": { "pause": "暂停" } });

        write_locale_file(temp_dir.path(), "zh-Hans", &tree).unwrap();
        let content = fs::read_to_string(temp_dir.path().join("zh-Hans.json")).unwrap();

        assert_that!(content, contains_substring("  \"timer\""));
        assert_that!(content, contains_substring("    \"pause\": \"暂停\""));
        assert_that!(content, not(contains_substring("\\u")));
        assert_that!(content, ends_with("\n"));
    }

    #[rstest]
    fn write_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let tree = json!({ "zebra": "1", "apple": "2", "mango": "3" });

        write_locale_file(temp_dir.path(), "en", &tree).unwrap();
        let content = fs::read_to_string(temp_dir.path().join("en.json")).unwrap();

        let zebra = content.find("zebra").unwrap();
        let apple = content.find("apple").unwrap();
        let mango = content.find("mango").unwrap();
        assert!(zebra < apple);
        assert!(apple < mango);
    }

    #[rstest]
    fn write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();

        write_locale_file(temp_dir.path(), "fr", &json!({ "old": "value" })).unwrap();
        write_locale_file(temp_dir.path(), "fr", &json!({ "new": "value" })).unwrap();
        let read_back = read_locale_file(temp_dir.path(), "fr").unwrap();

        assert_that!(&read_back, eq(&json!({ "new": "value" })));
    }

    #[rstest]
    fn read_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();

        let result = read_locale_file(temp_dir.path(), "xx");

        let error = result.unwrap_err();
        assert_that!(format!("{error}"), contains_substring("xx.json"));
    }

    #[rstest]
    fn read_invalid_json_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();

        let result = read_locale_file(temp_dir.path(), "broken");

        assert!(matches!(result, Err(WriterError::Parse { .. })));
    }

    #[rstest]
    fn write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");

        let result = write_locale_file(&missing, "en", &json!({}));

        assert!(matches!(result, Err(WriterError::Write { .. })));
    }
}
