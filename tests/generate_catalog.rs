//! Full-catalog generation against the shipped reference document.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use pipbox_translation_generator::catalog::{
    TARGETS,
    TranslationSource,
};
use pipbox_translation_generator::config::GeneratorSettings;
use pipbox_translation_generator::generator;
use serde_json::Value;
use tempfile::TempDir;

/// Copy the repository's en.json into a scratch translations directory.
fn seed_translations_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let reference = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/translations/en.json");
    fs::copy(reference, temp_dir.path().join("en.json")).unwrap();
    temp_dir
}

fn settings_for(dir: &TempDir) -> GeneratorSettings {
    GeneratorSettings {
        translations_dir: PathBuf::from(dir.path()),
        ..GeneratorSettings::default()
    }
}

fn load(dir: &TempDir, locale: &str) -> Value {
    let content = fs::read_to_string(dir.path().join(format!("{locale}.json"))).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Leaf paths of a tree, dot-joined.
fn leaf_paths(value: &Value, prefix: Option<&str>, out: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
                leaf_paths(child, Some(&path), out);
            }
        }
        _ => {
            if let Some(path) = prefix {
                out.push(path.to_string());
            }
        }
    }
}

#[test]
fn generates_every_catalog_locale() {
    let dir = seed_translations_dir();

    let summary = generator::run(&settings_for(&dir)).unwrap();

    assert!(summary.failures.is_empty(), "failures: {:?}", summary.failures);
    assert_eq!(summary.succeeded.len(), TARGETS.len());
    for target in TARGETS {
        assert!(
            dir.path().join(format!("{}.json", target.code)).exists(),
            "missing output for '{}'",
            target.code
        );
    }
}

#[test]
fn every_document_is_complete_relative_to_the_reference() {
    let dir = seed_translations_dir();
    let reference = load(&dir, "en");
    let mut expected = Vec::new();
    leaf_paths(&reference, None, &mut expected);
    expected.sort();

    generator::run(&settings_for(&dir)).unwrap();

    for target in TARGETS {
        let mut document = load(&dir, target.code);
        document.as_object_mut().unwrap().remove("_meta");
        let mut paths = Vec::new();
        leaf_paths(&document, None, &mut paths);
        paths.sort();
        assert_eq!(paths, expected, "key set mismatch for '{}'", target.code);
    }
}

#[test]
fn translated_strings_are_written_literally() {
    let dir = seed_translations_dir();

    generator::run(&settings_for(&dir)).unwrap();

    let content = fs::read_to_string(dir.path().join("zh-Hans.json")).unwrap();
    assert!(content.contains("\"pause\": \"暂停\""));
    assert!(!content.contains("\\u"));

    let ja = load(&dir, "ja");
    assert_eq!(ja["timer"]["play"], "再生");
    // Untranslated strings fall back to English
    assert_eq!(ja["timer"]["hours"], "Hours");
}

#[test]
fn fully_translated_locales_report_complete_status() {
    let dir = seed_translations_dir();

    generator::run(&settings_for(&dir)).unwrap();

    for locale in ["fr", "es", "ko", "ar"] {
        let document = load(&dir, locale);
        assert_eq!(document["_meta"]["translation_status"], "complete", "locale '{locale}'");
        assert_eq!(document["_meta"]["coverage"], "100%", "locale '{locale}'");
    }
    let ja = load(&dir, "ja");
    assert_eq!(ja["_meta"]["translation_status"], "partial");
}

#[test]
fn mexican_spanish_is_a_copy_of_spanish() {
    let dir = seed_translations_dir();

    generator::run(&settings_for(&dir)).unwrap();

    let mut es = load(&dir, "es");
    let mut es_mx = load(&dir, "es-MX");
    assert_eq!(es_mx["_meta"]["locale"], "es-MX");
    assert_eq!(es_mx["_meta"]["copied_from"], "es");

    es.as_object_mut().unwrap().remove("_meta");
    es_mx.as_object_mut().unwrap().remove("_meta");
    assert_eq!(es_mx, es);
}

#[test]
fn rerunning_the_generator_is_idempotent() {
    let dir = seed_translations_dir();
    let settings = settings_for(&dir);

    generator::run(&settings).unwrap();
    let first = load(&dir, "fr");
    generator::run(&settings).unwrap();
    let second = load(&dir, "fr");

    assert_eq!(second, first);
}

#[test]
fn catalog_targets_match_the_supported_locale_list() {
    let codes: Vec<&str> = TARGETS.iter().map(|target| target.code).collect();

    assert_eq!(codes.len(), 21);
    assert!(codes.contains(&"zh-Hans"));
    assert!(codes.contains(&"pt-BR"));
    assert!(
        TARGETS
            .iter()
            .any(|target| matches!(target.source, TranslationSource::CopyOf("es")))
    );
}
