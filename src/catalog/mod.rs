//! The locale catalog: which locales to generate, and from what.
//!
//! All literal translation data is embedded at compile time as static
//! tables, keyed by dot-joined paths into the reference document. No file
//! I/O happens here; the generator combines these tables with the reference
//! document it loads from disk.
//!
//! ## Adding a new locale
//!
//! 1. Add a `const XX: &[(&str, &str)]` table to `tables.rs`
//! 2. Append a [`LocaleTarget`] entry to [`TARGETS`]; an alias entry must
//!    come after the locale it copies

mod tables;

use serde_json::{
    Map,
    Value,
};

/// Where a target locale's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSource {
    /// Hand-authored flat override table, merged over the reference locale.
    Overrides(&'static [(&'static str, &'static str)]),
    /// Copy of another locale's already-generated document.
    CopyOf(&'static str),
}

/// One locale the generator produces.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTarget {
    /// Locale code, also the output file stem (e.g. "zh-Hans").
    pub code: &'static str,
    /// English display name recorded in the metadata block.
    pub display_name: &'static str,
    /// Content source for this locale.
    pub source: TranslationSource,
}

/// All target locales, in generation order.
///
/// es-MX ships the same strings as es, so it copies the generated es
/// document and must stay listed after it.
pub const TARGETS: &[LocaleTarget] = &[
    LocaleTarget {
        code: "zh-Hans",
        display_name: "Simplified Chinese",
        source: TranslationSource::Overrides(tables::ZH_HANS),
    },
    LocaleTarget {
        code: "zh-Hant",
        display_name: "Traditional Chinese",
        source: TranslationSource::Overrides(tables::ZH_HANT),
    },
    LocaleTarget {
        code: "ja",
        display_name: "Japanese",
        source: TranslationSource::Overrides(tables::JA),
    },
    LocaleTarget {
        code: "de",
        display_name: "German",
        source: TranslationSource::Overrides(tables::DE),
    },
    LocaleTarget {
        code: "fr",
        display_name: "French",
        source: TranslationSource::Overrides(tables::FR),
    },
    LocaleTarget {
        code: "es",
        display_name: "Spanish",
        source: TranslationSource::Overrides(tables::ES),
    },
    LocaleTarget {
        code: "es-MX",
        display_name: "Mexican Spanish",
        source: TranslationSource::CopyOf("es"),
    },
    LocaleTarget {
        code: "pt-BR",
        display_name: "Brazilian Portuguese",
        source: TranslationSource::Overrides(tables::PT_BR),
    },
    LocaleTarget {
        code: "pt-PT",
        display_name: "European Portuguese",
        source: TranslationSource::Overrides(tables::PT_PT),
    },
    LocaleTarget {
        code: "hi",
        display_name: "Hindi",
        source: TranslationSource::Overrides(tables::HI),
    },
    LocaleTarget {
        code: "ar",
        display_name: "Arabic",
        source: TranslationSource::Overrides(tables::AR),
    },
    LocaleTarget {
        code: "ko",
        display_name: "Korean",
        source: TranslationSource::Overrides(tables::KO),
    },
    LocaleTarget {
        code: "it",
        display_name: "Italian",
        source: TranslationSource::Overrides(tables::IT),
    },
    LocaleTarget {
        code: "nl",
        display_name: "Dutch",
        source: TranslationSource::Overrides(tables::NL),
    },
    LocaleTarget {
        code: "ru",
        display_name: "Russian",
        source: TranslationSource::Overrides(tables::RU),
    },
    LocaleTarget {
        code: "tr",
        display_name: "Turkish",
        source: TranslationSource::Overrides(tables::TR),
    },
    LocaleTarget {
        code: "sv",
        display_name: "Swedish",
        source: TranslationSource::Overrides(tables::SV),
    },
    LocaleTarget {
        code: "pl",
        display_name: "Polish",
        source: TranslationSource::Overrides(tables::PL),
    },
    LocaleTarget {
        code: "id",
        display_name: "Indonesian",
        source: TranslationSource::Overrides(tables::ID),
    },
    LocaleTarget {
        code: "th",
        display_name: "Thai",
        source: TranslationSource::Overrides(tables::TH),
    },
    LocaleTarget {
        code: "vi",
        display_name: "Vietnamese",
        source: TranslationSource::Overrides(tables::VI),
    },
];

/// Convert a static override table into a flat translation table.
#[must_use]
pub fn flat_table(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::String((*value).to_string())))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::collections::HashSet;

    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::transform::unflatten_table;

    #[rstest]
    fn targets_cover_all_supported_locales() {
        assert_that!(TARGETS.len(), eq(21));
    }

    #[rstest]
    fn target_codes_are_unique() {
        let codes: HashSet<&str> = TARGETS.iter().map(|target| target.code).collect();

        assert_that!(codes.len(), eq(TARGETS.len()));
    }

    #[rstest]
    fn aliases_come_after_their_source() {
        for (index, target) in TARGETS.iter().enumerate() {
            if let TranslationSource::CopyOf(source_code) = target.source {
                let source_index = TARGETS
                    .iter()
                    .position(|candidate| candidate.code == source_code)
                    .unwrap_or(usize::MAX);
                assert!(
                    source_index < index,
                    "alias '{}' must come after its source '{}'",
                    target.code,
                    source_code
                );
            }
        }
    }

    #[rstest]
    fn alias_sources_are_not_themselves_aliases() {
        for target in TARGETS {
            if let TranslationSource::CopyOf(source_code) = target.source {
                let source = TARGETS.iter().find(|candidate| candidate.code == source_code);
                assert!(matches!(
                    source.map(|candidate| candidate.source),
                    Some(TranslationSource::Overrides(_))
                ));
            }
        }
    }

    #[rstest]
    fn every_override_table_unflattens_cleanly() {
        for target in TARGETS {
            if let TranslationSource::Overrides(entries) = target.source {
                let table = flat_table(entries);

                assert_that!(table.len(), eq(entries.len()));
                let result = unflatten_table(&table, ".");
                assert!(result.is_ok(), "table for '{}' has conflicting keys", target.code);
            }
        }
    }

    #[rstest]
    fn fully_translated_locales_cover_the_whole_reference() {
        for code in ["fr", "es", "ko", "ar"] {
            let target = TARGETS.iter().find(|target| target.code == code).unwrap();
            let TranslationSource::Overrides(entries) = target.source else {
                panic!("'{code}' should be table-driven");
            };

            assert_that!(entries.len(), eq(81));
        }
    }
}
