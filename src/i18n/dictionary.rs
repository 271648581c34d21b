// SPDX-License-Identifier: MPL-2.0
//! Dotted-key translation lookup over embedded dictionaries.

use crate::i18n::locale::Language;
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Resolves display strings from per-language dictionaries.
///
/// One instance is created at application start and handed to every surface
/// that renders text; there is no ambient global. Lookup walks the nested
/// dictionary along the dot segments of the key, costs O(depth) per call,
/// and never mutates state.
pub struct Translator {
    dictionaries: HashMap<Language, Value>,
}

impl Translator {
    /// Loads every embedded `<code>.json` dictionary.
    #[must_use]
    pub fn new() -> Self {
        let mut dictionaries = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(code) = filename.strip_suffix(".json") {
                if let Some(language) = Language::from_code(code) {
                    if let Some(content) = Asset::get(filename) {
                        let dictionary: Value = serde_json::from_slice(content.data.as_ref())
                            .expect("Failed to parse dictionary file.");
                        dictionaries.insert(language, dictionary);
                    }
                }
            }
        }

        Self { dictionaries }
    }

    /// Resolves a dot-delimited key to a display string.
    ///
    /// Falls back to the default language when the requested language has no
    /// entry. When no dictionary has the key, a warning is logged and the key
    /// itself is returned, so the caller always gets a renderable string.
    pub fn resolve(&self, key: &str, language: Language) -> String {
        if let Some(text) = self.lookup(key, language) {
            return text;
        }

        if language != Language::default() {
            if let Some(text) = self.lookup(key, Language::default()) {
                return text;
            }
        }

        tracing::warn!(key, language = language.code(), "missing translation");
        key.to_string()
    }

    fn lookup(&self, key: &str, language: Language) -> Option<String> {
        let mut node = self.dictionaries.get(&language)?;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str().map(str::to_string)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
