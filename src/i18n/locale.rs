// SPDX-License-Identifier: MPL-2.0
//! Language selection: supported codes, initial detection, and switching.
//!
//! The active language lives in a [`LanguageSwitcher`], an explicitly owned
//! value created once per running application. Surfaces outside the main
//! re-render graph subscribe to its `watch` channel instead of listening on
//! an ambient event bus.

use crate::config::{self, Config};
use crate::error::Result;
use std::fmt;
use std::path::Path;
use tokio::sync::watch;
use unic_langid::LanguageIdentifier;

/// A language the interface can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English, the fallback for every other language.
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl Language {
    /// All supported languages, in fallback priority order.
    pub const ALL: [Language; 2] = [Language::En, Language::Ja];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Parses a stored or user-provided code, tolerating region subtags.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Language::En),
            "ja" | "ja-jp" => Some(Language::Ja),
            _ => None,
        }
    }

    /// Matches a BCP 47 locale tag by its leading language subtag.
    fn from_locale_tag(tag: &str) -> Option<Self> {
        let locale: LanguageIdentifier = tag.parse().ok()?;
        Self::from_code(locale.language.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Picks the language to start with.
///
/// A valid persisted preference always wins. Otherwise the runtime locale is
/// matched by its leading subtag, and failing that the default language is
/// used.
#[must_use]
pub fn initial_language(config: &Config) -> Language {
    resolve_language(config.language.as_deref(), sys_locale::get_locale().as_deref())
}

fn resolve_language(persisted: Option<&str>, os_locale: Option<&str>) -> Language {
    if let Some(code) = persisted {
        if let Some(language) = Language::from_code(code) {
            return language;
        }
    }

    if let Some(tag) = os_locale {
        if let Some(language) = Language::from_locale_tag(tag) {
            return language;
        }
    }

    Language::default()
}

/// Owns the active language and broadcasts changes to subscribers.
#[derive(Debug)]
pub struct LanguageSwitcher {
    sender: watch::Sender<Language>,
}

impl LanguageSwitcher {
    #[must_use]
    pub fn new(initial: Language) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Creates a switcher initialized from the persisted preference.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(initial_language(config))
    }

    /// Returns the currently active language.
    #[must_use]
    pub fn current(&self) -> Language {
        *self.sender.borrow()
    }

    /// Registers a new observer of language changes.
    ///
    /// Receivers see the value current at subscription time and every change
    /// after it; broadcasts made before subscribing are not replayed.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.sender.subscribe()
    }

    /// Switches the active language, persisting the preference first.
    ///
    /// The persisted value and the in-memory value match by the time this
    /// returns; if persistence fails the active language is left unchanged
    /// and the error is returned.
    pub fn change(&self, language: Language) -> Result<()> {
        let mut config = config::load().unwrap_or_default();
        config.language = Some(language.code().to_string());
        config::save(&config)?;
        self.sender.send_replace(language);
        Ok(())
    }

    /// Like [`change`](Self::change), but persisting to an explicit path.
    pub fn change_at(&self, language: Language, path: &Path) -> Result<()> {
        let mut config = if path.exists() {
            config::load_from_path(path).unwrap_or_default()
        } else {
            Config::default()
        };
        config.language = Some(language.code().to_string());
        config::save_to_path(&config, path)?;
        self.sender.send_replace(language);
        Ok(())
    }
}
