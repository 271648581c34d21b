// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities backed by per-language
//! dictionaries embedded into the binary. It handles language detection,
//! dictionary loading, dotted-key string resolution with fallback, and
//! runtime language switching with a typed change broadcast.
//!
//! # Features
//!
//! - Automatic language detection from persisted preference or system locale
//! - Dotted-path lookup into nested `.json` dictionaries
//! - Fallback to the default language when a translation is missing
//! - Runtime language switching observable through a `watch` channel

pub mod dictionary;
pub mod locale;
