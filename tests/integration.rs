// SPDX-License-Identifier: MPL-2.0
use coursehub_core::config::{self, Config};
use coursehub_core::i18n::dictionary::Translator;
use coursehub_core::i18n::locale::{initial_language, Language, LanguageSwitcher};
use coursehub_core::notifications::service::SeedService;
use coursehub_core::notifications::store::NotificationStore;
use coursehub_core::session::UserId;
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test]
async fn notification_inbox_end_to_end() {
    let mut store = NotificationStore::new(
        Arc::new(SeedService::new()),
        Some(UserId::new("u-integration")),
    );

    // First page replaces the empty list.
    store.load(1, true).await;
    assert_eq!(store.notifications().len(), 5);
    assert!(store.has_more());
    assert_eq!(store.unread_count(), 4);

    // Second page appends the remainder.
    store.load_more().await;
    assert_eq!(store.notifications().len(), 10);
    assert!(!store.has_more());

    // Mark everything read: optimistic locally, persisted by the seed
    // backend.
    store.mark_all_as_read().await;
    assert_eq!(store.unread_count(), 0);
    assert!(store.notifications().iter().all(|n| n.read));

    // A full refresh agrees with the server.
    store.refresh().await;
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        language: Some("en".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(initial_language(&loaded), Language::En);

    // 2. Switch to Japanese and verify the persisted value round-trips.
    let switcher = LanguageSwitcher::from_config(&loaded);
    let mut receiver = switcher.subscribe();
    switcher
        .change_at(Language::Ja, &temp_config_file_path)
        .expect("Failed to persist language change");

    assert_eq!(switcher.current(), Language::Ja);
    assert_eq!(*receiver.borrow_and_update(), Language::Ja);

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load changed config from path");
    assert_eq!(initial_language(&reloaded), Language::Ja);

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn translations_follow_the_active_language() {
    let translator = Translator::new();

    assert_eq!(translator.resolve("nav.home", Language::En), "Home");
    assert_eq!(translator.resolve("nav.home", Language::Ja), "ホーム");

    // Missing in Japanese, present in English.
    assert_eq!(translator.resolve("common.retry", Language::Ja), "Retry");

    // Missing everywhere: the key itself remains renderable.
    assert_eq!(
        translator.resolve("footer.imprint", Language::Ja),
        "footer.imprint"
    );
}
