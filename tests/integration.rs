// SPDX-License-Identifier: MPL-2.0
use skyboard::app::{connect, persisted_state::AppState};
use skyboard::config::{self, BackendKind, Config};
use skyboard::i18n::fluent::I18n;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-all-loaded"), "All images loaded.");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let reloaded = config::load_from_path(&config_path).expect("Failed to reload config");
    let i18n_fr = I18n::new(None, &reloaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("gallery-all-loaded"), i18n_en.tr("gallery-all-loaded"));
}

#[test]
fn test_cli_language_beats_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_backend_section_round_trips() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        r#"
[gallery]
prefix = "shots"
page_size = 500

[backend]
kind = "http"
base_url = "https://storage.example.test"
"#,
    )
    .expect("write settings");

    let config = config::load_from_path(&config_path).expect("load settings");
    assert_eq!(config.backend.kind, BackendKind::Http);
    assert_eq!(config.gallery.prefix(), "shots/");
    assert_eq!(config.gallery.page_size(), config::MAX_PAGE_SIZE);
}

#[test]
fn test_local_backend_connects_without_warnings() {
    let dir = tempdir().expect("temp dir");
    let mut config = Config::default();
    config.backend.local_root = Some(dir.path().join("storage"));
    config.backend.todo_file = Some(dir.path().join("todos.cbor"));

    let (_backends, warnings) = connect(&config);
    assert!(warnings.is_empty());
    assert!(dir.path().join("storage").is_dir());
}

#[test]
fn test_app_state_round_trip() {
    let dir = tempdir().expect("temp dir");
    let state = AppState {
        dark_mode: Some(true),
        last_upload_directory: Some(PathBuf::from("/tmp/pictures")),
    };
    assert_eq!(state.save_to(Some(dir.path().to_path_buf())), None);

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(loaded, state);
}
