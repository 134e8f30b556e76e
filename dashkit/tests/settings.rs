use std::path::PathBuf;

use dashkit::settings::*;
use dashkit::theme::*;
use dashkit::prelude::*;

fn temp_db(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dashkit-test-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("settings.db")
}

// =============================================================================
// Provider over memory
// =============================================================================

#[tokio::test]
async fn test_memory_round_trip_and_delete() {
    let settings = SettingsProvider::in_memory();

    assert_eq!(settings.get::<String>("theme").await.unwrap(), None);
    settings.set("theme", &"dark".to_string()).await.unwrap();
    assert_eq!(
        settings.get::<String>("theme").await.unwrap().as_deref(),
        Some("dark")
    );

    settings.delete("theme").await.unwrap();
    settings.delete("theme").await.unwrap();
    assert_eq!(settings.get_or("theme", "light".to_string()).await.unwrap(), "light");
}

#[tokio::test]
async fn test_wrong_type_is_deserialization_error() {
    let settings = SettingsProvider::in_memory();
    settings.set("flag", &true).await.unwrap();
    let result = settings.get::<Vec<u64>>("flag").await;
    assert!(matches!(result, Err(SettingsError::Deserialization(_))));
}

// =============================================================================
// SQLite
// =============================================================================

#[tokio::test]
async fn test_sqlite_persists_across_reopen() {
    let path = temp_db("persist");

    {
        let backend = SqliteBackend::open(&path).await.unwrap();
        let settings = SettingsProvider::new(backend);
        settings.set("sidebar-width", &280u32).await.unwrap();
        settings.set("theme", &"dark".to_string()).await.unwrap();
        settings.set("theme", &"light".to_string()).await.unwrap();
    }

    let settings = SettingsProvider::new(SqliteBackend::open(&path).await.unwrap());
    assert_eq!(settings.get::<u32>("sidebar-width").await.unwrap(), Some(280));
    assert_eq!(
        settings.get::<String>("theme").await.unwrap().as_deref(),
        Some("light")
    );

    settings.delete("theme").await.unwrap();
    assert_eq!(settings.get::<String>("theme").await.unwrap(), None);
}

// =============================================================================
// Theme
// =============================================================================

#[tokio::test]
async fn test_theme_defaults_to_light() {
    let theme = ThemeManager::load(SettingsProvider::in_memory()).await;
    assert_eq!(theme.current(), ThemeMode::Light);
}

#[tokio::test]
async fn test_theme_unknown_value_is_light() {
    let settings = SettingsProvider::in_memory();
    settings.set(THEME_KEY, &"sepia".to_string()).await.unwrap();
    let theme = ThemeManager::load(settings).await;
    assert_eq!(theme.current(), ThemeMode::Light);
}

#[tokio::test]
async fn test_theme_toggle_persists_and_applies() {
    let settings = SettingsProvider::in_memory();
    let mut theme = ThemeManager::load(settings.clone()).await;

    assert_eq!(theme.toggle().await.unwrap(), ThemeMode::Dark);
    let mut doc = Document::new(Element::new(Tag::Html).id("html"));
    theme.apply(&mut doc);
    assert_eq!(doc.root().attr_value(THEME_ATTR), Some("dark"));

    let reloaded = ThemeManager::load(settings).await;
    assert_eq!(reloaded.current(), ThemeMode::Dark);

    assert_eq!(theme.toggle().await.unwrap(), ThemeMode::Light);
    theme.apply(&mut doc);
    assert_eq!(doc.root().attr_value(THEME_ATTR), Some("light"));
}

#[test]
fn test_theme_mode_names() {
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert!("Dark".parse::<ThemeMode>().is_err());
}
