//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use dashdom::Document;
use log::{debug, warn};
use thiserror::Error;

use crate::settings::{SettingsError, SettingsProvider};

/// Settings key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// Root attribute that carries the active theme.
pub const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to persist theme: {0}")]
    Settings(#[from] SettingsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}

/// Keeps the theme preference and projects it onto the page root.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    settings: SettingsProvider,
    current: ThemeMode,
}

impl ThemeManager {
    /// Read the stored theme. A missing, unreadable or unknown value means
    /// light.
    pub async fn load(settings: SettingsProvider) -> Self {
        let stored = match settings.get::<String>(THEME_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read theme preference: {e}");
                None
            }
        };
        let current = stored
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();
        debug!("Theme preference: {current}");
        Self { settings, current }
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// Flip between light and dark and persist the choice.
    pub async fn toggle(&mut self) -> Result<ThemeMode, ThemeError> {
        self.set(self.current.toggled()).await?;
        Ok(self.current)
    }

    pub async fn set(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.current = mode;
        self.settings
            .set(THEME_KEY, &mode.as_str().to_string())
            .await?;
        Ok(())
    }

    /// Set `data-theme` on the document root.
    pub fn apply(&self, doc: &mut Document) {
        doc.root_mut().set_attr(THEME_ATTR, self.current.as_str());
    }
}
