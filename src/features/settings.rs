//! Settings persistence
//!
//! Indicator appearance and demo window preferences, stored as JSON in the
//! platform config directory.

use std::path::{Path, PathBuf};

use iced::Size;
use serde::{Deserialize, Serialize};

use super::typing::{INTRINSIC_SIZE, IndicatorConfig};

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV: &str = "TYPING_INDICATOR_CONFIG";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Dot appearance and timing
    #[serde(default)]
    pub indicator: IndicatorConfig,
    /// Overrides the indicator's intrinsic width
    #[serde(default)]
    pub width: Option<f32>,
    /// Overrides the indicator's intrinsic height
    #[serde(default)]
    pub height: Option<f32>,
}

impl Settings {
    /// Size the indicator is hosted at
    pub fn indicator_size(&self) -> Size {
        Size::new(
            self.width.unwrap_or(INTRINSIC_SIZE.width),
            self.height.unwrap_or(INTRINSIC_SIZE.height),
        )
    }

    /// `settings.json` under the platform config directory
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "typing-indicator", "TypingIndicator")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Settings from the default location; defaults when absent or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::debug!("Using default settings ({}): {}", path.display(), e);
            Self::default()
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_slice(&std::fs::read(path)?)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write to the default location, returning the path written
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::file_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to_file(&path)?;
        Ok(path)
    }

    /// Write pretty JSON to `path`, creating missing parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}

/// Why settings could not be read or written
#[derive(Debug)]
pub enum SettingsError {
    /// The platform has no config directory
    NoConfigDir,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NoConfigDir => write!(f, "no config directory on this platform"),
            SettingsError::Io(e) => write!(f, "settings file: {}", e),
            SettingsError::Json(e) => write!(f, "settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::NoConfigDir => None,
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
        }
    }
}
