//! User preference management with XDG Base Directory compliance.
//!
//! This module provides the viewer's settings and the `SettingsManager`
//! that loads them from and saves them to the user's config directory.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    ops::RangeInclusive,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::config::color::Color;

/// Accepted values for the recent files menu length.
pub const MAX_RECENT_FILES_RANGE: RangeInclusive<u32> = 0..=100;

/// Accepted slideshow intervals in seconds.
pub const SLIDESHOW_INTERVAL_RANGE: RangeInclusive<u32> = 1..=3600;

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable user settings structure with default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Image view background in windowed mode.
    pub bg_color: Color,
    /// Image view background in full screen mode.
    pub fullscreen_bg_color: Color,
    /// Number of entries kept in the recent files menu.
    pub max_recent_files: u32,
    /// Delay between slideshow images in seconds.
    pub slideshow_interval: u32,
    /// Whether the image outline is drawn.
    pub show_outline: bool,
    /// Whether the annotations toolbar is visible.
    pub show_annotations_toolbar: bool,
    /// Whether the platform failed to detect the desktop icon theme,
    /// so `fallback_icon_theme` has to be used instead.
    pub use_fallback_icon_theme: bool,
    /// Icon theme directory name used when detection fails.
    pub fallback_icon_theme: String,
    /// Width of newly opened viewer windows.
    pub window_width: u32,
    /// Height of newly opened viewer windows.
    pub window_height: u32,
    /// Whether newly opened viewer windows start maximized.
    pub window_maximized: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            bg_color: Color::WHITE,
            fullscreen_bg_color: Color::BLACK,
            max_recent_files: 5,
            slideshow_interval: 5,
            show_outline: false,
            show_annotations_toolbar: false,
            use_fallback_icon_theme: false,
            fallback_icon_theme: "oxygen".to_string(),
            window_width: 640,
            window_height: 480,
            window_maximized: false,
        }
    }
}

impl UserSettings {
    /// Picks the background a viewer window should paint.
    ///
    /// # Arguments
    ///
    /// * `fullscreen` - Whether the window is currently full screen.
    ///
    /// # Returns
    ///
    /// The configured background color for that mode.
    #[must_use]
    pub fn background_for(&self, fullscreen: bool) -> Color {
        if fullscreen {
            self.fullscreen_bg_color
        } else {
            self.bg_color
        }
    }

    /// Checks that every numeric setting lies in its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !MAX_RECENT_FILES_RANGE.contains(&self.max_recent_files) {
            return Err(SettingsError::InvalidValue {
                reason: format!(
                    "max_recent_files must be within {:?}, got {}",
                    MAX_RECENT_FILES_RANGE, self.max_recent_files
                ),
            });
        }

        if !SLIDESHOW_INTERVAL_RANGE.contains(&self.slideshow_interval) {
            return Err(SettingsError::InvalidValue {
                reason: format!(
                    "slideshow_interval must be within {:?}, got {}",
                    SLIDESHOW_INTERVAL_RANGE, self.slideshow_interval
                ),
            });
        }

        if self.window_width == 0 || self.window_height == 0 {
            return Err(SettingsError::InvalidValue {
                reason: "window size must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Handles loading, saving, and validation of user preferences.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe user settings storage.
    settings: RwLock<UserSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl Clone for SettingsManager {
    fn clone(&self) -> Self {
        Self {
            settings: RwLock::new(self.settings.read().clone()),
            config_path: self.config_path.clone(),
        }
    }
}

impl SettingsManager {
    /// Creates a new settings manager with default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SettingsManager` or a `SettingsError`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the directory cannot be created or an
    /// existing file cannot be read or parsed.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents)?
        } else {
            debug!("No settings file at {:?}, using defaults", config_path);
            UserSettings::default()
        };

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Changes the in-memory settings without touching the disk.
    ///
    /// Call [`SettingsManager::save`] afterwards to persist the change.
    ///
    /// # Arguments
    ///
    /// * `f` - Closure receiving mutable access to the settings.
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut UserSettings),
    {
        let mut settings = self.settings.write();
        f(&mut *settings);
    }

    /// Validates and writes the current settings to disk.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the settings are invalid or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), SettingsError> {
        let contents = {
            let settings = self.settings.read();
            settings.validate()?;
            to_string_pretty(&*settings)?
        };

        debug!("Saving settings to file: {:?}", self.config_path);
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Ensures proper XDG directory usage for the settings file.
///
/// # Returns
///
/// The path to the configuration file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("lumiview");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    // Fallback to current directory if HOME is not set (shouldn't happen on Unix)
    PathBuf::from(".")
}
