//! User preferences and their persistence.
//!
//! This module provides the viewer's settings with XDG Base Directory
//! compliant storage and the color type used by background preferences.

pub mod color;
pub mod settings;

pub use {
    color::{Color, ColorParseError},
    settings::{
        MAX_RECENT_FILES_RANGE, SLIDESHOW_INTERVAL_RANGE, SettingsError, SettingsManager,
        UserSettings, get_config_path,
    },
};
