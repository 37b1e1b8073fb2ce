//! Lumiview - Image Viewer Preferences
//!
//! The preferences core of the Lumiview image viewer: persisted user
//! settings, the application context shared by open windows, the
//! preferences dialog controller, and discovery of installed XDG icon
//! themes for desktops where the active icon theme cannot be detected.

pub mod config;
pub mod error;
pub mod icon_theme;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{Color, SettingsError, SettingsManager, UserSettings},
    error::PreferencesError,
    icon_theme::{IconThemeScanner, ThemeRegistry, ThemeSearchPaths},
    state::{AppState, AppStateEvent, StateObserver},
    ui::{IconThemeSelector, PreferencesDialog, PreferencesForm},
};
