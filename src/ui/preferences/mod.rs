//! Preferences dialog for the image viewer.
//!
//! The dialog edits background colors, the recent files menu length, the
//! slideshow interval, and toolbar/outline visibility. When the desktop
//! icon theme cannot be detected it also lets the user pick a fallback
//! icon theme.


pub mod dialog;
pub mod form;
pub mod icon_theme_selector;

pub use {
    dialog::PreferencesDialog, form::PreferencesForm, icon_theme_selector::IconThemeSelector,
};
