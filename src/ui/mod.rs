//! Toolkit-independent user interface controllers.
//!
//! Controllers here hold the state a dialog displays and implement what
//! its buttons do; a toolkit layer binds that state to widgets.

pub mod preferences;

pub use preferences::{IconThemeSelector, PreferencesDialog, PreferencesForm};
