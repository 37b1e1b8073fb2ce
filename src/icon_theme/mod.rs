//! Installed icon theme discovery.
//!
//! Used by the preferences dialog when the desktop's icon theme cannot be
//! detected and the user has to pick one.

pub mod registry;
pub mod scanner;

pub use {
    registry::{FALLBACK_ONLY_THEME, IconThemeEntry, ThemeRegistry},
    scanner::{IconThemeScanner, THEME_DESCRIPTOR, ThemeSearchPaths},
};
