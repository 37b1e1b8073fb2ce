//! Domain-specific error types using `thiserror`.
//!
//! Each subsystem owns its own error enum next to the code that raises it;
//! `PreferencesError` is what the preferences dialog hands back to the
//! toolkit layer driving it.

use thiserror::Error;

use crate::config::SettingsError;

/// Errors surfaced by the preferences flow.
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// Settings could not be loaded, validated, or written.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    /// A form value was rejected before it reached the settings.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl PreferencesError {
    /// Creates a new `InvalidField` error.
    ///
    /// # Arguments
    ///
    /// * `field` - Name of the rejected form field.
    /// * `reason` - Why the value was rejected.
    ///
    /// # Returns
    ///
    /// A new `PreferencesError::InvalidField`.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
