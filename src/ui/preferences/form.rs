//! Editable values shown by the preferences dialog.

use crate::{
    config::{Color, MAX_RECENT_FILES_RANGE, SLIDESHOW_INTERVAL_RANGE, UserSettings},
    error::PreferencesError,
};

/// Working copy of the dialog's general settings.
///
/// Numeric fields behave like spin buttons: setters clamp into the range
/// the settings accept, so a form can always be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesForm {
    /// Background in windowed mode.
    pub bg_color: Color,
    /// Background in full screen mode.
    pub fullscreen_bg_color: Color,
    /// Whether the image outline is drawn.
    pub show_outline: bool,
    /// Whether the annotations toolbar is visible.
    pub show_annotations_toolbar: bool,
    max_recent_files: u32,
    slideshow_interval: u32,
}

impl PreferencesForm {
    /// Fills a form from the current settings.
    #[must_use]
    pub fn from_settings(settings: &UserSettings) -> Self {
        let mut form = Self {
            bg_color: settings.bg_color,
            fullscreen_bg_color: settings.fullscreen_bg_color,
            show_outline: settings.show_outline,
            show_annotations_toolbar: settings.show_annotations_toolbar,
            max_recent_files: 0,
            slideshow_interval: 0,
        };
        form.set_max_recent_files(settings.max_recent_files);
        form.set_slideshow_interval(settings.slideshow_interval);
        form
    }

    /// Sets the windowed background from text typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::InvalidField` and keeps the old color if
    /// `text` is not `#rrggbb` or `#rrggbbaa`.
    pub fn set_bg_color_text(&mut self, text: &str) -> Result<(), PreferencesError> {
        self.bg_color = parse_color("bg_color", text)?;
        Ok(())
    }

    /// Sets the full screen background from text typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::InvalidField` and keeps the old color if
    /// `text` is not `#rrggbb` or `#rrggbbaa`.
    pub fn set_fullscreen_bg_color_text(&mut self, text: &str) -> Result<(), PreferencesError> {
        self.fullscreen_bg_color = parse_color("fullscreen_bg_color", text)?;
        Ok(())
    }

    #[must_use]
    pub fn max_recent_files(&self) -> u32 {
        self.max_recent_files
    }

    /// Sets the recent files menu length, clamped to its accepted range.
    pub fn set_max_recent_files(&mut self, value: u32) {
        self.max_recent_files =
            value.clamp(*MAX_RECENT_FILES_RANGE.start(), *MAX_RECENT_FILES_RANGE.end());
    }

    #[must_use]
    pub fn slideshow_interval(&self) -> u32 {
        self.slideshow_interval
    }

    /// Sets the slideshow delay in seconds, clamped to its accepted range.
    pub fn set_slideshow_interval(&mut self, seconds: u32) {
        self.slideshow_interval =
            seconds.clamp(*SLIDESHOW_INTERVAL_RANGE.start(), *SLIDESHOW_INTERVAL_RANGE.end());
    }

    /// Writes the form values into `settings`.
    pub fn apply_to(&self, settings: &mut UserSettings) {
        settings.bg_color = self.bg_color;
        settings.fullscreen_bg_color = self.fullscreen_bg_color;
        settings.max_recent_files = self.max_recent_files;
        settings.slideshow_interval = self.slideshow_interval;
        settings.show_outline = self.show_outline;
        settings.show_annotations_toolbar = self.show_annotations_toolbar;
    }
}

fn parse_color(field: &'static str, text: &str) -> Result<Color, PreferencesError> {
    text.parse::<Color>()
        .map_err(|e| PreferencesError::invalid_field(field, e.to_string()))
}
