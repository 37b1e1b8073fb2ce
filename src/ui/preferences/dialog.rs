//! Main preferences dialog implementation.
//!
//! This module implements the `PreferencesDialog` controller. It loads the
//! settings into a form, offers the fallback icon theme selector when the
//! desktop icon theme cannot be detected, and on acceptance saves the
//! settings and notifies every open view.

use std::{io::Error as IoError, sync::Arc};

use tracing::debug;

use crate::{
    config::{SettingsError, SettingsManager},
    error::{ErrorReporter, PreferencesError, ResultExt},
    icon_theme::{IconThemeScanner, ThemeSearchPaths},
    state::AppState,
    ui::preferences::{IconThemeSelector, PreferencesForm},
};

/// Preferences dialog state and its accept/reject lifecycle.
///
/// The dialog counts as an open top-level surface from construction until
/// it is dropped, which `accept` and `reject` both do.
pub struct PreferencesDialog {
    /// Application state reference for window tracking and notifications.
    app_state: Arc<AppState>,
    /// Settings manager reference for persistence.
    settings_manager: Arc<SettingsManager>,
    /// General settings being edited.
    form: PreferencesForm,
    /// Fallback icon theme choice, hidden when detection works.
    icon_theme_selector: IconThemeSelector,
}

impl PreferencesDialog {
    /// Creates a new preferences dialog instance.
    ///
    /// Icon themes are only scanned when the stored settings say the
    /// desktop icon theme cannot be detected.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Application state reference
    /// * `settings_manager` - Settings manager reference for persistence
    /// * `scanner` - Icon theme scanner used to list selectable themes
    /// * `search_paths` - Directories the scanner looks in
    ///
    /// # Returns
    ///
    /// A new `PreferencesDialog` instance.
    pub fn new(
        app_state: Arc<AppState>,
        settings_manager: Arc<SettingsManager>,
        scanner: &IconThemeScanner,
        search_paths: &ThemeSearchPaths,
    ) -> Self {
        app_state.add_window();

        let (form, icon_theme_selector) = {
            let settings = settings_manager.get_settings();
            let selector = if settings.use_fallback_icon_theme {
                let registry = scanner.discover(search_paths);
                IconThemeSelector::from_registry(&registry, &settings.fallback_icon_theme)
            } else {
                IconThemeSelector::hidden()
            };
            (PreferencesForm::from_settings(&settings), selector)
        };

        debug!(
            "PreferencesDialog: Created with {} icon themes (selector visible: {})",
            icon_theme_selector.entries().len(),
            icon_theme_selector.is_visible()
        );

        Self {
            app_state,
            settings_manager,
            form,
            icon_theme_selector,
        }
    }

    /// Gets the general settings being edited.
    pub fn form(&self) -> &PreferencesForm {
        &self.form
    }

    /// Gets mutable access to the general settings being edited.
    pub fn form_mut(&mut self) -> &mut PreferencesForm {
        &mut self.form
    }

    /// Gets the fallback icon theme selector.
    pub fn icon_theme_selector(&self) -> &IconThemeSelector {
        &self.icon_theme_selector
    }

    /// Gets mutable access to the fallback icon theme selector.
    pub fn icon_theme_selector_mut(&mut self) -> &mut IconThemeSelector {
        &mut self.icon_theme_selector
    }

    /// Accepts the dialog: stores the edited values, saves them, and tells
    /// every open view to apply them.
    ///
    /// A changed fallback icon theme is activated first and announced with
    /// `IconThemeChanged` followed by `StyleChanged`.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Settings` if the settings could not be
    /// written. The new values are still applied to the running session.
    pub fn accept(self) -> Result<(), PreferencesError> {
        let icon_theme_changed = self.apply_icon_theme();

        self.settings_manager
            .modify(|settings| self.form.apply_to(settings));

        let saved = self.settings_manager.save().add_contextf(format!(
            "Failed to save preferences to {}",
            self.settings_manager.get_config_path().display()
        ));
        if let Err(e) = &saved {
            ErrorReporter::warn(e, "PreferencesDialog");
        }

        let applied = self.settings_manager.get_settings().clone();
        self.app_state.apply_settings(&applied);
        debug!(
            "PreferencesDialog: Accepted (icon theme changed: {})",
            icon_theme_changed
        );

        saved.map_err(|e| {
            e.downcast::<SettingsError>()
                .unwrap_or_else(|e| SettingsError::from(IoError::other(e)))
                .into()
        })
    }

    /// Rejects the dialog, discarding every edit.
    pub fn reject(self) {
        debug!("PreferencesDialog: Rejected");
    }

    /// Stores and activates the selected fallback icon theme if it changed.
    ///
    /// # Returns
    ///
    /// `true` if a new icon theme was activated.
    fn apply_icon_theme(&self) -> bool {
        if !self.icon_theme_selector.is_visible() {
            return false;
        }

        let Some(selected) = self.icon_theme_selector.selected_key() else {
            return false;
        };

        if self.settings_manager.get_settings().fallback_icon_theme == selected {
            return false;
        }

        debug!("PreferencesDialog: Switching icon theme to '{}'", selected);
        self.settings_manager
            .modify(|settings| settings.fallback_icon_theme = selected.to_string());

        self.app_state.set_icon_theme_name(selected);
        self.app_state.request_style_refresh();
        true
    }
}

impl Drop for PreferencesDialog {
    fn drop(&mut self) {
        self.app_state.remove_window();
    }
}
