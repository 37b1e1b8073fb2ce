//! Fallback icon theme choice shown when the desktop theme is unknown.

use crate::icon_theme::{IconThemeEntry, ThemeRegistry};

/// Sorted list of selectable icon themes and the current choice.
///
/// A hidden selector stands for "the platform detects the icon theme";
/// it has no entries and never changes the stored preference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconThemeSelector {
    visible: bool,
    entries: Vec<IconThemeEntry>,
    selected: Option<usize>,
}

impl IconThemeSelector {
    /// Creates a hidden selector.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Creates a visible selector listing `registry` by display name.
    ///
    /// The entry whose key equals `stored_key` is preselected; otherwise the
    /// first entry is, or nothing when the registry is empty.
    ///
    /// # Arguments
    ///
    /// * `registry` - Discovered icon themes.
    /// * `stored_key` - Theme key saved in settings.
    #[must_use]
    pub fn from_registry(registry: &ThemeRegistry, stored_key: &str) -> Self {
        let entries = registry.sorted_entries();
        let selected = entries
            .iter()
            .position(|entry| entry.key == stored_key)
            .or_else(|| (!entries.is_empty()).then_some(0));

        Self {
            visible: true,
            entries,
            selected,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[IconThemeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&IconThemeEntry> {
        self.entries.get(self.selected?)
    }

    /// Key of the selected theme, the value that gets stored.
    #[must_use]
    pub fn selected_key(&self) -> Option<&str> {
        self.selected_entry().map(|entry| entry.key.as_str())
    }

    /// Selects the entry at `index`.
    ///
    /// # Returns
    ///
    /// `false`, leaving the selection untouched, if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Selects the entry with the given theme key.
    ///
    /// # Returns
    ///
    /// `false`, leaving the selection untouched, if no entry has that key.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) => self.select(index),
            None => false,
        }
    }
}
