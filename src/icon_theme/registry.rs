//! Collection of discovered icon themes keyed by directory name.

use std::collections::HashMap;

/// Theme that only serves as the icon loader's last resort and is never
/// offered for selection.
pub const FALLBACK_ONLY_THEME: &str = "hicolor";

/// One selectable icon theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconThemeEntry {
    /// Theme directory name, the value stored in settings.
    pub key: String,
    /// Human-readable name shown to the user.
    pub name: String,
}

/// Mapping from theme directory name to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: HashMap<String, String>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a theme, replacing the display name of an existing key.
    ///
    /// # Returns
    ///
    /// The display name previously stored for `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.themes.insert(key.into(), name.into())
    }

    /// Removes a theme.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.themes.remove(key)
    }

    /// Display name for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.themes.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.themes.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Themes ordered by display name, ties broken by key.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<IconThemeEntry> {
        let mut entries: Vec<IconThemeEntry> = self
            .themes
            .iter()
            .map(|(key, name)| IconThemeEntry {
                key: key.clone(),
                name: name.clone(),
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            themes: iter
                .into_iter()
                .map(|(key, name)| (key.into(), name.into()))
                .collect(),
        }
    }
}
