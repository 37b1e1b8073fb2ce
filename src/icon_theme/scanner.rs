//! Discovery of installed icon themes.
//!
//! Icon themes live in `~/.icons` and in the `icons` directory of every XDG
//! system data directory. A subdirectory counts as an icon theme when its
//! `index.theme` declares `Directories` in the `Icon Theme` group; cursor
//! themes and other theme kinds lack that key. Descriptors are read with
//! GLib's key file parser, the same one desktop entries go through.

use std::{
    fs::read_dir,
    path::{Path, PathBuf},
};

use {
    anyhow::Result as AnyhowResult,
    glib::{KeyFile, KeyFileFlags, home_dir, system_data_dirs},
    tracing::debug,
};

use crate::{
    error::{ErrorReporter, ResultExt},
    icon_theme::registry::{FALLBACK_ONLY_THEME, ThemeRegistry},
};

/// Descriptor file name inside each theme directory.
pub const THEME_DESCRIPTOR: &str = "index.theme";

const ICON_THEME_GROUP: &str = "Icon Theme";
const DIRECTORIES_KEY: &str = "Directories";
const NAME_KEY: &str = "Name";

/// Where icon themes are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSearchPaths {
    /// User home directory; `None` skips `~/.icons`.
    pub home_dir: Option<PathBuf>,
    /// System data directories in priority order.
    pub system_data_dirs: Vec<PathBuf>,
}

impl ThemeSearchPaths {
    /// Asks GLib for the home directory and the XDG system data directories.
    ///
    /// GLib applies the `XDG_DATA_DIRS` default of
    /// `/usr/local/share:/usr/share` when the variable is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let home_dir = home_dir();

        Self {
            home_dir: (!home_dir.as_os_str().is_empty()).then_some(home_dir),
            system_data_dirs: system_data_dirs(),
        }
    }
}

/// Scans theme directories and builds a [`ThemeRegistry`].
///
/// Scanning never fails: missing directories, unreadable descriptors, and
/// non-icon themes simply contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct IconThemeScanner {
    /// Locale used to translate theme display names. `None` follows the
    /// process language list (`LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`).
    locale: Option<String>,
}

impl IconThemeScanner {
    /// Creates a scanner that translates names for `locale` instead of the
    /// process language list.
    ///
    /// # Arguments
    ///
    /// * `locale` - Locale name such as `de_DE.UTF-8` or `sr@latin`.
    #[must_use]
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }

    /// Adds every icon theme found directly below `directory` to `registry`.
    ///
    /// A theme already present in the registry gets its display name
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry to fill.
    /// * `directory` - Directory whose subdirectories are candidate themes.
    pub fn scan_directory(&self, registry: &mut ThemeRegistry, directory: &Path) {
        let entries = match read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("IconThemeScanner: Skipping {:?}: {}", directory, e);
                return;
            }
        };

        for entry in entries.flatten() {
            let theme_dir = entry.path();
            if !theme_dir.is_dir() {
                continue;
            }

            let Ok(key) = entry.file_name().into_string() else {
                debug!("IconThemeScanner: Skipping non UTF-8 name {:?}", theme_dir);
                continue;
            };

            match self.read_display_name(&theme_dir, &key) {
                Ok(Some(name)) => {
                    debug!("IconThemeScanner: Found '{}' ({}) in {:?}", key, name, directory);
                    registry.insert(key, name);
                }
                Ok(None) => {
                    debug!("IconThemeScanner: {:?} is not an icon theme", theme_dir);
                }
                Err(e) => ErrorReporter::debug(&e, "IconThemeScanner"),
            }
        }
    }

    /// Collects the selectable icon themes.
    ///
    /// Scans `<home_dir>/.icons`, then `<dir>/icons` for every system data
    /// directory in order, so later directories win on conflicting keys.
    /// The fallback-only `hicolor` theme is removed from the result.
    ///
    /// # Arguments
    ///
    /// * `home_dir` - User home directory; `None` skips the user themes.
    /// * `system_data_dirs` - XDG system data directories.
    ///
    /// # Returns
    ///
    /// The discovered themes.
    pub fn discover_themes<P: AsRef<Path>>(
        &self,
        home_dir: Option<&Path>,
        system_data_dirs: &[P],
    ) -> ThemeRegistry {
        let mut registry = ThemeRegistry::new();

        if let Some(home_dir) = home_dir {
            self.scan_directory(&mut registry, &home_dir.join(".icons"));
        }

        for data_dir in system_data_dirs {
            self.scan_directory(&mut registry, &data_dir.as_ref().join("icons"));
        }

        registry.remove(FALLBACK_ONLY_THEME);
        debug!("IconThemeScanner: Discovered {} icon themes", registry.len());

        registry
    }

    /// Collects the selectable icon themes from a set of search paths.
    pub fn discover(&self, paths: &ThemeSearchPaths) -> ThemeRegistry {
        self.discover_themes(paths.home_dir.as_deref(), paths.system_data_dirs.as_slice())
    }

    /// Reads a theme's display name from its descriptor.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the descriptor does not describe an icon theme.
    /// A missing `Name` falls back to the directory name.
    fn read_display_name(&self, theme_dir: &Path, key: &str) -> AnyhowResult<Option<String>> {
        let descriptor_path = theme_dir.join(THEME_DESCRIPTOR);
        let descriptor = KeyFile::new();
        descriptor
            .load_from_file(&descriptor_path, KeyFileFlags::NONE)
            .add_contextf(format!("Failed to load {}", descriptor_path.display()))?;

        // GLib reports a missing `Icon Theme` group as an error
        if !descriptor
            .has_key(ICON_THEME_GROUP, DIRECTORIES_KEY)
            .unwrap_or(false)
        {
            return Ok(None);
        }

        let name = descriptor
            .locale_string(ICON_THEME_GROUP, NAME_KEY, self.locale.as_deref())
            .map_or_else(|_| key.to_string(), |name| name.to_string());

        Ok(Some(name))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs::{create_dir_all, write},
        path::{Path, PathBuf},
    };

    use tempfile::TempDir;

    use crate::icon_theme::{
        registry::ThemeRegistry,
        scanner::{IconThemeScanner, ThemeSearchPaths},
    };

    fn write_theme(icons_dir: &Path, key: &str, descriptor: &str) {
        let theme_dir = icons_dir.join(key);
        create_dir_all(&theme_dir).unwrap();
        write(theme_dir.join("index.theme"), descriptor).unwrap();
    }

    fn icon_theme(name: &str) -> String {
        format!("[Icon Theme]\nName={name}\nDirectories=16x16\n")
    }

    #[test]
    fn test_discover_excludes_hicolor() {
        let home = TempDir::new().unwrap();
        let system = TempDir::new().unwrap();

        write_theme(
            &home.path().join(".icons"),
            "Crisp",
            "[Icon Theme]\nDirectories=16x16\nName=Crisp Theme",
        );
        write_theme(&system.path().join("icons"), "hicolor", &icon_theme("Hicolor"));

        let registry = IconThemeScanner::default()
            .discover_themes(Some(home.path()), &[system.path().to_path_buf()]);

        let expected: ThemeRegistry = [("Crisp", "Crisp Theme")].into_iter().collect();
        assert_eq!(registry, expected);
    }

    #[test]
    fn test_theme_without_directories_is_skipped() {
        let system = TempDir::new().unwrap();
        let icons = system.path().join("icons");

        write_theme(&icons, "DMZ-White", "[Icon Theme]\nName=DMZ (White)\nInherits=core\n");
        write_theme(&icons, "Faenza", &icon_theme("Faenza"));

        let registry = IconThemeScanner::default().discover_themes(None, &[system.path()]);

        assert!(!registry.contains("DMZ-White"));
        assert_eq!(registry.get("Faenza"), Some("Faenza"));
    }

    #[test]
    fn test_invalid_or_missing_descriptors_are_skipped() {
        let system = TempDir::new().unwrap();
        let icons = system.path().join("icons");

        write_theme(&icons, "Broken", "Directories=16x16\n");
        write_theme(&icons, "Unterminated", "[Icon Theme\n");
        create_dir_all(icons.join("Empty")).unwrap();
        write(icons.join("stray-file"), icon_theme("Stray")).unwrap();

        let registry = IconThemeScanner::default().discover_themes(None, &[system.path()]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_later_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        write_theme(&first.path().join("icons"), "Papirus", &icon_theme("Papirus Old"));
        write_theme(&second.path().join("icons"), "Papirus", &icon_theme("Papirus New"));

        let registry = IconThemeScanner::default()
            .discover_themes(None, &[first.path(), second.path()]);
        assert_eq!(registry.get("Papirus"), Some("Papirus New"));
    }

    #[test]
    fn test_system_dir_overrides_home() {
        let home = TempDir::new().unwrap();
        let system = TempDir::new().unwrap();

        write_theme(&home.path().join(".icons"), "Papirus", &icon_theme("Mine"));
        write_theme(&system.path().join("icons"), "Papirus", &icon_theme("Distro"));

        let registry =
            IconThemeScanner::default().discover_themes(Some(home.path()), &[system.path()]);
        assert_eq!(registry.get("Papirus"), Some("Distro"));
    }

    #[test]
    fn test_missing_directories_yield_nothing() {
        let missing = PathBuf::from("/nonexistent/lumiview-test");
        let registry = IconThemeScanner::default()
            .discover_themes(Some(missing.as_path()), &[missing.clone()]);
        assert!(registry.is_empty());

        let mut registry: ThemeRegistry = [("Kept", "Kept")].into_iter().collect();
        IconThemeScanner::default().scan_directory(&mut registry, &missing);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_localized_and_missing_names() {
        let system = TempDir::new().unwrap();
        let icons = system.path().join("icons");

        write_theme(
            &icons,
            "Breeze",
            "[Icon Theme]\nName=Breeze\nName[de]=Brise\nDirectories=16x16\n",
        );
        write_theme(&icons, "Nameless", "[Icon Theme]\nDirectories=16x16\n");

        let scanner = IconThemeScanner::with_locale("de_DE.UTF-8");
        let registry = scanner.discover_themes(None, &[system.path()]);

        assert_eq!(registry.get("Breeze"), Some("Brise"));
        assert_eq!(registry.get("Nameless"), Some("Nameless"));

        let registry =
            IconThemeScanner::with_locale("fr_FR").discover_themes(None, &[system.path()]);
        assert_eq!(registry.get("Breeze"), Some("Breeze"));
    }

    #[test]
    fn test_locale_variants_and_escapes() {
        let system = TempDir::new().unwrap();
        write_theme(
            &system.path().join("icons"),
            "Numix",
            "# Numix icons\n[Icon Theme]\nName=Numix\\sCircle\nName[sr]=Нумикс\n\
             Name[sr@latin]=Numiks\nDirectories=16x16\n",
        );

        let names = |locale: &str| {
            let registry = IconThemeScanner::with_locale(locale)
                .discover_themes(None, &[system.path()]);
            registry.get("Numix").map(str::to_string)
        };

        assert_eq!(names("sr_RS@latin").as_deref(), Some("Numiks"));
        assert_eq!(names("sr_RS").as_deref(), Some("Нумикс"));
        assert_eq!(names("C").as_deref(), Some("Numix Circle"));
    }

    #[test]
    fn test_discover_from_search_paths() {
        let home = TempDir::new().unwrap();
        write_theme(&home.path().join(".icons"), "Crisp", &icon_theme("Crisp"));

        let paths = ThemeSearchPaths {
            home_dir: Some(home.path().to_path_buf()),
            system_data_dirs: vec![],
        };
        let registry = IconThemeScanner::default().discover(&paths);
        assert_eq!(registry.get("Crisp"), Some("Crisp"));
    }

    #[test]
    fn test_search_paths_from_env() {
        let paths = ThemeSearchPaths::from_env();

        assert_eq!(paths.system_data_dirs, glib::system_data_dirs());
        assert!(!paths.system_data_dirs.is_empty());
        assert_eq!(paths.home_dir, Some(glib::home_dir()));
    }
}
