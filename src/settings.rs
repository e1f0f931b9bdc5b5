//! Durable user settings.
//!
//! The only persisted state is the selected theme identifier, stored under a
//! single key in a YAML settings file. The adapter reports every failure as
//! a `Result`; deciding that persistence is best effort is the store's job,
//! not this module's.

use color_eyre::eyre::{eyre, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ThemeId;

const FILE_NAME: &str = "settings.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "storefront";

/// On-disk layout of the settings file.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SettingsFile {
    /// String encoding of the selected theme, e.g. `theme2`.
    selected_theme: Option<String>,
}

/// Storage adapter for the settings file.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Settings under the user's configuration directory, creating the
    /// directories if needed.
    pub fn at_default_location() -> Result<Self> {
        match dirs::home_dir() {
            Some(home) => {
                let app_config_dir = Path::new(&home).join(CONFIG_DIR).join(APP_CONFIG_DIR);
                if !app_config_dir.exists() {
                    fs::create_dir_all(&app_config_dir)?;
                }
                Ok(Self {
                    path: app_config_dir.join(FILE_NAME),
                })
            }
            None => Err(eyre!("No $HOME directory found for settings")),
        }
    }

    /// Settings at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The previously persisted theme identifier string, if any.
    pub fn load_selected_theme(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        debug!("Reading settings from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let settings: SettingsFile = serde_yaml::from_str(&content)?;
        Ok(settings.selected_theme)
    }

    /// Persist `id` as the selected theme, overwriting the previous entry.
    pub fn save_selected_theme(&self, id: ThemeId) -> Result<()> {
        let settings = SettingsFile {
            selected_theme: Some(id.as_str().to_string()),
        };
        let content = serde_yaml::to_string(&settings)?;
        fs::write(&self.path, content)?;
        debug!("Saved theme selection {} to {}", id, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_returns_none_when_no_file_exists() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join(FILE_NAME));
        assert_eq!(store.load_selected_theme().unwrap(), None);
    }

    #[test]
    fn save_then_load_returns_the_identifier() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join(FILE_NAME));
        store.save_selected_theme(ThemeId::Theme2).unwrap();
        assert_eq!(
            store.load_selected_theme().unwrap().as_deref(),
            Some("theme2")
        );
    }

    #[test]
    fn load_reports_unparseable_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "selected_theme: {").unwrap();
        let store = SettingsStore::with_path(path);
        assert!(store.load_selected_theme().is_err());
    }

    #[test]
    fn save_reports_an_unwritable_path() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("missing").join(FILE_NAME));
        assert!(store.save_selected_theme(ThemeId::Theme1).is_err());
    }
}
