//! Tab view configuration
//!
//! Settings are read from `<config dir>/tabview/config.toml`. Missing
//! files and missing keys fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::theme::Theme;

/// Construction options for a tab view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabViewConfig {
    /// Render the editing toolbar between the bar and the content
    pub enable_editing: bool,
    /// Initial display state
    pub expanded: bool,
    /// Built-in theme name (`dark`, `light`, `nord`)
    pub theme: String,
    /// Events buffered per slow subscriber
    pub event_capacity: usize,
}

impl Default for TabViewConfig {
    fn default() -> Self {
        Self {
            enable_editing: false,
            expanded: true,
            theme: "dark".to_string(),
            event_capacity: 64,
        }
    }
}

impl TabViewConfig {
    /// Loads the user configuration, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> CoreResult<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Io` if the file cannot be read and
    /// `CoreError::Config` if it is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| CoreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Default location of the configuration file
    pub fn config_path() -> CoreResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(CoreError::NoConfigDir)?;
        Ok(dir.join("tabview").join("config.toml"))
    }

    /// Resolves the configured theme, falling back to the dark theme
    /// for unknown names.
    pub fn resolve_theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }

    /// Builder-style toggle for the editing toolbar
    #[must_use]
    pub fn with_editing(mut self, enable_editing: bool) -> Self {
        self.enable_editing = enable_editing;
        self
    }

    /// Builder-style initial display state
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}
