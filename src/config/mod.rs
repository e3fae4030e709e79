//! Configuration for the locale detector.
//!
//! The configuration follows the XDG Base Directory Specification and supports:
//! - User config: `~/.config/locale-detector/config.yaml`
//! - Project config: `.locale-detector.yaml` in current directory
//! - Environment variables: `LOCALE_DETECTOR_*`
//! - Command-line flags (highest precedence)
//!
//! The file carries the same `i18n` block a web framework's i18n setup uses:
//!
//! ```yaml
//! i18n:
//!   locales: [en, de-DE]
//!   default_locale: en
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::LocaleConfig;

/// Environment variable holding a comma-separated list of supported locales.
pub const ENV_LOCALES: &str = "LOCALE_DETECTOR_LOCALES";

/// Environment variable holding the fallback locale.
pub const ENV_DEFAULT_LOCALE: &str = "LOCALE_DETECTOR_DEFAULT_LOCALE";

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = ".locale-detector.yaml";

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale settings.
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// The `i18n` block of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Supported locales, in preference order. Absent means unrestricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,

    /// Locale used when no candidate matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.locale-detector.yaml`)
    /// 4. User config (`~/.config/locale-detector/config.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            let user_config = Self::load_from_file(&path)?;
            config.merge(user_config);
        }

        let project_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            let project_config = Self::load_from_file(&project_path)?;
            config.merge(project_config);
        }

        config.apply_env_overrides();

        tracing::debug!(config = ?config, "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from an explicit file, then apply environment overrides.
    pub fn load_with_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.i18n.locales.is_some() {
            self.i18n.locales = other.i18n.locales;
        }

        if other.i18n.default_locale.is_some() {
            self.i18n.default_locale = other.i18n.default_locale;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(locales) = lookup(ENV_LOCALES) {
            self.i18n.locales = Some(parse_locale_list(&locales));
        }

        if let Some(default_locale) = lookup(ENV_DEFAULT_LOCALE)
            && !default_locale.is_empty()
        {
            self.i18n.default_locale = Some(default_locale);
        }
    }

    /// Override the supported locales.
    pub fn set_locales(&mut self, locales: Vec<String>) {
        self.i18n.locales = Some(locales);
    }

    /// Override the fallback locale.
    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.i18n.default_locale = Some(locale.into());
    }

    /// Build the matching configuration for the detector.
    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            supported_languages: self.i18n.locales.clone(),
            fallback_lng: self.i18n.default_locale.clone(),
        }
    }

    /// Get the path to the user config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/locale-detector`
    /// - Linux/macOS: Falls back to `~/.config/locale-detector` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\locale-detector`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("locale-detector"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("locale-detector"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("locale-detector"))
        }
    }
}

/// Parse a comma-separated locale list, dropping blank entries.
///
/// An empty string yields an empty (unrestricted) list.
pub fn parse_locale_list(list: &str) -> Vec<String> {
    list.split(',').map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect()
}
