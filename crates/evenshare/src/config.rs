//! Configuration loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! store_path = "/var/lib/evenshare/preferences.json"
//!
//! [locale]
//! supported_locales = ["en", "fr", "ar", "he"]
//!
//! [chrome]
//! debounce_ms = 250
//! gesture_extra_padding = 8.0
//!
//! [chrome.thresholds]
//! gesture_inset = 20.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use evenshare_core::logging::targets;
use evenshare_layout::LocaleTag;

use crate::chrome::ChromeConfig;
use crate::store::{JsonFileStore, StoreResult};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Locale selection settings.
///
/// The fallback locale is not configurable; it is always
/// [`DEFAULT_LOCALE`](evenshare_layout::DEFAULT_LOCALE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locales the app ships, in preference order for device matching.
    pub supported_locales: Vec<LocaleTag>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        let supported = ["en", "fr", "es", "de", "ar", "he", "fa", "ur"]
            .into_iter()
            .filter_map(|tag| LocaleTag::new(tag).ok())
            .collect();
        Self {
            supported_locales: supported,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvenshareConfig {
    /// Location of the preference file. Defaults to the platform data
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    pub locale: LocaleConfig,
    pub chrome: ChromeConfig,
}

impl EvenshareConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        let default = LocaleTag::default_locale();
        if !config.locale.supported_locales.contains(&default) {
            tracing::warn!(
                target: targets::CONFIG,
                %default,
                "default locale is not in the supported list"
            );
        }
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading configuration");
        Self::from_toml_str(&text)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Open the preference store this configuration points at.
    pub fn open_store(&self) -> StoreResult<JsonFileStore> {
        match &self.store_path {
            Some(path) => Ok(JsonFileStore::new(path)),
            None => JsonFileStore::in_data_dir(),
        }
    }
}
