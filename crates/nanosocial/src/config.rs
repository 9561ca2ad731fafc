//! Layered application configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`nanosocial.toml` shipped with the crate)
//! 2. `~/.config/nanosocial/nanosocial.toml`
//! 3. `./nanosocial.toml`
//! 4. An explicit file passed with `--config`
//!
//! The API key is read from the environment only.

use config::{Config, File, FileFormat};
use nanosocial_error::{ConfigError, NanoSocialError, NanoSocialResult};
use nanosocial_models::{GeminiSettings, GeminiSettingsBuilder, api_key_from_env};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../nanosocial.toml");

/// Hosted model settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API root
    pub base_url: String,
    /// Model for post generation
    pub text_model: String,
    /// Model for image generation and editing
    pub image_model: String,
}

/// Persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory for the key-value store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NanoSocialConfig {
    /// Hosted model settings
    pub gemini: GeminiConfig,
    /// Persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl NanoSocialConfig {
    /// Load configuration with precedence: explicit file > current dir >
    /// home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed, or if an explicit
    /// file is missing.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> NanoSocialResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("nanosocial/nanosocial.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("nanosocial").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .build()
            .map_err(|e| {
                NanoSocialError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                NanoSocialError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from a TOML string layered over the defaults.
    pub fn from_toml(overrides: &str) -> NanoSocialResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                NanoSocialError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Directory for saved campaigns.
    pub fn storage_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("nanosocial"))
                .unwrap_or_else(|| PathBuf::from(".nanosocial"))
        })
    }

    /// Client settings, with the API key taken from the environment.
    pub fn gemini_settings(&self) -> NanoSocialResult<GeminiSettings> {
        let settings = GeminiSettingsBuilder::default()
            .base_url(self.gemini.base_url.clone())
            .text_model(self.gemini.text_model.clone())
            .image_model(self.gemini.image_model.clone())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid Gemini settings: {}", e)))?;
        Ok(settings.with_api_key(api_key_from_env()))
    }
}
