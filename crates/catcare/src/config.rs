//! Configuration management for catcare.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::Directive;

use crate::error::{Error, Result};
use crate::record::CatType;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "catcare";

/// Image extensions accepted for the background.
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CATCARE_`, sections split by `__`)
/// 2. TOML config file at `~/.config/catcare/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session defaults.
    pub session: SessionConfig,
    /// Sidebar configuration.
    pub navigation: NavigationConfig,
    /// Stylesheet and background image.
    pub assets: AssetsConfig,
    /// Output rendering.
    pub output: OutputConfig,
    /// Diagnostic logging on stderr.
    pub logging: LoggingConfig,
}

/// Session defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Type preselected on the Add-Cat form.
    pub default_cat_type: CatType,
}

/// Sidebar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// List the feral-care guide in the sidebar.
    pub show_feral_care: bool,
}

/// Theming assets. Missing files are reported as warnings, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Load assets at all.
    pub enabled: bool,
    /// Directory relative paths are resolved against.
    /// Defaults to the current directory.
    pub base_dir: Option<PathBuf>,
    /// Stylesheet path.
    pub stylesheet: Option<PathBuf>,
    /// Background image path.
    pub background_image: Option<PathBuf>,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How views are printed.
    pub format: OutputFormat,
}

/// How views are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Plain,
    /// One JSON document per view.
    Json,
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Line layout.
    pub style: LogStyle,
    /// Prefix lines with a timestamp.
    pub timestamps: bool,
    /// Colorize output. Unset means "only when stderr is a terminal".
    pub color: Option<bool>,
    /// Extra `tracing` filter directives, e.g. `catcare::shell=trace`.
    pub directives: Vec<String>,
}

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStyle {
    /// One short line per event.
    #[default]
    Compact,
    /// The default tracing layout with span context.
    Full,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            style: LogStyle::Compact,
            timestamps: false,
            color: None,
            directives: Vec::new(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            show_feral_care: true,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_dir: None, // Will be resolved to the current directory at runtime
            stylesheet: Some(PathBuf::from("styles.css")),
            background_image: Some(PathBuf::from("Assets/background6.jpg")),
        }
    }
}

impl AssetsConfig {
    /// Resolve an asset path against `base_dir`.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CATCARE_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(stylesheet) = &self.assets.stylesheet {
            if stylesheet.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "assets.stylesheet must not be empty".to_string(),
                });
            }
        }

        if let Some(image) = &self.assets.background_image {
            if image.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "assets.background_image must not be empty".to_string(),
                });
            }
            let extension = image
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "unsupported background image type: {} (expected one of {})",
                        image.display(),
                        IMAGE_EXTENSIONS.join(", ")
                    ),
                });
            }
        }

        for directive in &self.logging.directives {
            if directive.parse::<Directive>().is_err() {
                return Err(Error::ConfigValidation {
                    message: format!("invalid logging directive: {directive}"),
                });
            }
        }

        Ok(())
    }
}
