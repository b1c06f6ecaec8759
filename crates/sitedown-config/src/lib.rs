//! Sitedown Config
//!
//! This crate handles configuration loading and management
//! for sitedown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/sitedown/config.toml`
//! - macOS: `~/Library/Application Support/sitedown/config.toml`
//! - Windows: `%APPDATA%\sitedown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use sitedown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./site.toml")).unwrap();
//! ```

mod delimiters;
mod features;

pub use delimiters::DelimitersConfig;
pub use features::FeaturesConfig;

use serde::{Deserialize, Serialize};
use sitedown_core::{Result, SitedownError, StyleMap, TagMap};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Links  = true
Images = true

[delimiters]
Bold   = "**"
Italic = "_"
Code   = "`"

[tags]
Root          = "div"
Paragraph     = "p"
HeadingPrefix = "h"
Code          = "pre"
Quote         = "blockquote"
UnorderedList = "ul"
OrderedList   = "ol"
ListItem      = "li"
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for sitedown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Inline delimiter tokens
    #[serde(default)]
    pub delimiters: DelimitersConfig,

    /// Block-tag lookups
    #[serde(default)]
    pub tags: TagMap,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[tags]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sitedown")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SitedownError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::Config;
    ///
    /// let config = Config::parse("[features]\nImages = false").unwrap();
    /// assert!(!config.features.images);
    /// assert!(config.features.links);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SitedownError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat it as inline TOML and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let other = if override_path.exists() {
                Self::load_from(override_path)?
            } else {
                Self::parse(override_str)?
            };
            config.merge(&other);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.delimiters.merge(&other.delimiters);
        self.tags = other.tags.clone();
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| SitedownError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Build the tokenizer's delimiter map from this config.
    pub fn style_map(&self) -> Result<StyleMap> {
        self.delimiters.style_map()
    }
}
