//! Configuration management for the CLI.
//!
//! The config file doubles as the user template store: templates saved with
//! `hostrule template set` live in its `[templates]` table, keyed by platform id.

use crate::error::{CliError, Result};
use hostrule_domain::{Platform, Session};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// User templates keyed by platform id
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Default platform id
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Drop repeated host/IP pairs by default
    #[serde(default)]
    pub dedupe: bool,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON format
    Json,
    /// Rendered output only
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".hostrule").join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            debug!(path = %path.display(), templates = config.templates.len(), "Loaded config");
            Ok(config)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = self.to_toml()?;
        fs::write(path, contents)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// The configured default platform.
    pub fn platform(&self) -> Platform {
        Platform::parse(&self.settings.platform)
    }

    /// Change the default platform.
    pub fn set_platform(&mut self, platform: &Platform) {
        self.settings.platform = platform.id().to_string();
    }

    /// Store a user template for a platform.
    pub fn set_template(&mut self, platform: &Platform, template: String) {
        self.templates.insert(platform.id().to_string(), template);
    }

    /// Remove a user template, returning whether one existed.
    pub fn remove_template(&mut self, platform: &Platform) -> bool {
        self.templates.remove(platform.id()).is_some()
    }

    /// Build the immutable session passed to the conversion core.
    pub fn session(&self) -> Session {
        self.templates
            .iter()
            .fold(Session::new(self.platform()), |session, (id, template)| {
                session.with_override(&Platform::parse(id), template.as_str())
            })
            .with_dedupe(self.settings.dedupe)
    }

    /// Platforms worth listing: the known ones plus any with a user template.
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms = Platform::KNOWN.to_vec();
        for id in self.templates.keys() {
            let platform = Platform::parse(id);
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        platforms
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            dedupe: false,
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_platform() -> String {
    Platform::default().id().to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}
