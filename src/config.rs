//! YAML configuration file support for userdir
//!
//! Describes where the dataset lives and the limits applied while decoding
//! it, so the CLI (and any embedding application) can open a store from a
//! single file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "staging directory"
//!
//! source:
//!   path: "data/users.json"
//!
//! decode:
//!   max_document_bytes: 16777216
//!   max_records: 100000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use records::DecodeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for opening a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DirectoryConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Where the dataset is read from
    pub source: SourceConfig,

    /// Decoder limits
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// Location of the backing JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
}

impl DirectoryConfig {
    /// Configuration for a document at `path` with default limits.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            source: SourceConfig { path: path.into() },
            decode: DecodeConfig::default(),
        }
    }

    /// Load a YAML configuration file from the given path
    ///
    /// A relative `source.path` is resolved against the directory holding
    /// the configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        if config.source.path.is_relative() {
            if let Some(parent) = path.parent() {
                config.source.path = parent.join(&config.source.path);
            }
        }
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DirectoryConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.source.path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "source.path must not be empty".to_string(),
            ));
        }

        self.decode
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("decode: {err}")))
    }
}
