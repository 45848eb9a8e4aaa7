//! Explicit configuration for generators and modifiers.
//!
//! The set of "special" symbols is part of the configuration value rather
//! than process-wide state. Callers that want a project-wide default build one
//! [`DatagenConfig`] and hand it to every generator and modifier they create.

use crate::error::DatagenError;
use crate::schema::FixtureDefinition;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Special symbols used when the configuration does not override them.
pub const DEFAULT_SPECIAL_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?`~\\";

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Fixture not found in config
    #[error("Fixture not found: {0}")]
    FixtureNotFound(String),

    /// Config parsed but holds an unusable value
    #[error(transparent)]
    InvalidArgument(#[from] DatagenError),
}

/// Configuration shared by generators and modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatagenConfig {
    /// Characters considered "special" by the special-symbol vocabulary and modifier
    #[serde(default = "default_special_symbols")]
    pub special_symbols: String,

    /// Declaratively defined fixtures
    #[serde(default)]
    pub fixtures: Vec<FixtureDefinition>,
}

fn default_special_symbols() -> String {
    DEFAULT_SPECIAL_SYMBOLS.to_string()
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            special_symbols: default_special_symbols(),
            fixtures: Vec::new(),
        }
    }
}

impl DatagenConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!(
            "Loaded datagen config from '{}' with {} fixture(s)",
            path.display(),
            config.fixtures.len()
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: DatagenConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the special symbols.
    pub fn with_special_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.special_symbols = symbols.into();
        self
    }

    pub fn validate(&self) -> Result<(), DatagenError> {
        if self.special_symbols.is_empty() {
            return Err(DatagenError::invalid("special_symbols cannot be empty"));
        }
        for fixture in &self.fixtures {
            fixture.validate()?;
        }
        Ok(())
    }

    /// The special symbols as a vocabulary.
    pub fn special_symbols_vocabulary(&self) -> Vocabulary {
        Vocabulary::from(self.special_symbols.as_str())
    }

    /// Get a fixture by name.
    pub fn get_fixture(&self, name: &str) -> Option<&FixtureDefinition> {
        self.fixtures.iter().find(|f| f.name == name)
    }

    /// Get all fixture names, in declaration order.
    pub fn fixture_names(&self) -> Vec<&str> {
        self.fixtures.iter().map(|f| f.name.as_str()).collect()
    }
}
