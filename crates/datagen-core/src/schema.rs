//! YAML schema for declaratively defined fixtures.
//!
//! ```yaml
//! fixtures:
//!   - name: username
//!     vocabulary: { type: alphanumeric }
//!     length: { min: 3, max: 12 }
//!     count: 5
//!     modifiers:
//!       - { type: prefix, text: "u_" }
//! ```

use crate::error::DatagenError;
use crate::length::LengthSpec;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// Which characters a fixture is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VocabularyConfig {
    /// Letters and digits
    Alphanumeric,

    /// Digits only
    Numeric,

    /// English letters
    English,

    /// Multi-script sample with supplementary characters
    Unicode,

    /// The configured special symbols
    SpecialSymbols,

    /// Explicit set of characters
    Custom {
        /// Every character of this string is a member
        chars: String,
    },
}

impl VocabularyConfig {
    /// Resolve to a concrete vocabulary, using `special_symbols` for
    /// [`VocabularyConfig::SpecialSymbols`].
    pub fn resolve(&self, special_symbols: &str) -> Vocabulary {
        match self {
            Self::Alphanumeric => Vocabulary::alphanumeric(),
            Self::Numeric => Vocabulary::numeric(),
            Self::English => Vocabulary::english(),
            Self::Unicode => Vocabulary::unicode(),
            Self::SpecialSymbols => Vocabulary::from(special_symbols),
            Self::Custom { chars } => Vocabulary::from(chars.as_str()),
        }
    }
}

/// One step of a fixture's modifier pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModifierConfig {
    /// Overwrite the leading characters
    Prefix { text: String },

    /// Overwrite the trailing characters
    Suffix { text: String },

    /// Overwrite 1..=len random positions
    Scatter { chars: String },

    /// Scatter with roughly even odds, otherwise no-op
    Occasional { chars: String },

    /// Overwrite exactly one random position
    OneOf { chars: String },

    /// Insert `replacement` before every whitespace character
    EscapeWhitespace { replacement: String },

    /// Scatter spaces
    Spaces,

    /// Overwrite the first `count` characters with spaces
    SpacesLeft {
        #[serde(default = "default_count")]
        count: usize,
    },

    /// Overwrite the last `count` characters with spaces
    SpacesRight {
        #[serde(default = "default_count")]
        count: usize,
    },

    /// Scatter the configured special symbols
    SpecialSymbol,
}

fn default_count() -> usize {
    1
}

/// A named fixture: vocabulary, length, how many values and how to perturb them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDefinition {
    /// Fixture name, used as the key in generated output
    pub name: String,

    /// Characters to sample from
    pub vocabulary: VocabularyConfig,

    /// Length of each generated value
    pub length: LengthSpec,

    /// Number of values to generate
    #[serde(default = "default_count")]
    pub count: usize,

    /// Modifiers applied in order to each value
    #[serde(default)]
    pub modifiers: Vec<ModifierConfig>,
}

impl FixtureDefinition {
    pub fn new(name: impl Into<String>, vocabulary: VocabularyConfig, length: LengthSpec) -> Self {
        Self {
            name: name.into(),
            vocabulary,
            length,
            count: 1,
            modifiers: Vec::new(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_modifier(mut self, modifier: ModifierConfig) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Reject inverted length ranges and empty custom vocabularies.
    pub fn validate(&self) -> Result<(), DatagenError> {
        self.length
            .validate()
            .map_err(|e| DatagenError::invalid(format!("fixture '{}': {e}", self.name)))?;
        if let VocabularyConfig::Custom { chars } = &self.vocabulary {
            if chars.is_empty() {
                return Err(DatagenError::invalid(format!(
                    "fixture '{}': custom vocabulary cannot be empty",
                    self.name
                )));
            }
        }
        Ok(())
    }
}
