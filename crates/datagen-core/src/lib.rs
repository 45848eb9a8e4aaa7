//! Core types shared by the datagen crates.
//!
//! - [`Vocabulary`] - the set of characters a generated string is drawn from
//! - [`LengthSpec`] - exact length or inclusive `[min, max]` range
//! - [`DatagenConfig`] - explicit configuration (special symbols, fixtures)
//! - [`FixtureDefinition`], [`VocabularyConfig`], [`ModifierConfig`] - YAML fixture schema
//! - [`DatagenError`] - the single usage-error kind raised by generation and modification

pub mod config;
pub mod error;
pub mod length;
pub mod schema;
pub mod vocabulary;

pub use config::{ConfigError, DatagenConfig, DEFAULT_SPECIAL_SYMBOLS};
pub use error::DatagenError;
pub use length::LengthSpec;
pub use schema::{FixtureDefinition, ModifierConfig, VocabularyConfig};
pub use vocabulary::Vocabulary;
