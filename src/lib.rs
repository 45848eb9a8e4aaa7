//! Random strings for test fixtures.
//!
//! # Components
//!
//! - [`generator`] - random strings of a given length from a vocabulary
//! - [`modifier`] - perturb generated strings (prefixes, scattered symbols, spaces)
//! - [`params`] - argument providers for parameterized tests
//! - [`fixtures`] - generate the fixtures declared in a YAML config
//!
//! # Usage
//!
//! ```rust
//! use datagen::modifier::{occasionally, prefix_with, StringModifier};
//! use datagen::{DatagenConfig, LengthSpec, StringGenerator};
//!
//! let mut generator = StringGenerator::new(DatagenConfig::default());
//! let name = generator.alphanumeric(LengthSpec::between(5, 10).unwrap()).unwrap();
//!
//! let modifier = prefix_with("id_").then(occasionally(" "));
//! let messy = modifier.modify(generator.rng_mut(), &name).unwrap();
//! assert_eq!(messy.chars().count(), name.chars().count());
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Five alphanumeric strings of 8 to 12 characters
//! datagen generate alphanumeric --min 8 --max 12 --count 5
//!
//! # Digits with a fixed prefix and scattered spaces
//! datagen generate numeric --length 10 --prefix "+1" --spaces
//!
//! # Every fixture declared in a config file, as JSON
//! datagen --config datagen.yaml fixtures
//! ```

pub mod fixtures;

// Re-export member crates for convenience
pub use datagen_generator as generator;
pub use datagen_modifier as modifier;
pub use datagen_params as params;

pub use datagen_core::{ConfigError, DatagenConfig, DatagenError, LengthSpec, Vocabulary};
pub use datagen_generator::StringGenerator;
