//! Random string generator for test fixtures.
//!
//! A [`StringGenerator`] picks a length from a [`LengthSpec`] and then samples
//! each character uniformly, with replacement, from a [`Vocabulary`].
//!
//! # Example
//!
//! ```rust
//! use datagen_core::{DatagenConfig, LengthSpec, Vocabulary};
//! use datagen_generator::StringGenerator;
//!
//! let mut generator = StringGenerator::new(DatagenConfig::default());
//!
//! let code = generator.numeric(LengthSpec::exact(6)).unwrap();
//! assert_eq!(code.len(), 6);
//!
//! let names = generator
//!     .batch(&Vocabulary::english(), LengthSpec::between(3, 8).unwrap(), 5)
//!     .unwrap();
//! assert_eq!(names.len(), 5);
//! ```
//!
//! # Vocabularies
//!
//! - `alphanumeric` - English letters and digits
//! - `numeric` - digits
//! - `english` - English letters
//! - `unicode` - several scripts plus supplementary characters
//! - `special_symbols` - taken from [`DatagenConfig::special_symbols`]
//! - any explicit [`Vocabulary`]
//!
//! Generated values carry no reproducibility guarantee. Tests should assert on
//! length and membership, not on exact output.
//!
//! [`DatagenConfig::special_symbols`]: datagen_core::DatagenConfig::special_symbols

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use datagen_core::{DatagenConfig, DatagenError, LengthSpec, Vocabulary};
pub use generator::{StringGenerator, StringIterator};
