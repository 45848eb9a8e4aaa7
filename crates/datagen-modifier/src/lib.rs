//! Modifiers that perturb an already generated string to simulate messy input.
//!
//! Modifiers overwrite characters rather than add them, so the character count
//! of the input is kept. [`EscapeWhitespace`] is the one exception: it inserts
//! text and the result grows.
//!
//! Modifiers can be chained with [`Modifier::then`]. Each step sees only the
//! previous step's output, so later steps may overwrite what earlier steps put
//! in (spaces scattered over a prefix, for instance).
//!
//! # Example
//!
//! ```rust
//! use datagen_modifier::{prefix_with, spaces, StringModifier};
//!
//! let modifier = prefix_with("ab");
//! assert_eq!(modifier.apply("xyz").unwrap(), "abz");
//!
//! let messy = spaces().apply("hello").unwrap();
//! assert_eq!(messy.chars().count(), 5);
//! assert!(messy.contains(' '));
//! ```

pub mod chain;
pub mod config;
pub mod literal;
pub mod modifier;
pub mod scatter;
pub mod whitespace;

pub use chain::ModifierChain;
pub use literal::{Prefix, Suffix};
pub use modifier::{
    escape_whitespace, occasionally, one_of, prefix_with, scatter_chars, space_left, space_right,
    spaces, spaces_left, spaces_right, special_symbol, suffix_with, Modifier, StringModifier,
};
pub use scatter::{Occasional, OneOf, Scatter};
pub use whitespace::EscapeWhitespace;
