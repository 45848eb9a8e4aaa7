//! Generation functions over any random source.
//!
//! [`StringGenerator`](crate::StringGenerator) wraps these with an owned RNG
//! and configuration.

pub mod length;
pub mod text;

pub use length::pick_count;
pub use text::{generate_fixed_length, generate_range_length, generate_string};
