//! Argument providers for parameterized tests.
//!
//! An [`Alphanumeric`] source describes one random alphanumeric argument: an
//! exact length or a `[min, max]` range, plus an optional name. A test with
//! one parameter receives the generated value; a test with two parameters
//! receives the value and the name.
//!
//! ```rust
//! use datagen_params::{Alphanumeric, Arguments, ArgumentsProvider};
//!
//! let source = Alphanumeric::between(3, 10).unwrap().named("valid username");
//! let invocations = source.provide_arguments(2).unwrap();
//!
//! match &invocations[0] {
//!     Arguments::Named { value, name } => {
//!         assert!((3..=10).contains(&value.len()));
//!         assert_eq!(name, "valid username");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod provider;

pub use provider::{Alphanumeric, Arguments, ArgumentsProvider};
