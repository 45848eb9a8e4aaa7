//! Alphanumeric argument source.

use datagen_core::{DatagenConfig, DatagenError, LengthSpec, Vocabulary};
use datagen_generator::StringGenerator;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Arguments for one test invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    /// For a test taking only the generated value
    Single(String),

    /// For a test taking the generated value and a description
    Named { value: String, name: String },
}

impl Arguments {
    /// The generated value.
    pub fn value(&self) -> &str {
        match self {
            Arguments::Single(value) => value,
            Arguments::Named { value, .. } => value,
        }
    }

    /// The description, if the test asked for one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Arguments::Single(_) => None,
            Arguments::Named { name, .. } => Some(name),
        }
    }
}

/// Produces the invocations for a parameterized test.
///
/// A test with one parameter gets [`Arguments::Single`] and a test with two
/// gets [`Arguments::Named`]. Any other parameter count is rejected with
/// [`DatagenError::InvalidArgument`]; it does not fall back to a single value.
pub trait ArgumentsProvider {
    /// Provide invocations for a test with `param_count` parameters, drawing
    /// randomness from `rng`.
    fn provide_arguments_with<R: Rng>(
        &self,
        rng: R,
        param_count: usize,
    ) -> Result<Vec<Arguments>, DatagenError>;

    /// Provide invocations using the thread-local RNG.
    fn provide_arguments(&self, param_count: usize) -> Result<Vec<Arguments>, DatagenError> {
        self.provide_arguments_with(rand::rng(), param_count)
    }
}

/// A random alphanumeric argument.
///
/// In YAML: `{ length: 8 }` or `{ length: { min: 1, max: 5 }, name: "short" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphanumeric {
    /// Length of the generated value
    pub length: LengthSpec,

    /// Description passed to two-parameter tests
    #[serde(default)]
    pub name: String,
}

impl Alphanumeric {
    /// Exactly `n` characters.
    pub fn length(n: usize) -> Self {
        Self {
            length: LengthSpec::exact(n),
            name: String::new(),
        }
    }

    /// Between `min` and `max` characters, inclusive.
    pub fn between(min: usize, max: usize) -> Result<Self, DatagenError> {
        Ok(Self {
            length: LengthSpec::between(min, max)?,
            name: String::new(),
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Generate one value with the given generator.
    pub fn generate_param<R: Rng>(
        &self,
        generator: &mut StringGenerator<R>,
    ) -> Result<String, DatagenError> {
        let vocabulary = Vocabulary::alphanumeric();
        match self.length {
            LengthSpec::Exact(n) => generator.fixed_length(&vocabulary, n),
            LengthSpec::Range { min, max } => generator.range_length(&vocabulary, min, max),
        }
    }
}

impl ArgumentsProvider for Alphanumeric {
    fn provide_arguments_with<R: Rng>(
        &self,
        rng: R,
        param_count: usize,
    ) -> Result<Vec<Arguments>, DatagenError> {
        let mut generator = StringGenerator::with_rng(DatagenConfig::default(), rng);
        let arguments = match param_count {
            1 => Arguments::Single(self.generate_param(&mut generator)?),
            2 => Arguments::Named {
                value: self.generate_param(&mut generator)?,
                name: self.name.clone(),
            },
            n => {
                return Err(DatagenError::invalid(format!(
                    "alphanumeric arguments need a test with 1 or 2 parameters, got {n}"
                )))
            }
        };
        debug!("Provided {:?} for {} parameter(s)", arguments, param_count);
        Ok(vec![arguments])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_parameter() {
        let source = Alphanumeric::length(12);
        let invocations = source
            .provide_arguments_with(StdRng::seed_from_u64(42), 1)
            .unwrap();

        assert_eq!(invocations.len(), 1);
        let Arguments::Single(value) = &invocations[0] else {
            panic!("Expected Single, got {:?}", invocations[0]);
        };
        assert_eq!(value.len(), 12);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_two_parameters() {
        let source = Alphanumeric::between(1, 4).unwrap().named("short");
        let invocations = source
            .provide_arguments_with(StdRng::seed_from_u64(42), 2)
            .unwrap();

        assert_eq!(invocations[0].name(), Some("short"));
        let len = invocations[0].value().len();
        assert!((1..=4).contains(&len));
    }

    #[test]
    fn test_unnamed_pair_has_empty_name() {
        let invocations = Alphanumeric::length(3).provide_arguments(2).unwrap();
        assert_eq!(invocations[0].name(), Some(""));
    }

    #[test]
    fn test_unsupported_arity() {
        let source = Alphanumeric::length(3);
        assert!(matches!(
            source.provide_arguments(0),
            Err(DatagenError::InvalidArgument(_))
        ));
        assert!(matches!(
            source.provide_arguments(3),
            Err(DatagenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_inverted_range() {
        assert!(Alphanumeric::between(5, 2).is_err());

        let source: Alphanumeric = serde_yaml::from_str("length: { min: 5, max: 2 }").unwrap();
        assert!(source.provide_arguments(1).is_err());
    }

    #[test]
    fn test_from_yaml() {
        let source: Alphanumeric = serde_yaml::from_str("length: 6\nname: six").unwrap();
        assert_eq!(source, Alphanumeric::length(6).named("six"));
    }
}
