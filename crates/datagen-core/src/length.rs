//! Length specifications for generated strings.

use crate::error::DatagenError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many characters a generated string should have.
///
/// In YAML an exact length is a bare integer (`length: 8`) and a range is a
/// mapping (`length: { min: 3, max: 12 }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthSpec {
    /// Exactly this many characters
    Exact(usize),

    /// Uniformly chosen from the inclusive range
    Range {
        /// Minimum length (inclusive)
        min: usize,
        /// Maximum length (inclusive)
        max: usize,
    },
}

impl LengthSpec {
    pub fn exact(n: usize) -> Self {
        Self::Exact(n)
    }

    /// Inclusive range, rejecting `min > max`.
    pub fn between(min: usize, max: usize) -> Result<Self, DatagenError> {
        let spec = Self::Range { min, max };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the range is not inverted.
    ///
    /// Deserialized values bypass [`LengthSpec::between`], so callers validate
    /// before use.
    pub fn validate(&self) -> Result<(), DatagenError> {
        match *self {
            Self::Exact(_) => Ok(()),
            Self::Range { min, max } if min > max => Err(DatagenError::invalid(format!(
                "min length ({min}) must not be greater than max length ({max})"
            ))),
            Self::Range { .. } => Ok(()),
        }
    }

    /// Smallest length this spec allows.
    pub fn min(&self) -> usize {
        match *self {
            Self::Exact(n) => n,
            Self::Range { min, .. } => min,
        }
    }

    /// Largest length this spec allows.
    pub fn max(&self) -> usize {
        match *self {
            Self::Exact(n) => n,
            Self::Range { max, .. } => max,
        }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min()..=self.max()).contains(&len)
    }

    /// Choose a concrete length uniformly from the spec.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DatagenError> {
        self.validate()?;
        Ok(match *self {
            Self::Exact(n) => n,
            Self::Range { min, max } => rng.random_range(min..=max),
        })
    }
}

impl From<usize> for LengthSpec {
    fn from(n: usize) -> Self {
        Self::Exact(n)
    }
}

impl fmt::Display for LengthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range { min, max } => write!(f, "{min}..={max}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_between_rejects_inverted_range() {
        let result = LengthSpec::between(5, 2);
        assert!(matches!(result, Err(DatagenError::InvalidArgument(_))));
    }

    #[test]
    fn test_pick_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = LengthSpec::between(3, 7).unwrap();

        for _ in 0..200 {
            let len = spec.pick(&mut rng).unwrap();
            assert!((3..=7).contains(&len));
        }
    }

    #[test]
    fn test_pick_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = LengthSpec::between(4, 4).unwrap();
        assert_eq!(spec.pick(&mut rng).unwrap(), 4);
    }

    #[test]
    fn test_pick_validates_deserialized_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec: LengthSpec = serde_yaml::from_str("{ min: 9, max: 1 }").unwrap();
        assert!(spec.pick(&mut rng).is_err());
    }

    #[test]
    fn test_yaml_forms() {
        let exact: LengthSpec = serde_yaml::from_str("8").unwrap();
        assert_eq!(exact, LengthSpec::Exact(8));

        let range: LengthSpec = serde_yaml::from_str("{ min: 1, max: 3 }").unwrap();
        assert_eq!(range, LengthSpec::Range { min: 1, max: 3 });
    }

    #[test]
    fn test_negative_length_is_rejected_by_yaml() {
        let result: Result<LengthSpec, _> = serde_yaml::from_str("-1");
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_and_display() {
        let spec = LengthSpec::Range { min: 2, max: 4 };
        assert!(spec.contains(2));
        assert!(spec.contains(4));
        assert!(!spec.contains(5));
        assert_eq!(spec.to_string(), "2..=4");
        assert_eq!(LengthSpec::exact(3).to_string(), "3");
    }
}
