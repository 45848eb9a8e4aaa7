//! Modifiers that overwrite random positions.

use crate::modifier::StringModifier;
use datagen_core::{DatagenError, Vocabulary};
use rand::Rng;
use tracing::trace;

/// Fail unless there is a position to overwrite and a character to write.
fn check_scatter(chars: &Vocabulary, original: &[char]) -> Result<(), DatagenError> {
    if chars.is_empty() {
        return Err(DatagenError::invalid("character set to scatter cannot be empty"));
    }
    if original.is_empty() {
        return Err(DatagenError::invalid("cannot modify characters of an empty string"));
    }
    Ok(())
}

/// Overwrite `times` random positions. Positions may repeat.
fn overwrite<R: Rng + ?Sized>(
    rng: &mut R,
    chars: &Vocabulary,
    original: &mut [char],
    times: usize,
) {
    for _ in 0..times {
        let index = rng.random_range(0..original.len());
        if let Some(c) = chars.sample(rng) {
            original[index] = c;
        }
    }
}

/// Overwrites between one and `len` random positions with characters from a set.
///
/// The number of overwrites is chosen uniformly from `1..=len`. The same
/// position may be picked more than once, so fewer distinct positions may
/// change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scatter {
    chars: Vocabulary,
}

impl Scatter {
    pub fn new(chars: impl Into<Vocabulary>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    pub fn chars(&self) -> &Vocabulary {
        &self.chars
    }
}

impl StringModifier for Scatter {
    fn modify<R: Rng + ?Sized>(&self, rng: &mut R, original: &str) -> Result<String, DatagenError> {
        let mut result: Vec<char> = original.chars().collect();
        check_scatter(&self.chars, &result)?;

        let times = rng.random_range(1..=result.len());
        overwrite(rng, &self.chars, &mut result, times);
        trace!("Scattered {} character(s) over '{}'", times, original);

        Ok(result.into_iter().collect())
    }
}

/// Scatters with roughly even odds, otherwise returns the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occasional {
    scatter: Scatter,
}

impl Occasional {
    pub fn new(chars: impl Into<Vocabulary>) -> Self {
        Self {
            scatter: Scatter::new(chars),
        }
    }
}

impl StringModifier for Occasional {
    fn modify<R: Rng + ?Sized>(&self, rng: &mut R, original: &str) -> Result<String, DatagenError> {
        // Validate before the coin flip so bad arguments always fail
        let chars: Vec<char> = original.chars().collect();
        check_scatter(self.scatter.chars(), &chars)?;

        if rng.random_bool(0.5) {
            trace!("Leaving '{}' unchanged", original);
            return Ok(original.to_string());
        }
        self.scatter.modify(rng, original)
    }
}

/// Overwrites exactly one random position with a character from a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    chars: Vocabulary,
}

impl OneOf {
    pub fn new(chars: impl Into<Vocabulary>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl StringModifier for OneOf {
    fn modify<R: Rng + ?Sized>(&self, rng: &mut R, original: &str) -> Result<String, DatagenError> {
        let mut result: Vec<char> = original.chars().collect();
        check_scatter(&self.chars, &result)?;

        overwrite(rng, &self.chars, &mut result, 1);
        Ok(result.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_preserves_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let scatter = Scatter::new("#");

        for input in ["a", "ab", "hello world", "жж𝄞😀"] {
            for _ in 0..50 {
                let result = scatter.modify(&mut rng, input).unwrap();
                assert_eq!(result.chars().count(), input.chars().count());
            }
        }
    }

    #[test]
    fn test_scatter_inserts_at_least_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let scatter = Scatter::new("#");

        for _ in 0..50 {
            let result = scatter.modify(&mut rng, "abcdef").unwrap();
            assert!(result.contains('#'));
            // Untouched positions keep their original character
            for (got, orig) in result.chars().zip("abcdef".chars()) {
                assert!(got == '#' || got == orig);
            }
        }
    }

    #[test]
    fn test_scatter_single_char_input() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Scatter::new("#").modify(&mut rng, "a").unwrap(), "#");
    }

    #[test]
    fn test_scatter_empty_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = Scatter::new("#").modify(&mut rng, "");
        assert!(matches!(result, Err(DatagenError::InvalidArgument(_))));
    }

    #[test]
    fn test_scatter_empty_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = Scatter::new("").modify(&mut rng, "abc");
        assert!(matches!(result, Err(DatagenError::InvalidArgument(_))));
    }

    #[test]
    fn test_occasional_is_roughly_half() {
        let mut rng = StdRng::seed_from_u64(42);
        let occasional = Occasional::new("#");
        let trials = 1000;

        let unchanged = (0..trials)
            .filter(|_| occasional.modify(&mut rng, "abcdef").unwrap() == "abcdef")
            .count();

        // Scattering '#' always changes "abcdef", so unchanged counts the no-op branch
        assert!(unchanged > trials * 35 / 100, "unchanged = {unchanged}");
        assert!(unchanged < trials * 65 / 100, "unchanged = {unchanged}");
    }

    #[test]
    fn test_occasional_empty_input_always_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let occasional = Occasional::new("#");

        for _ in 0..20 {
            assert!(occasional.modify(&mut rng, "").is_err());
        }
    }

    #[test]
    fn test_one_of_changes_at_most_one_position() {
        let mut rng = StdRng::seed_from_u64(42);
        let one_of = OneOf::new("#");

        for _ in 0..50 {
            let result = one_of.modify(&mut rng, "abcdef").unwrap();
            assert_eq!(result.chars().filter(|c| *c == '#').count(), 1);
        }
    }
}
