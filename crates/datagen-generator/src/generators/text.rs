//! Sampling strings from a vocabulary.

use datagen_core::{DatagenError, LengthSpec, Vocabulary};
use rand::Rng;

/// Generate exactly `n` characters, each sampled uniformly from `vocabulary`.
pub fn generate_fixed_length<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &Vocabulary,
    n: usize,
) -> Result<String, DatagenError> {
    if vocabulary.is_empty() {
        return Err(DatagenError::invalid("vocabulary cannot be empty"));
    }

    let mut result = String::with_capacity(n);
    for _ in 0..n {
        if let Some(c) = vocabulary.sample(rng) {
            result.push(c);
        }
    }
    Ok(result)
}

/// Choose a length uniformly from `[min, max]`, then generate that many characters.
pub fn generate_range_length<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &Vocabulary,
    min: usize,
    max: usize,
) -> Result<String, DatagenError> {
    let spec = LengthSpec::between(min, max)?;
    generate_string(rng, vocabulary, &spec)
}

/// Generate a string whose length satisfies `spec`.
pub fn generate_string<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &Vocabulary,
    spec: &LengthSpec,
) -> Result<String, DatagenError> {
    // Check both arguments before consuming randomness
    if vocabulary.is_empty() {
        return Err(DatagenError::invalid("vocabulary cannot be empty"));
    }
    let n = spec.pick(rng)?;
    generate_fixed_length(rng, vocabulary, n)
}
