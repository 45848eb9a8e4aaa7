//! Main string generator.

use crate::generators::{
    generate_fixed_length, generate_range_length, generate_string, pick_count,
};
use datagen_core::{DatagenConfig, DatagenError, LengthSpec, Vocabulary};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

/// Generator of random strings.
///
/// Owns its configuration and random source. By default the random source is
/// the thread-local RNG, so generators on different threads never share state.
pub struct StringGenerator<R = ThreadRng> {
    /// Configuration (special symbols)
    config: DatagenConfig,
    /// Random source
    rng: R,
}

impl StringGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG.
    pub fn new(config: DatagenConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl Default for StringGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new(DatagenConfig::default())
    }
}

impl<R: Rng> StringGenerator<R> {
    /// Create a generator with an explicit random source.
    pub fn with_rng(config: DatagenConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &DatagenConfig {
        &self.config
    }

    /// Mutable access to the random source, for use with modifiers.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate exactly `n` characters from `vocabulary`.
    pub fn fixed_length(
        &mut self,
        vocabulary: &Vocabulary,
        n: usize,
    ) -> Result<String, DatagenError> {
        generate_fixed_length(&mut self.rng, vocabulary, n)
    }

    /// Generate between `min` and `max` characters (inclusive) from `vocabulary`.
    pub fn range_length(
        &mut self,
        vocabulary: &Vocabulary,
        min: usize,
        max: usize,
    ) -> Result<String, DatagenError> {
        generate_range_length(&mut self.rng, vocabulary, min, max)
    }

    /// Generate one string whose length satisfies `length`.
    pub fn generate(
        &mut self,
        vocabulary: &Vocabulary,
        length: LengthSpec,
    ) -> Result<String, DatagenError> {
        generate_string(&mut self.rng, vocabulary, &length)
    }

    /// Generate `count` independent strings. Duplicates are possible.
    pub fn batch(
        &mut self,
        vocabulary: &Vocabulary,
        length: LengthSpec,
        count: usize,
    ) -> Result<Vec<String>, DatagenError> {
        debug!(
            "Generating batch of {} string(s), length {}, vocabulary size {}",
            count,
            length,
            vocabulary.len()
        );
        Ok(self.strings(vocabulary, length, count)?.collect())
    }

    /// Generate a batch whose size is drawn uniformly from `counts`.
    pub fn batch_between(
        &mut self,
        vocabulary: &Vocabulary,
        length: LengthSpec,
        counts: LengthSpec,
    ) -> Result<Vec<String>, DatagenError> {
        // Fail on bad arguments before picking a count
        Self::check(vocabulary, &length)?;
        let count = pick_count(&mut self.rng, &counts)?;
        self.batch(vocabulary, length, count)
    }

    /// Lazily generate `count` strings.
    ///
    /// Arguments are validated here, so the iterator itself cannot fail.
    pub fn strings(
        &mut self,
        vocabulary: &Vocabulary,
        length: LengthSpec,
        count: usize,
    ) -> Result<StringIterator<'_, R>, DatagenError> {
        Self::check(vocabulary, &length)?;

        Ok(StringIterator {
            generator: self,
            vocabulary: vocabulary.clone(),
            length,
            remaining: count,
        })
    }

    /// Generate a string from an explicit set of characters.
    pub fn string(&mut self, chars: &str, length: LengthSpec) -> Result<String, DatagenError> {
        self.generate(&Vocabulary::from(chars), length)
    }

    /// Letters and digits.
    pub fn alphanumeric(&mut self, length: LengthSpec) -> Result<String, DatagenError> {
        self.generate(&Vocabulary::alphanumeric(), length)
    }

    /// Batch of alphanumeric strings.
    pub fn alphanumerics(
        &mut self,
        length: LengthSpec,
        count: usize,
    ) -> Result<Vec<String>, DatagenError> {
        self.batch(&Vocabulary::alphanumeric(), length, count)
    }

    /// Digits only.
    pub fn numeric(&mut self, length: LengthSpec) -> Result<String, DatagenError> {
        self.generate(&Vocabulary::numeric(), length)
    }

    /// Batch of numeric strings.
    pub fn numerics(
        &mut self,
        length: LengthSpec,
        count: usize,
    ) -> Result<Vec<String>, DatagenError> {
        self.batch(&Vocabulary::numeric(), length, count)
    }

    /// English letters only.
    pub fn english(&mut self, length: LengthSpec) -> Result<String, DatagenError> {
        self.generate(&Vocabulary::english(), length)
    }

    /// Characters from several scripts, including supplementary characters.
    ///
    /// Length counts Unicode scalar values, so the byte length and UTF-16
    /// length of the result are usually larger.
    pub fn unicode(&mut self, length: LengthSpec) -> Result<String, DatagenError> {
        self.generate(&Vocabulary::unicode(), length)
    }

    /// Only the configured special symbols.
    pub fn special_symbols(&mut self, length: LengthSpec) -> Result<String, DatagenError> {
        let vocabulary = self.config.special_symbols_vocabulary();
        self.generate(&vocabulary, length)
    }

    fn check(vocabulary: &Vocabulary, length: &LengthSpec) -> Result<(), DatagenError> {
        if vocabulary.is_empty() {
            return Err(DatagenError::invalid("vocabulary cannot be empty"));
        }
        length.validate()
    }
}

/// Iterator that lazily generates strings.
pub struct StringIterator<'a, R> {
    generator: &'a mut StringGenerator<R>,
    vocabulary: Vocabulary,
    length: LengthSpec,
    remaining: usize,
}

impl<R: Rng> Iterator for StringIterator<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // `strings()` rejected an empty vocabulary and an inverted range, the
        // only inputs `generate` fails on, so every call here yields a value
        // and exactly `count` items are produced.
        self.generator.generate(&self.vocabulary, self.length).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for StringIterator<'_, R> {}
