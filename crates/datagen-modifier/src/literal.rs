//! Literal prefix and suffix modifiers.

use crate::modifier::StringModifier;
use datagen_core::DatagenError;
use rand::Rng;

/// Overwrites the leading characters of the input with a fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    text: String,
}

impl Prefix {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl StringModifier for Prefix {
    fn modify<R: Rng + ?Sized>(
        &self,
        _rng: &mut R,
        original: &str,
    ) -> Result<String, DatagenError> {
        let text_len = self.text.chars().count();
        if original.chars().count() < text_len {
            return Err(DatagenError::invalid(format!(
                "prefix '{}' cannot be longer than the string '{}'",
                self.text, original
            )));
        }

        Ok(self
            .text
            .chars()
            .chain(original.chars().skip(text_len))
            .collect())
    }
}

/// Overwrites the trailing characters of the input with a fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    text: String,
}

impl Suffix {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl StringModifier for Suffix {
    fn modify<R: Rng + ?Sized>(
        &self,
        _rng: &mut R,
        original: &str,
    ) -> Result<String, DatagenError> {
        let text_len = self.text.chars().count();
        let original_len = original.chars().count();
        if original_len < text_len {
            return Err(DatagenError::invalid(format!(
                "suffix '{}' cannot be longer than the string '{}'",
                self.text, original
            )));
        }

        Ok(original
            .chars()
            .take(original_len - text_len)
            .chain(self.text.chars())
            .collect())
    }
}
