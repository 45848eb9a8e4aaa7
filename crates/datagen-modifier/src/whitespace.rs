//! Whitespace escaping.

use crate::modifier::StringModifier;
use datagen_core::DatagenError;
use rand::Rng;

/// Inserts a replacement text before every whitespace character.
///
/// Unlike the other modifiers this adds characters, so the output is longer
/// than the input whenever the input contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeWhitespace {
    replacement: String,
}

impl EscapeWhitespace {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }
}

impl StringModifier for EscapeWhitespace {
    fn modify<R: Rng + ?Sized>(
        &self,
        _rng: &mut R,
        original: &str,
    ) -> Result<String, DatagenError> {
        let mut result = String::with_capacity(original.len());
        for c in original.chars() {
            if c.is_whitespace() {
                result.push_str(&self.replacement);
            }
            result.push(c);
        }
        Ok(result)
    }
}
