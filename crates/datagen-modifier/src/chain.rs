//! Sequential composition of modifiers.

use crate::modifier::{Modifier, StringModifier};
use datagen_core::DatagenError;
use rand::Rng;

/// Applies modifiers in order, each to the previous one's output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierChain {
    modifiers: Vec<Modifier>,
}

impl ModifierChain {
    pub fn new(modifiers: Vec<Modifier>) -> Self {
        Self { modifiers }
    }

    /// Append a modifier to the end of the chain.
    pub fn then(mut self, next: impl Into<Modifier>) -> Self {
        self.modifiers.push(next.into());
        self
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl StringModifier for ModifierChain {
    fn modify<R: Rng + ?Sized>(&self, rng: &mut R, original: &str) -> Result<String, DatagenError> {
        let mut current = original.to_string();
        for modifier in &self.modifiers {
            current = modifier.modify(rng, &current)?;
        }
        Ok(current)
    }
}

impl FromIterator<Modifier> for ModifierChain {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
