//! The modifier capability, its tagged variant and factory functions.

use crate::chain::ModifierChain;
use crate::literal::{Prefix, Suffix};
use crate::scatter::{Occasional, OneOf, Scatter};
use crate::whitespace::EscapeWhitespace;
use datagen_core::{DatagenConfig, DatagenError, Vocabulary};
use rand::Rng;

/// A transformation applied to an already generated string.
pub trait StringModifier {
    /// Modify a single string using the given random source.
    fn modify<R: Rng + ?Sized>(&self, rng: &mut R, original: &str) -> Result<String, DatagenError>;

    /// Modify every string independently, keeping order.
    ///
    /// Fails without returning any results if any element fails.
    fn modify_all<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        originals: &[String],
    ) -> Result<Vec<String>, DatagenError> {
        originals
            .iter()
            .map(|original| self.modify(&mut *rng, original))
            .collect()
    }

    /// [`StringModifier::modify`] with the thread-local RNG.
    fn apply(&self, original: &str) -> Result<String, DatagenError> {
        self.modify(&mut rand::rng(), original)
    }

    /// [`StringModifier::modify_all`] with the thread-local RNG.
    fn apply_all(&self, originals: &[String]) -> Result<Vec<String>, DatagenError> {
        self.modify_all(&mut rand::rng(), originals)
    }
}

/// Any of the available modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Prefix(Prefix),
    Suffix(Suffix),
    Scatter(Scatter),
    Occasional(Occasional),
    OneOf(OneOf),
    EscapeWhitespace(EscapeWhitespace),
    Chain(ModifierChain),
}

impl Modifier {
    /// Apply `next` to the output of `self`.
    pub fn then(self, next: impl Into<Modifier>) -> Modifier {
        match self {
            Modifier::Chain(chain) => Modifier::Chain(chain.then(next)),
            first => Modifier::Chain(ModifierChain::new(vec![first, next.into()])),
        }
    }
}

impl StringModifier for Modifier {
    fn modify<R: Rng + ?Sized>(&self, rng: &mut R, original: &str) -> Result<String, DatagenError> {
        match self {
            Modifier::Prefix(m) => m.modify(rng, original),
            Modifier::Suffix(m) => m.modify(rng, original),
            Modifier::Scatter(m) => m.modify(rng, original),
            Modifier::Occasional(m) => m.modify(rng, original),
            Modifier::OneOf(m) => m.modify(rng, original),
            Modifier::EscapeWhitespace(m) => m.modify(rng, original),
            Modifier::Chain(m) => m.modify(rng, original),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Modifier {
                fn from(m: $variant) -> Self {
                    Modifier::$variant(m)
                }
            }
        )*
    };
}

impl_from_variant!(Prefix, Suffix, Scatter, Occasional, OneOf, EscapeWhitespace);

impl From<ModifierChain> for Modifier {
    fn from(chain: ModifierChain) -> Self {
        Modifier::Chain(chain)
    }
}

/// Overwrite the first characters of the input with `text`.
pub fn prefix_with(text: impl Into<String>) -> Modifier {
    Prefix::new(text).into()
}

/// Overwrite the last characters of the input with `text`.
pub fn suffix_with(text: impl Into<String>) -> Modifier {
    Suffix::new(text).into()
}

/// Overwrite between one and `len` random positions with members of `chars`.
pub fn scatter_chars(chars: impl Into<Vocabulary>) -> Modifier {
    Scatter::new(chars).into()
}

/// Like [`scatter_chars`], but leaves the input unchanged about half the time.
pub fn occasionally(chars: impl Into<Vocabulary>) -> Modifier {
    Occasional::new(chars).into()
}

/// Overwrite exactly one random position with a member of `chars`.
pub fn one_of(chars: impl Into<Vocabulary>) -> Modifier {
    OneOf::new(chars).into()
}

/// Insert `replacement` before every whitespace character. Grows the string.
pub fn escape_whitespace(replacement: impl Into<String>) -> Modifier {
    EscapeWhitespace::new(replacement).into()
}

/// Scatter spaces.
pub fn spaces() -> Modifier {
    scatter_chars(' ')
}

/// Overwrite the first character with a space.
pub fn space_left() -> Modifier {
    spaces_left(1)
}

/// Overwrite the first `n` characters with spaces.
pub fn spaces_left(n: usize) -> Modifier {
    prefix_with(" ".repeat(n))
}

/// Overwrite the last character with a space.
pub fn space_right() -> Modifier {
    spaces_right(1)
}

/// Overwrite the last `n` characters with spaces.
pub fn spaces_right(n: usize) -> Modifier {
    suffix_with(" ".repeat(n))
}

/// Scatter the configured special symbols.
pub fn special_symbol(config: &DatagenConfig) -> Modifier {
    scatter_chars(config.special_symbols_vocabulary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spaces_left_and_right() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(spaces_left(2).modify(&mut rng, "hello").unwrap(), "  llo");
        assert_eq!(spaces_right(2).modify(&mut rng, "hello").unwrap(), "hel  ");
        assert_eq!(space_left().modify(&mut rng, "ab").unwrap(), " b");
        assert_eq!(space_right().modify(&mut rng, "ab").unwrap(), "a ");
    }

    #[test]
    fn test_spaces_scatter() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = spaces().modify(&mut rng, "abcdefgh").unwrap();

        assert_eq!(result.chars().count(), 8);
        assert!(result.contains(' '));
    }

    #[test]
    fn test_special_symbol_uses_config() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = DatagenConfig::default().with_special_symbols("§");

        let result = special_symbol(&config).modify(&mut rng, "aaaa").unwrap();
        assert_eq!(result.chars().count(), 4);
        assert!(result.contains('§'));
        assert!(result.chars().all(|c| c == 'a' || c == '§'));
    }

    #[test]
    fn test_modify_all_keeps_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let originals = vec!["xyz".to_string(), "abc".to_string()];

        let result = prefix_with("Q").modify_all(&mut rng, &originals).unwrap();
        assert_eq!(result, vec!["Qyz", "Qbc"]);
    }

    #[test]
    fn test_modify_all_fails_atomically() {
        let mut rng = StdRng::seed_from_u64(42);
        let originals = vec!["long enough".to_string(), "x".to_string()];

        let result = prefix_with("abc").modify_all(&mut rng, &originals);
        assert!(matches!(result, Err(DatagenError::InvalidArgument(_))));
    }

    #[test]
    fn test_then_flattens_chains() {
        let modifier = prefix_with("a").then(suffix_with("z")).then(spaces());
        match modifier {
            Modifier::Chain(chain) => assert_eq!(chain.len(), 3),
            other => panic!("Expected Chain, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_with_thread_rng() {
        assert_eq!(suffix_with("Z").apply("hello").unwrap(), "hellZ");
        let all = prefix_with("_")
            .apply_all(&["ab".to_string(), "cd".to_string()])
            .unwrap();
        assert_eq!(all, vec!["_b", "_d"]);
    }
}
