//! Character vocabularies that generated strings are sampled from.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// ASCII digits.
pub const NUMERIC: &str = "0123456789";

/// English letters, upper and lower case.
pub const ENGLISH: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Sample of characters from several scripts plus symbols.
///
/// The last group holds supplementary characters, each of which takes two
/// UTF-16 code units and four UTF-8 bytes.
pub const UNICODE_SAMPLE: &str = concat!(
    "AbZzéñüßøå",
    "ЖжЩщЯяФф",
    "ΑαΩωΣσλ",
    "אבגדש",
    "عربيةش",
    "हिन्दी",
    "中文字漢語",
    "日本ひらがなカタカナ",
    "한국어",
    "ไทย",
    "∑∞≠≤√∂",
    "€£¥©®™",
    "\u{00A0}\u{2003}",
    "𝄞𝕬😀🚀𠀀🦀",
);

/// An immutable set of candidate characters.
///
/// Members are deduplicated on construction so that sampling is uniform over
/// distinct characters. Order of first occurrence is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    chars: Vec<char>,
}

impl Vocabulary {
    /// Build a vocabulary from any sequence of characters.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut seen = HashSet::new();
        let chars = chars.into_iter().filter(|c| seen.insert(*c)).collect();
        Self { chars }
    }

    /// Letters and digits.
    pub fn alphanumeric() -> Self {
        Self::from_chars(ENGLISH.chars().chain(NUMERIC.chars()))
    }

    /// Digits only.
    pub fn numeric() -> Self {
        Self::from(NUMERIC)
    }

    /// English letters only.
    pub fn english() -> Self {
        Self::from(ENGLISH)
    }

    /// Characters from multiple scripts, including supplementary characters.
    pub fn unicode() -> Self {
        Self::from(UNICODE_SAMPLE)
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Pick one member uniformly at random, or `None` if the vocabulary is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        self.chars.choose(rng).copied()
    }
}

impl From<&str> for Vocabulary {
    fn from(chars: &str) -> Self {
        Self::from_chars(chars.chars())
    }
}

impl From<String> for Vocabulary {
    fn from(chars: String) -> Self {
        Self::from(chars.as_str())
    }
}

impl From<&[char]> for Vocabulary {
    fn from(chars: &[char]) -> Self {
        Self::from_chars(chars.iter().copied())
    }
}

impl From<char> for Vocabulary {
    fn from(c: char) -> Self {
        Self { chars: vec![c] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deduplicates_members() {
        let vocabulary = Vocabulary::from("aabbca");
        assert_eq!(vocabulary.as_slice(), &['a', 'b', 'c']);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Vocabulary::numeric().len(), 10);
        assert_eq!(Vocabulary::english().len(), 52);
        assert_eq!(Vocabulary::alphanumeric().len(), 62);
        assert!(Vocabulary::alphanumeric()
            .as_slice()
            .iter()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_unicode_has_supplementary_and_multiple_scripts() {
        let vocabulary = Vocabulary::unicode();
        assert!(vocabulary.as_slice().iter().any(|c| c.len_utf16() > 1));
        assert!(vocabulary.contains('Ж'));
        assert!(vocabulary.contains('中'));
        assert!(vocabulary.contains('α'));
    }

    #[test]
    fn test_sample_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let vocabulary = Vocabulary::from("xyz");

        for _ in 0..100 {
            let c = vocabulary.sample(&mut rng).unwrap();
            assert!(vocabulary.contains(c));
        }
    }

    #[test]
    fn test_sample_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Vocabulary::default().sample(&mut rng), None);
    }
}
