//! Building modifiers from YAML fixture definitions.

use crate::chain::ModifierChain;
use crate::modifier::{
    escape_whitespace, occasionally, one_of, prefix_with, scatter_chars, spaces, spaces_left,
    spaces_right, special_symbol, suffix_with, Modifier,
};
use datagen_core::{DatagenConfig, ModifierConfig};

impl Modifier {
    /// Build the modifier described by `config`.
    ///
    /// `datagen` supplies the special symbols for [`ModifierConfig::SpecialSymbol`].
    pub fn from_config(config: &ModifierConfig, datagen: &DatagenConfig) -> Modifier {
        match config {
            ModifierConfig::Prefix { text } => prefix_with(text.as_str()),
            ModifierConfig::Suffix { text } => suffix_with(text.as_str()),
            ModifierConfig::Scatter { chars } => scatter_chars(chars.as_str()),
            ModifierConfig::Occasional { chars } => occasionally(chars.as_str()),
            ModifierConfig::OneOf { chars } => one_of(chars.as_str()),
            ModifierConfig::EscapeWhitespace { replacement } => {
                escape_whitespace(replacement.as_str())
            }
            ModifierConfig::Spaces => spaces(),
            ModifierConfig::SpacesLeft { count } => spaces_left(*count),
            ModifierConfig::SpacesRight { count } => spaces_right(*count),
            ModifierConfig::SpecialSymbol => special_symbol(datagen),
        }
    }
}

impl ModifierChain {
    /// Build a chain applying `configs` in order.
    pub fn from_configs(configs: &[ModifierConfig], datagen: &DatagenConfig) -> Self {
        configs
            .iter()
            .map(|config| Modifier::from_config(config, datagen))
            .collect()
    }
}
