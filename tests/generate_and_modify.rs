//! Generating strings and piping them through modifiers.

use datagen::modifier::{
    escape_whitespace, occasionally, prefix_with, scatter_chars, special_symbol, suffix_with,
    StringModifier,
};
use datagen::params::{Alphanumeric, Arguments, ArgumentsProvider};
use datagen::{DatagenConfig, DatagenError, LengthSpec, StringGenerator, Vocabulary};

#[test]
fn test_generated_values_survive_modifier_chain() {
    let mut generator = StringGenerator::new(DatagenConfig::default());
    let length = LengthSpec::between(4, 20).unwrap();
    let values = generator.alphanumerics(length, 50).unwrap();

    let modifier = prefix_with("<")
        .then(suffix_with(">"))
        .then(scatter_chars("-"));
    let modified = modifier.modify_all(generator.rng_mut(), &values).unwrap();

    assert_eq!(modified.len(), values.len());
    for (before, after) in values.iter().zip(&modified) {
        assert_eq!(before.chars().count(), after.chars().count());
        assert!(after.contains('-'));
    }
}

#[test]
fn test_special_symbols_shared_by_generator_and_modifier() {
    let config = DatagenConfig::default().with_special_symbols("¤");
    let mut generator = StringGenerator::new(config.clone());

    assert_eq!(generator.special_symbols(LengthSpec::exact(3)).unwrap(), "¤¤¤");

    let value = generator.english(LengthSpec::exact(10)).unwrap();
    let modified = special_symbol(&config).apply(&value).unwrap();
    assert!(modified.contains('¤'));
}

#[test]
fn test_unicode_with_escape() {
    let mut generator: StringGenerator = StringGenerator::default();
    let value = generator.unicode(LengthSpec::exact(40)).unwrap();
    let whitespace = value.chars().filter(|c| c.is_whitespace()).count();

    let escaped = escape_whitespace("\\").apply(&value).unwrap();
    assert_eq!(escaped.chars().count(), 40 + whitespace);
}

#[test]
fn test_occasionally_over_many_strings() {
    let mut generator: StringGenerator = StringGenerator::default();
    let values = generator.batch(&Vocabulary::numeric(), LengthSpec::exact(8), 400).unwrap();
    let modified = occasionally("x").modify_all(generator.rng_mut(), &values).unwrap();

    let unchanged = values
        .iter()
        .zip(&modified)
        .filter(|(before, after)| before == after)
        .count();
    assert!((100..=300).contains(&unchanged), "unchanged = {unchanged}");
}

#[test]
fn test_empty_inputs_fail() {
    let mut generator: StringGenerator = StringGenerator::default();

    assert!(matches!(
        generator.fixed_length(&Vocabulary::default(), 5),
        Err(DatagenError::InvalidArgument(_))
    ));
    assert!(matches!(
        generator.range_length(&Vocabulary::english(), 3, 2),
        Err(DatagenError::InvalidArgument(_))
    ));
    assert!(matches!(
        scatter_chars("x").apply(""),
        Err(DatagenError::InvalidArgument(_))
    ));
    assert!(matches!(
        prefix_with("abcd").apply("xy"),
        Err(DatagenError::InvalidArgument(_))
    ));
}

#[test]
fn test_argument_provider() {
    let source = Alphanumeric::length(8).named("eight chars");

    let single = source.provide_arguments(1).unwrap();
    assert!(matches!(&single[0], Arguments::Single(v) if v.len() == 8));

    let pair = source.provide_arguments(2).unwrap();
    assert_eq!(pair[0].name(), Some("eight chars"));
}
