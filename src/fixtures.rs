//! Generating the fixtures declared in a [`DatagenConfig`].

use datagen_core::{ConfigError, DatagenConfig, DatagenError, FixtureDefinition};
use datagen_generator::StringGenerator;
use datagen_modifier::{ModifierChain, StringModifier};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

/// Generated values keyed by fixture name.
pub type FixtureValues = BTreeMap<String, Vec<String>>;

/// Generate the values of a single fixture and run them through its modifiers.
pub fn generate_fixture<R: Rng>(
    generator: &mut StringGenerator<R>,
    fixture: &FixtureDefinition,
) -> Result<Vec<String>, DatagenError> {
    fixture.validate()?;

    let vocabulary = fixture
        .vocabulary
        .resolve(&generator.config().special_symbols);
    let modifiers = ModifierChain::from_configs(&fixture.modifiers, generator.config());

    debug!(
        "Generating fixture '{}': {} value(s), length {}, {} modifier(s)",
        fixture.name,
        fixture.count,
        fixture.length,
        modifiers.len()
    );

    let values = generator.batch(&vocabulary, fixture.length, fixture.count)?;
    modifiers.modify_all(generator.rng_mut(), &values)
}

/// Generate the named fixtures, or every fixture in the config when `names` is empty.
pub fn generate_fixtures<R: Rng>(
    generator: &mut StringGenerator<R>,
    names: &[String],
) -> Result<FixtureValues, ConfigError> {
    let config: DatagenConfig = generator.config().clone();

    let selected: Vec<&FixtureDefinition> = if names.is_empty() {
        config.fixtures.iter().collect()
    } else {
        names
            .iter()
            .map(|name| {
                config
                    .get_fixture(name)
                    .ok_or_else(|| ConfigError::FixtureNotFound(name.clone()))
            })
            .collect::<Result<_, _>>()?
    };

    let mut output = FixtureValues::new();
    for fixture in selected {
        let values = generate_fixture(generator, fixture)?;
        output.insert(fixture.name.clone(), values);
    }
    Ok(output)
}
