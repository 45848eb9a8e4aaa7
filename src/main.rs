//! Command-line interface for datagen
//!
//! # Usage Examples
//!
//! ## Single values
//! ```bash
//! # One alphanumeric string of exactly 16 characters
//! datagen generate alphanumeric --length 16
//!
//! # Ten unicode strings between 1 and 20 characters, as a JSON array
//! datagen generate unicode --min 1 --max 20 --count 10 --json
//!
//! # Custom vocabulary
//! datagen generate custom --chars "ACGT" --length 32
//! ```
//!
//! ## Messy input
//! ```bash
//! # Leading prefix, trailing suffix and scattered special symbols
//! datagen generate english --length 12 --prefix "<" --suffix ">" --special-symbol
//!
//! # Project-specific special symbols
//! DATAGEN_SPECIAL_SYMBOLS='§¶' datagen generate special-symbols --length 5
//! ```
//!
//! ## Fixtures
//! ```bash
//! datagen --config datagen.yaml fixtures --fixture username --fixture pin
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use datagen::fixtures::generate_fixtures;
use datagen::modifier::{
    escape_whitespace, occasionally, prefix_with, scatter_chars, spaces, special_symbol,
    suffix_with, ModifierChain, StringModifier,
};
use datagen::{DatagenConfig, LengthSpec, StringGenerator, Vocabulary};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Generate random strings for test fixtures")]
#[command(long_about = None)]
struct Cli {
    /// YAML config file (special symbols and fixtures)
    #[arg(long, global = true, env = "DATAGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Characters treated as special symbols (overrides the config file)
    #[arg(long, global = true, env = "DATAGEN_SPECIAL_SYMBOLS")]
    special_symbols: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random strings from a vocabulary
    Generate(GenerateArgs),

    /// Generate the fixtures declared in the config file, printed as JSON
    Fixtures {
        /// Fixture to generate (repeatable, default: all fixtures)
        #[arg(long = "fixture", value_name = "NAME")]
        fixtures: Vec<String>,
    },
}

/// Vocabulary to draw characters from
#[derive(Clone, Copy, Debug, ValueEnum)]
enum VocabularyKind {
    Alphanumeric,
    Numeric,
    English,
    Unicode,
    SpecialSymbols,
    /// Characters given with --chars
    Custom,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Vocabulary to draw characters from
    #[arg(value_enum)]
    kind: VocabularyKind,

    /// Characters for the custom vocabulary
    #[arg(long, required_if_eq("kind", "custom"))]
    chars: Option<String>,

    /// Exact length of each string
    #[arg(long, conflicts_with_all = ["min", "max"])]
    length: Option<usize>,

    /// Minimum length (inclusive)
    #[arg(long, requires = "max")]
    min: Option<usize>,

    /// Maximum length (inclusive)
    #[arg(long, requires = "min")]
    max: Option<usize>,

    /// Number of strings to generate
    #[arg(long, default_value = "1")]
    count: usize,

    /// Overwrite the leading characters with this text
    #[arg(long)]
    prefix: Option<String>,

    /// Overwrite the trailing characters with this text
    #[arg(long)]
    suffix: Option<String>,

    /// Scatter these characters over each string
    #[arg(long, value_name = "CHARS")]
    scatter: Option<String>,

    /// Scatter these characters over roughly half of the strings
    #[arg(long, value_name = "CHARS")]
    occasional: Option<String>,

    /// Scatter spaces over each string
    #[arg(long)]
    spaces: bool,

    /// Scatter special symbols over each string
    #[arg(long)]
    special_symbol: bool,

    /// Insert this text before every whitespace character
    #[arg(long, value_name = "REPLACEMENT")]
    escape_whitespace: Option<String>,

    /// Print a JSON array instead of one string per line
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn length_spec(&self) -> anyhow::Result<LengthSpec> {
        match (self.length, self.min, self.max) {
            (Some(n), _, _) => Ok(LengthSpec::exact(n)),
            (None, Some(min), Some(max)) => Ok(LengthSpec::between(min, max)?),
            _ => anyhow::bail!("Either --length or both --min and --max must be given"),
        }
    }

    fn vocabulary(&self, config: &DatagenConfig) -> Vocabulary {
        match self.kind {
            VocabularyKind::Alphanumeric => Vocabulary::alphanumeric(),
            VocabularyKind::Numeric => Vocabulary::numeric(),
            VocabularyKind::English => Vocabulary::english(),
            VocabularyKind::Unicode => Vocabulary::unicode(),
            VocabularyKind::SpecialSymbols => config.special_symbols_vocabulary(),
            VocabularyKind::Custom => Vocabulary::from(self.chars.as_deref().unwrap_or_default()),
        }
    }

    /// Modifiers in the order their flags are documented.
    fn modifiers(&self, config: &DatagenConfig) -> ModifierChain {
        let mut chain = ModifierChain::default();
        if let Some(text) = &self.prefix {
            chain = chain.then(prefix_with(text.as_str()));
        }
        if let Some(text) = &self.suffix {
            chain = chain.then(suffix_with(text.as_str()));
        }
        if let Some(chars) = &self.scatter {
            chain = chain.then(scatter_chars(chars.as_str()));
        }
        if let Some(chars) = &self.occasional {
            chain = chain.then(occasionally(chars.as_str()));
        }
        if self.spaces {
            chain = chain.then(spaces());
        }
        if self.special_symbol {
            chain = chain.then(special_symbol(config));
        }
        if let Some(replacement) = &self.escape_whitespace {
            chain = chain.then(escape_whitespace(replacement.as_str()));
        }
        chain
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.special_symbols)?;

    match cli.command {
        Commands::Generate(args) => run_generate(args, config),
        Commands::Fixtures { fixtures } => {
            if cli.config.is_none() {
                anyhow::bail!("The fixtures command requires --config");
            }
            run_fixtures(&fixtures, config)
        }
    }
}

fn load_config(
    path: Option<&Path>,
    special_symbols: Option<String>,
) -> anyhow::Result<DatagenConfig> {
    let mut config = match path {
        Some(path) => DatagenConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => DatagenConfig::default(),
    };
    if let Some(symbols) = special_symbols {
        config = config.with_special_symbols(symbols);
        config.validate().context("Invalid --special-symbols")?;
    }
    Ok(config)
}

fn run_generate(args: GenerateArgs, config: DatagenConfig) -> anyhow::Result<()> {
    let length = args.length_spec()?;
    let vocabulary = args.vocabulary(&config);
    let modifiers = args.modifiers(&config);

    tracing::debug!(
        "Generating {} {:?} string(s) of length {} with {} modifier(s)",
        args.count,
        args.kind,
        length,
        modifiers.len()
    );

    let mut generator = StringGenerator::new(config);
    let values = generator
        .batch(&vocabulary, length, args.count)
        .context("Failed to generate strings")?;
    let values = modifiers
        .modify_all(generator.rng_mut(), &values)
        .context("Failed to apply modifiers")?;

    if args.json {
        println!("{}", serde_json::to_string(&values)?);
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}

fn run_fixtures(names: &[String], config: DatagenConfig) -> anyhow::Result<()> {
    let mut generator = StringGenerator::new(config);
    let output = generate_fixtures(&mut generator, names).context("Failed to generate fixtures")?;

    tracing::info!("Generated {} fixture(s)", output.len());
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
