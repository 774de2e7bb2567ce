//! Runtime configuration.

use std::path::PathBuf;

use glossa_foundation::{Culture, ParseCultureError};
use glossa_lexicon::LoaderConfig;
use thiserror::Error;

/// Settings for one run of the `glossa` binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory containing `objects/language_*.txt`.
    pub raws: PathBuf,
    /// Culture whose translations fill the second name.
    pub culture: Culture,
    /// Number of names to generate.
    pub count: usize,
    /// Seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Reject compound flags on empty forms while loading.
    pub strict: bool,
    /// Print the loaded word definitions instead of names.
    pub dump: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            raws: PathBuf::from("raws"),
            culture: Culture::Dwarf,
            count: 1,
            seed: None,
            strict: false,
            dump: false,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the raws directory.
    #[must_use]
    pub fn with_raws(mut self, raws: impl Into<PathBuf>) -> Self {
        self.raws = raws.into();
        self
    }

    /// Builder method to set the culture.
    #[must_use]
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    /// Builder method to set the name count.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to enable/disable strict loading.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to enable/disable dumping raws.
    #[must_use]
    pub fn with_dump(mut self, dump: bool) -> Self {
        self.dump = dump;
        self
    }

    /// The loader options implied by this configuration.
    #[must_use]
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new().with_strict_compound_forms(self.strict)
    }
}

/// A command-line argument could not be turned into configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An option that takes a value was last on the line.
    #[error("{0} requires a value")]
    MissingValue(String),

    /// A numeric option got something else.
    #[error("invalid {option} value: {value}")]
    InvalidNumber {
        /// The option name.
        option: String,
        /// What was supplied.
        value: String,
    },

    /// `--culture` named no known culture.
    #[error(transparent)]
    UnknownCulture(#[from] ParseCultureError),

    /// An option that does not exist.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load raws and generate (or dump).
    Run(RuntimeConfig),
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Parses command-line arguments, not including the program name.
///
/// # Errors
/// Returns a [`ConfigError`] for unknown options and bad or missing values.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RuntimeConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--strict" => config.strict = true,
            "--dump" => config.dump = true,
            "-r" | "--raws" => config.raws = PathBuf::from(value(&arg, args.next())?),
            "-c" | "--culture" => config.culture = value(&arg, args.next())?.parse()?,
            "-n" | "--count" => config.count = number(&arg, args.next())?,
            "-s" | "--seed" => config.seed = Some(number(&arg, args.next())?),
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
    }

    Ok(Command::Run(config))
}

fn value(option: &str, next: Option<String>) -> Result<String, ConfigError> {
    next.ok_or_else(|| ConfigError::MissingValue(option.to_string()))
}

fn number<T: std::str::FromStr>(option: &str, next: Option<String>) -> Result<T, ConfigError> {
    let raw = value(option, next)?;
    raw.parse().map_err(|_| ConfigError::InvalidNumber {
        option: option.to_string(),
        value: raw,
    })
}
