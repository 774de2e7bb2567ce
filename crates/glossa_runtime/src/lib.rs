//! Directory loading, configuration, and CLI support for Glossa.
//!
//! This crate provides:
//! - [`RawsDirectory`] - Locates and opens the raw files under a root directory
//! - [`RuntimeConfig`] - Settings for a name-generation run
//! - [`generate_names`] - Composes a batch of names from a loaded lexicon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod sources;

pub use config::{Command, ConfigError, RuntimeConfig, parse_args};
pub use sources::RawsDirectory;

use glossa_foundation::{RandomSource, Result, RngSource};
use glossa_lexicon::Lexicon;
use glossa_names::{Name, NameComposer};

/// Composes `config.count` names using the configured culture and seed.
///
/// # Errors
/// Returns the first composition error. Earlier names are discarded.
pub fn generate_names(lexicon: &Lexicon, config: &RuntimeConfig) -> Result<Vec<Name>> {
    match config.seed {
        Some(seed) => compose_batch(lexicon, config, &mut RngSource::seeded(seed)),
        None => compose_batch(lexicon, config, &mut RngSource::from_entropy()),
    }
}

fn compose_batch(
    lexicon: &Lexicon,
    config: &RuntimeConfig,
    source: &mut impl RandomSource,
) -> Result<Vec<Name>> {
    let composer = NameComposer::new(lexicon)?;
    (0..config.count)
        .map(|_| composer.compose(config.culture, source))
        .collect()
}
