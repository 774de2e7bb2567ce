//! One-time lexicon initialization.

use std::sync::OnceLock;

use glossa_foundation::{Error, Result};
use tracing::debug;

use crate::lexicon::Lexicon;

/// Holds the outcome of a single load attempt.
///
/// The first caller of [`get_or_load`](Self::get_or_load) runs the loader;
/// concurrent callers block until it finishes. Every caller then observes
/// the same lexicon or the same error. A failed load is never retried.
#[derive(Debug, Default)]
pub struct LexiconCell {
    outcome: OnceLock<Result<Lexicon>>,
}

impl LexiconCell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    /// Returns the loaded lexicon, running `load` if no attempt has been made.
    ///
    /// # Errors
    /// Returns the error from the one load attempt, whichever caller made it.
    pub fn get_or_load<F>(&self, load: F) -> std::result::Result<&Lexicon, &Error>
    where
        F: FnOnce() -> Result<Lexicon>,
    {
        self.outcome
            .get_or_init(|| {
                debug!("running one-time lexicon load");
                load()
            })
            .as_ref()
    }

    /// Returns the lexicon if a load has succeeded.
    #[must_use]
    pub fn get(&self) -> Option<&Lexicon> {
        self.outcome.get().and_then(|r| r.as_ref().ok())
    }

    /// Returns the outcome of the load attempt, if one has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<std::result::Result<&Lexicon, &Error>> {
        self.outcome.get().map(|r| r.as_ref())
    }
}
