//! The process-wide lexicon.
//!
//! Most callers should build a [`Lexicon`] and pass it down explicitly.
//! This handle exists for programs that want exactly one lexicon for their
//! whole lifetime and a single place to load it.

use glossa_foundation::{Error, Result};

use crate::cell::LexiconCell;
use crate::lexicon::Lexicon;

static LEXICON: LexiconCell = LexiconCell::new();

/// Loads the process-wide lexicon on first call and returns the outcome.
///
/// Later calls ignore `load` and return the first outcome, success or failure.
///
/// # Errors
/// Returns the error from the first load attempt.
pub fn init<F>(load: F) -> std::result::Result<&'static Lexicon, &'static Error>
where
    F: FnOnce() -> Result<Lexicon>,
{
    LEXICON.get_or_load(load)
}

/// Returns the process-wide lexicon if it loaded successfully.
#[must_use]
pub fn get() -> Option<&'static Lexicon> {
    LEXICON.get()
}
