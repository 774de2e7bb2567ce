//! Error types for the Glossa system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::culture::Culture;
use crate::pool::Pool;

/// The main error type for Glossa operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    ///
    /// Context already present is kept and only missing fields are filled in,
    /// so the innermost (most precise) location wins.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(match self.context.take() {
            Some(existing) => existing.merge(context),
            None => context,
        });
        self
    }

    /// Creates a stream error from an underlying I/O failure.
    #[must_use]
    pub fn stream(err: io::Error) -> Self {
        Self::new(ErrorKind::Stream(err))
    }

    /// Creates a malformed token error.
    #[must_use]
    pub fn malformed_token(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken {
            token: token.into(),
            reason: reason.into(),
        })
    }

    /// Creates a malformed numeric field error.
    #[must_use]
    pub fn malformed_number(value: impl Into<String>, source: ParseIntError) -> Self {
        Self::new(ErrorKind::MalformedNumber {
            value: value.into(),
            source,
        })
    }

    /// Creates a missing translation target error.
    #[must_use]
    pub fn missing_translation(id: impl Into<String>, culture: Culture) -> Self {
        Self::new(ErrorKind::MissingTranslation {
            id: id.into(),
            culture,
        })
    }

    /// Creates an empty selection pool error.
    #[must_use]
    pub fn empty_pool(pool: Pool) -> Self {
        Self::new(ErrorKind::EmptyPool(pool))
    }

    /// Creates an empty candidate set error.
    #[must_use]
    pub fn empty_candidates(word: impl Into<String>, position: Pool) -> Self {
        Self::new(ErrorKind::EmptyCandidates {
            word: word.into(),
            position,
        })
    }

    /// Creates an error for a random source that broke its contract.
    #[must_use]
    pub fn source_out_of_range(drawn: usize, bound: usize) -> Self {
        Self::new(ErrorKind::SourceOutOfRange { drawn, bound })
    }

    /// Returns true if this error came from a failed load rather than composition.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Stream(_)
                | ErrorKind::MalformedToken { .. }
                | ErrorKind::MalformedNumber { .. }
                | ErrorKind::MissingTranslation { .. }
        )
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::stream(err)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The underlying stream failed for a reason other than end of input.
    #[error("stream error: {0}")]
    Stream(#[source] io::Error),

    /// Unrecognized token kind, missing fields, or a flag with no role to apply to.
    #[error("malformed token [{token}]: {reason}")]
    MalformedToken {
        /// The token text, fields rejoined with `:`.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A numeric field did not parse as an integer.
    #[error("malformed number {value:?}: {source}")]
    MalformedNumber {
        /// The offending field text.
        value: String,
        /// The integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A translation referenced a word that was never declared.
    #[error("{culture} translation for undeclared word {id:?}")]
    MissingTranslation {
        /// The word identifier that was looked up.
        id: String,
        /// The culture whose stream referenced it.
        culture: Culture,
    },

    /// A selection pool the composer draws from has no words.
    #[error("{0} pool is empty")]
    EmptyPool(Pool),

    /// A drawn word produced no usable form for its part of the name.
    #[error("word {word:?} has no usable {position} form")]
    EmptyCandidates {
        /// The word that was drawn.
        word: String,
        /// Which part of the name was being built.
        position: Pool,
    },

    /// A random source returned an index outside the bound it was given.
    #[error("random source returned {drawn} for bound {bound}")]
    SourceOutOfRange {
        /// The index the source returned.
        drawn: usize,
        /// The exclusive upper bound it was asked for.
        bound: usize,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Stream name (file path or culture label).
    pub source: Option<String>,
    /// 1-based ordinal of the offending token within its stream.
    pub token: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stream name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the token ordinal.
    #[must_use]
    pub fn with_token(mut self, ordinal: usize) -> Self {
        self.token = Some(ordinal);
        self
    }

    fn merge(self, outer: Self) -> Self {
        Self {
            source: self.source.or(outer.source),
            token: self.token.or(outer.token),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.token) {
            (Some(source), Some(token)) => write!(f, "at {source}, token {token}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(token)) => write!(f, "at token {token}"),
            (None, None) => Ok(()),
        }
    }
}
