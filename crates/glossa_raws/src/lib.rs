//! Tokenizer and writer for the bracketed raws format.
//!
//! Raws are plain text with tokens of the form `[FIELD1:FIELD2:...]`
//! scattered through it. Everything outside brackets is ignored.
//!
//! ```text
//! language_words
//!
//! [OBJECT:LANGUAGE]
//!
//! [WORD:AXE]
//!     [NOUN:axe:axes]
//!         [FRONT_COMPOUND_NOUN_SING]
//! ```
//!
//! # Modules
//!
//! - [`token`] - A single bracketed token and its fields
//! - [`tokenizer`] - Lazy token stream over any `BufRead`
//! - [`writer`] - Emits tokens back as raws text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod token;
pub mod tokenizer;
pub mod writer;

pub use token::Token;
pub use tokenizer::RawsTokenizer;
pub use writer::RawsWriter;
