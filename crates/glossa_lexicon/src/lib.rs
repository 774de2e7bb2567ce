//! Lexicon model and raws loader.
//!
//! This crate turns the word-definition and translation raws into an
//! immutable [`Lexicon`], partitioned into the three selection pools the
//! name composer draws from.
//!
//! # Architecture
//!
//! ```text
//! language_words.txt      language_DWARF.txt ... language_ELF.txt
//!          │                        │
//!          ▼                        ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │ WORD PASS       │ ──▶ │ TRANSLATION     │  fills one slot per culture
//! │ (ParserState)   │     │ PASS            │
//! └─────────────────┘     └─────────────────┘
//!                                   │
//!                                   ▼
//!                         ┌─────────────────┐
//!                         │ POOLS           │  nouns / front / rear
//!                         └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`word`] - Word records, role records, and their flags
//! - [`tag`] - Token kinds the loader recognizes
//! - [`loader`] - The two-pass raws loader
//! - [`lexicon`] - The immutable result and its pools
//! - [`config`] - Loader options
//! - [`cell`] - One-time load guard
//! - [`global`] - Process-wide lexicon handle
//! - [`serialize`] - Writes a lexicon back out as raws

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cell;
pub mod config;
pub mod global;
pub mod lexicon;
pub mod loader;
pub mod serialize;
pub mod tag;
pub mod word;

pub use cell::LexiconCell;
pub use config::LoaderConfig;
pub use lexicon::Lexicon;
pub use loader::LexiconLoader;
pub use word::{
    Adjective, AdjectiveFlag, Noun, NounFlag, Prefix, PrefixFlag, RoleKind, Translation, Verb,
    VerbFlag, Word,
};
