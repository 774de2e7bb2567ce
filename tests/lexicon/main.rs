//! Integration tests for the glossa_lexicon crate.
//!
//! Tests for loading lexicons from raws:
//! - Word and translation passes
//! - Pool membership
//! - Writing a lexicon back out and reloading it

mod loader_tests;
mod pool_tests;
