//! Integration tests for the glossa_raws crate.
//!
//! Tests for the bracketed-token format:
//! - Tokenization of realistic raw files
//! - Writing tokens back out

mod tokenizer_tests;
mod writer_tests;
