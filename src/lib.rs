//! Glossa - lexicon loader and compound name generator
//!
//! This crate re-exports all layers of the Glossa system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: glossa_runtime    - Raws directory layout, configuration, CLI
//! Layer 2: glossa_names      - Name composer, title casing
//! Layer 1: glossa_lexicon    - Word model, loader, selection pools
//!          glossa_raws       - Bracketed-token tokenizer and writer
//! Layer 0: glossa_foundation - Core types (Error, Culture, RandomSource)
//! ```

pub use glossa_foundation as foundation;
pub use glossa_lexicon as lexicon;
pub use glossa_names as names;
pub use glossa_raws as raws;
pub use glossa_runtime as runtime;
