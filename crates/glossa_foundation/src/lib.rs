//! Core types shared by every Glossa layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Culture`] - The four fixed translation slots
//! - [`Pool`] - Names for the lexicon's selection pools
//! - [`RandomSource`] - The abstract uniform integer source the composer draws from

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod culture;
pub mod error;
pub mod pool;
pub mod random;

pub use culture::{Culture, ParseCultureError};
pub use error::{Error, ErrorContext, ErrorKind};
pub use pool::Pool;
pub use random::{RandomSource, RngSource};

/// Result type alias using Glossa's Error.
pub type Result<T> = std::result::Result<T, Error>;
