//! Compound name generation.
//!
//! A name is a noun followed by a two-fragment compound, rendered twice:
//! once from the English forms and once from a culture's translations.
//!
//! ```text
//!  first (noun pool)   front (front pool)   rear (rear pool)
//!        │                    │                   │
//!        ▼                    ▼                   ▼
//!      "axe"          "axe" | "hew" | ...   "caves" | "hewed" | ...
//!        └──────── "Axe Hewcaves" / "Dolil Kolzon" ───────┘
//! ```
//!
//! # Modules
//!
//! - [`composer`] - Draws the three words and assembles the name pair
//! - [`title`] - Title casing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod composer;
pub mod title;

pub use composer::{
    Name, NameComposer, NameParts, compose_parts, front_candidates, generate_name, rear_candidates,
};
pub use title::title_case;
