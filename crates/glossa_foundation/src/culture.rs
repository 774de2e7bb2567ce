//! The fixed set of translation cultures.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A culture with its own translation slot on every word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Culture {
    /// Dwarven.
    Dwarf,
    /// Human.
    Human,
    /// Goblin.
    Goblin,
    /// Elven.
    Elf,
}

impl Culture {
    /// Every culture, in the order their translation streams are loaded.
    pub const ALL: [Culture; 4] = [Culture::Dwarf, Culture::Human, Culture::Goblin, Culture::Elf];

    /// The upper-case label used in raw file names and `[TRANSLATION:...]` tokens.
    #[must_use]
    pub fn raw_name(self) -> &'static str {
        match self {
            Self::Dwarf => "DWARF",
            Self::Human => "HUMAN",
            Self::Goblin => "GOBLIN",
            Self::Elf => "ELF",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dwarf => write!(f, "dwarf"),
            Self::Human => write!(f, "human"),
            Self::Goblin => write!(f, "goblin"),
            Self::Elf => write!(f, "elf"),
        }
    }
}

/// Returned when a string names no known culture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown culture: {0:?}")]
pub struct ParseCultureError(pub String);

impl FromStr for Culture {
    type Err = ParseCultureError;

    /// Parses a culture name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.raw_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCultureError(s.to_string()))
    }
}
