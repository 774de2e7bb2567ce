//! Selection pool names.

use std::fmt;

/// One of the lexicon's three order-preserving selection pools.
///
/// `Front` and `Rear` double as the two halves of a compound when an error
/// needs to say which fragment could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pool {
    /// Words with a noun role; source of the first name part.
    Noun,
    /// Words usable as the front half of a compound.
    Front,
    /// Words usable as the rear half of a compound.
    Rear,
}

impl Pool {
    /// All pools, in draw order.
    pub const ALL: [Pool; 3] = [Pool::Noun, Pool::Front, Pool::Rear];
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::Front => write!(f, "front"),
            Self::Rear => write!(f, "rear"),
        }
    }
}
