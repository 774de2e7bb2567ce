//! Raw token kinds understood by the loader.
//!
//! The format is closed: any kind not listed here is a load error.

use crate::word::{AdjectiveFlag, NounFlag, PrefixFlag, RoleKind, VerbFlag};

/// A token kind in the word-definition stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordTag {
    /// `[OBJECT:...]`, ignored.
    Object,
    /// `[WORD:id]`
    Word,
    /// `[NOUN:...]`, `[PREFIX:...]`, `[VERB:...]`, `[ADJ:...]`
    Role(RoleKind),
    /// `[ADJ_DIST:n]`
    AdjectiveDistance,
    /// A flag on the current word's noun.
    Noun(NounFlag),
    /// A flag on the current word's prefix.
    Prefix(PrefixFlag),
    /// A flag on the current word's verb.
    Verb(VerbFlag),
    /// A flag on the current word's adjective.
    Adjective(AdjectiveFlag),
}

impl WordTag {
    /// Classifies a token kind.
    #[must_use]
    pub fn from_kind(kind: &str) -> Option<Self> {
        let tag = match kind {
            "OBJECT" => Self::Object,
            "WORD" => Self::Word,
            "NOUN" => Self::Role(RoleKind::Noun),
            "PREFIX" => Self::Role(RoleKind::Prefix),
            "VERB" => Self::Role(RoleKind::Verb),
            "ADJ" => Self::Role(RoleKind::Adjective),
            "ADJ_DIST" => Self::AdjectiveDistance,
            _ => {
                return NounFlag::from_raw(kind)
                    .map(Self::Noun)
                    .or_else(|| PrefixFlag::from_raw(kind).map(Self::Prefix))
                    .or_else(|| VerbFlag::from_raw(kind).map(Self::Verb))
                    .or_else(|| AdjectiveFlag::from_raw(kind).map(Self::Adjective));
            }
        };
        Some(tag)
    }
}

/// A token kind in a translation stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslationTag {
    /// `[OBJECT:...]`, ignored.
    Object,
    /// `[TRANSLATION:...]`, ignored.
    Translation,
    /// `[T_WORD:id:text]`
    Word,
}

impl TranslationTag {
    /// Classifies a token kind.
    #[must_use]
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "OBJECT" => Some(Self::Object),
            "TRANSLATION" => Some(Self::Translation),
            "T_WORD" => Some(Self::Word),
            _ => None,
        }
    }
}
