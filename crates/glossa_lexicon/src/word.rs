//! Word records and their optional grammatical roles.
//!
//! A [`Word`] has-a noun, prefix, verb and/or adjective record. Each role
//! carries its forms plus boolean flags saying where those forms may be
//! used when composing names.

use std::fmt;

use glossa_foundation::{Culture, Pool};

/// Declares a flag enum whose variants map one-to-one onto raw token kinds.
macro_rules! raw_flags {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $raw:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every flag, in the order they are written back out.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The raw token kind that sets this flag.
            #[must_use]
            pub fn raw_name(self) -> &'static str {
                match self {
                    $($name::$variant => $raw,)+
                }
            }

            /// Looks up a flag by its raw token kind.
            #[must_use]
            pub fn from_raw(kind: &str) -> Option<Self> {
                match kind {
                    $($raw => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

raw_flags! {
    /// Usage flags on a [`Noun`].
    NounFlag {
        /// "the X", singular.
        TheSingular => "THE_NOUN_SING",
        /// "the X", plural.
        ThePlural => "THE_NOUN_PLUR",
        /// "the X-compound", singular.
        TheCompoundSingular => "THE_COMPOUND_NOUN_SING",
        /// "the X-compound", plural.
        TheCompoundPlural => "THE_COMPOUND_NOUN_PLUR",
        /// "the Y of X", singular.
        OfSingular => "OF_NOUN_SING",
        /// "the Y of X", plural.
        OfPlural => "OF_NOUN_PLUR",
        /// Front half of a compound, singular.
        FrontCompoundSingular => "FRONT_COMPOUND_NOUN_SING",
        /// Front half of a compound, plural.
        FrontCompoundPlural => "FRONT_COMPOUND_NOUN_PLUR",
        /// Rear half of a compound, singular.
        RearCompoundSingular => "REAR_COMPOUND_NOUN_SING",
        /// Rear half of a compound, plural.
        RearCompoundPlural => "REAR_COMPOUND_NOUN_PLUR",
    }
}

raw_flags! {
    /// Usage flags on a [`Prefix`].
    PrefixFlag {
        /// Front half of a compound.
        FrontCompound => "FRONT_COMPOUND_PREFIX",
        /// "the X-compound".
        TheCompound => "THE_COMPOUND_PREFIX",
    }
}

raw_flags! {
    /// Usage flags on a [`Verb`].
    VerbFlag {
        /// Usable in both compound positions.
        Standard => "STANDARD_VERB",
    }
}

raw_flags! {
    /// Usage flags on an [`Adjective`].
    AdjectiveFlag {
        /// "the X-compound".
        TheCompound => "THE_COMPOUND_ADJ",
        /// Front half of a compound.
        FrontCompound => "FRONT_COMPOUND_ADJ",
        /// Rear half of a compound.
        RearCompound => "REAR_COMPOUND_ADJ",
    }
}

/// Which role record a token refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// [`Noun`]
    Noun,
    /// [`Prefix`]
    Prefix,
    /// [`Verb`]
    Verb,
    /// [`Adjective`]
    Adjective,
}

impl RoleKind {
    /// The raw token kind that declares this role.
    #[must_use]
    pub fn raw_name(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Prefix => "PREFIX",
            Self::Verb => "VERB",
            Self::Adjective => "ADJ",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_name())
    }
}

/// Noun role: singular and plural forms. Either may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Noun {
    /// Singular form, e.g. "axe".
    pub singular: String,
    /// Plural form, e.g. "axes".
    pub plural: String,

    /// `[THE_NOUN_SING]`
    pub the_singular: bool,
    /// `[THE_NOUN_PLUR]`
    pub the_plural: bool,
    /// `[THE_COMPOUND_NOUN_SING]`
    pub the_compound_singular: bool,
    /// `[THE_COMPOUND_NOUN_PLUR]`
    pub the_compound_plural: bool,
    /// `[OF_NOUN_SING]`
    pub of_singular: bool,
    /// `[OF_NOUN_PLUR]`
    pub of_plural: bool,
    /// `[FRONT_COMPOUND_NOUN_SING]`: the singular can start a compound.
    pub front_compound_singular: bool,
    /// `[FRONT_COMPOUND_NOUN_PLUR]`: the plural can start a compound.
    pub front_compound_plural: bool,
    /// `[REAR_COMPOUND_NOUN_SING]`: the singular can end a compound.
    pub rear_compound_singular: bool,
    /// `[REAR_COMPOUND_NOUN_PLUR]`: the plural can end a compound.
    pub rear_compound_plural: bool,
}

impl Noun {
    /// Creates a noun with no flags set.
    #[must_use]
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
            ..Self::default()
        }
    }

    /// Builder method to set a flag.
    #[must_use]
    pub fn with(mut self, flag: NounFlag) -> Self {
        self.set(flag);
        self
    }

    /// Sets a flag.
    pub fn set(&mut self, flag: NounFlag) {
        *self.slot(flag) = true;
    }

    /// Returns whether a flag is set.
    #[must_use]
    pub fn has(&self, flag: NounFlag) -> bool {
        match flag {
            NounFlag::TheSingular => self.the_singular,
            NounFlag::ThePlural => self.the_plural,
            NounFlag::TheCompoundSingular => self.the_compound_singular,
            NounFlag::TheCompoundPlural => self.the_compound_plural,
            NounFlag::OfSingular => self.of_singular,
            NounFlag::OfPlural => self.of_plural,
            NounFlag::FrontCompoundSingular => self.front_compound_singular,
            NounFlag::FrontCompoundPlural => self.front_compound_plural,
            NounFlag::RearCompoundSingular => self.rear_compound_singular,
            NounFlag::RearCompoundPlural => self.rear_compound_plural,
        }
    }

    fn slot(&mut self, flag: NounFlag) -> &mut bool {
        match flag {
            NounFlag::TheSingular => &mut self.the_singular,
            NounFlag::ThePlural => &mut self.the_plural,
            NounFlag::TheCompoundSingular => &mut self.the_compound_singular,
            NounFlag::TheCompoundPlural => &mut self.the_compound_plural,
            NounFlag::OfSingular => &mut self.of_singular,
            NounFlag::OfPlural => &mut self.of_plural,
            NounFlag::FrontCompoundSingular => &mut self.front_compound_singular,
            NounFlag::FrontCompoundPlural => &mut self.front_compound_plural,
            NounFlag::RearCompoundSingular => &mut self.rear_compound_singular,
            NounFlag::RearCompoundPlural => &mut self.rear_compound_plural,
        }
    }
}

/// Prefix role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prefix {
    /// The prefix text, e.g. "un".
    pub prefix: String,

    /// `[FRONT_COMPOUND_PREFIX]`
    pub front_compound: bool,
    /// `[THE_COMPOUND_PREFIX]`
    pub the_compound: bool,
}

impl Prefix {
    /// Creates a prefix with no flags set.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Builder method to set a flag.
    #[must_use]
    pub fn with(mut self, flag: PrefixFlag) -> Self {
        self.set(flag);
        self
    }

    /// Sets a flag.
    pub fn set(&mut self, flag: PrefixFlag) {
        match flag {
            PrefixFlag::FrontCompound => self.front_compound = true,
            PrefixFlag::TheCompound => self.the_compound = true,
        }
    }

    /// Returns whether a flag is set.
    #[must_use]
    pub fn has(&self, flag: PrefixFlag) -> bool {
        match flag {
            PrefixFlag::FrontCompound => self.front_compound,
            PrefixFlag::TheCompound => self.the_compound,
        }
    }
}

/// Verb role: five inflected forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verb {
    /// First-person present, e.g. "hew".
    pub present_first: String,
    /// Third-person present, e.g. "hews".
    pub present_third: String,
    /// Preterite, e.g. "hewed".
    pub preterite: String,
    /// Past participle, e.g. "hewn".
    pub past_participle: String,
    /// Present participle, e.g. "hewing".
    pub present_participle: String,

    /// Eligible for compounding in both front and rear position.
    pub standard: bool,
}

impl Verb {
    /// Creates a verb from its forms in raw field order.
    #[must_use]
    pub fn new(forms: [&str; 5]) -> Self {
        let [present_first, present_third, preterite, past_participle, present_participle] =
            forms.map(str::to_string);
        Self {
            present_first,
            present_third,
            preterite,
            past_participle,
            present_participle,
            standard: false,
        }
    }

    /// Builder method to set a flag.
    #[must_use]
    pub fn with(mut self, flag: VerbFlag) -> Self {
        self.set(flag);
        self
    }

    /// Sets a flag.
    pub fn set(&mut self, flag: VerbFlag) {
        match flag {
            VerbFlag::Standard => self.standard = true,
        }
    }

    /// Returns whether a flag is set.
    #[must_use]
    pub fn has(&self, flag: VerbFlag) -> bool {
        match flag {
            VerbFlag::Standard => self.standard,
        }
    }

    /// The forms in raw field order.
    #[must_use]
    pub fn forms(&self) -> [&str; 5] {
        [
            &self.present_first,
            &self.present_third,
            &self.preterite,
            &self.past_participle,
            &self.present_participle,
        ]
    }

    /// The forms a standard verb contributes to a compound.
    #[must_use]
    pub fn compound_forms(&self) -> [&str; 3] {
        [&self.present_first, &self.present_third, &self.preterite]
    }
}

/// Adjective role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjective {
    /// The adjective text.
    pub adjective: String,
    /// Semantic distance, from `[ADJ_DIST]`.
    pub distance: i32,

    /// `[THE_COMPOUND_ADJ]`
    pub the_compound: bool,
    /// `[FRONT_COMPOUND_ADJ]`
    pub front_compound: bool,
    /// `[REAR_COMPOUND_ADJ]`
    pub rear_compound: bool,
}

impl Adjective {
    /// Creates an adjective with distance 0 and no flags set.
    #[must_use]
    pub fn new(adjective: impl Into<String>) -> Self {
        Self {
            adjective: adjective.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the distance.
    #[must_use]
    pub fn with_distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }

    /// Builder method to set a flag.
    #[must_use]
    pub fn with(mut self, flag: AdjectiveFlag) -> Self {
        self.set(flag);
        self
    }

    /// Sets a flag.
    pub fn set(&mut self, flag: AdjectiveFlag) {
        match flag {
            AdjectiveFlag::TheCompound => self.the_compound = true,
            AdjectiveFlag::FrontCompound => self.front_compound = true,
            AdjectiveFlag::RearCompound => self.rear_compound = true,
        }
    }

    /// Returns whether a flag is set.
    #[must_use]
    pub fn has(&self, flag: AdjectiveFlag) -> bool {
        match flag {
            AdjectiveFlag::TheCompound => self.the_compound,
            AdjectiveFlag::FrontCompound => self.front_compound,
            AdjectiveFlag::RearCompound => self.rear_compound,
        }
    }
}

/// Per-culture renderings of a word. `None` means none was supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translation {
    /// From `language_DWARF`.
    pub dwarf: Option<String>,
    /// From `language_HUMAN`.
    pub human: Option<String>,
    /// From `language_GOBLIN`.
    pub goblin: Option<String>,
    /// From `language_ELF`.
    pub elf: Option<String>,
}

impl Translation {
    /// Returns the translation for a culture, if supplied.
    #[must_use]
    pub fn get(&self, culture: Culture) -> Option<&str> {
        match culture {
            Culture::Dwarf => self.dwarf.as_deref(),
            Culture::Human => self.human.as_deref(),
            Culture::Goblin => self.goblin.as_deref(),
            Culture::Elf => self.elf.as_deref(),
        }
    }

    /// Sets the translation for a culture, replacing any earlier one.
    pub fn set(&mut self, culture: Culture, text: impl Into<String>) {
        let slot = match culture {
            Culture::Dwarf => &mut self.dwarf,
            Culture::Human => &mut self.human,
            Culture::Goblin => &mut self.goblin,
            Culture::Elf => &mut self.elf,
        };
        *slot = Some(text.into());
    }
}

/// A lexical entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Word {
    /// Identifier from `[WORD:id]`, unique within a lexicon.
    pub id: String,
    /// Noun role, if declared.
    pub noun: Option<Noun>,
    /// Prefix role, if declared.
    pub prefix: Option<Prefix>,
    /// Verb role, if declared.
    pub verb: Option<Verb>,
    /// Adjective role, if declared.
    pub adjective: Option<Adjective>,
    /// Per-culture renderings.
    pub translation: Translation,
}

impl Word {
    /// Creates a word with no roles and no translations.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder method to attach a noun role.
    #[must_use]
    pub fn with_noun(mut self, noun: Noun) -> Self {
        self.noun = Some(noun);
        self
    }

    /// Builder method to attach a prefix role.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Builder method to attach a verb role.
    #[must_use]
    pub fn with_verb(mut self, verb: Verb) -> Self {
        self.verb = Some(verb);
        self
    }

    /// Builder method to attach an adjective role.
    #[must_use]
    pub fn with_adjective(mut self, adjective: Adjective) -> Self {
        self.adjective = Some(adjective);
        self
    }

    /// Builder method to set a translation.
    #[must_use]
    pub fn with_translation(mut self, culture: Culture, text: impl Into<String>) -> Self {
        self.translation.set(culture, text);
        self
    }

    /// Returns whether this word has the given role.
    #[must_use]
    pub fn has_role(&self, role: RoleKind) -> bool {
        match role {
            RoleKind::Noun => self.noun.is_some(),
            RoleKind::Prefix => self.prefix.is_some(),
            RoleKind::Verb => self.verb.is_some(),
            RoleKind::Adjective => self.adjective.is_some(),
        }
    }

    /// Whether the word belongs in the front compound pool.
    #[must_use]
    pub fn is_front_compound(&self) -> bool {
        self.noun
            .as_ref()
            .is_some_and(|n| n.front_compound_singular || n.front_compound_plural)
            || self.prefix.as_ref().is_some_and(|p| p.front_compound)
            || self.is_standard_verb()
            || self.adjective.as_ref().is_some_and(|a| a.front_compound)
    }

    /// Whether the word belongs in the rear compound pool.
    #[must_use]
    pub fn is_rear_compound(&self) -> bool {
        self.noun
            .as_ref()
            .is_some_and(|n| n.rear_compound_singular || n.rear_compound_plural)
            || self.is_standard_verb()
    }

    /// Whether the word belongs in the given pool.
    #[must_use]
    pub fn in_pool(&self, pool: Pool) -> bool {
        match pool {
            Pool::Noun => self.noun.is_some(),
            Pool::Front => self.is_front_compound(),
            Pool::Rear => self.is_rear_compound(),
        }
    }

    fn is_standard_verb(&self) -> bool {
        self.verb.as_ref().is_some_and(|v| v.standard)
    }
}
