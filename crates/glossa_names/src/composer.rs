//! Name composition.
//!
//! Every name is drawn in the same order: the first word, the front word,
//! the rear word, the singular/plural choice, the front fragment, then the
//! rear fragment. A source that replays the same integers therefore replays
//! the same name.

use std::fmt;

use glossa_foundation::{Culture, Error, Pool, RandomSource, Result};
use glossa_lexicon::{Lexicon, Word};
use tracing::trace;

/// A composed name: English-style and translated, both title-cased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    /// Built from the English forms, e.g. "Axe Hewcaves".
    pub english: String,
    /// Built from one culture's translations, e.g. "Dolil Kolzon".
    pub translated: String,
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.english, self.translated)
    }
}

/// The three words a name is built from.
#[derive(Clone, Copy, Debug)]
pub struct NameParts<'a> {
    /// Supplies the first, standalone noun.
    pub first: &'a Word,
    /// Supplies the front half of the compound.
    pub front: &'a Word,
    /// Supplies the rear half of the compound.
    pub rear: &'a Word,
}

/// Composes names from a lexicon whose three pools are non-empty.
#[derive(Clone, Copy, Debug)]
pub struct NameComposer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> NameComposer<'a> {
    /// Creates a composer over `lexicon`.
    ///
    /// # Errors
    /// Returns an empty pool error naming the first empty pool.
    pub fn new(lexicon: &'a Lexicon) -> Result<Self> {
        if let Some(pool) = Pool::ALL.into_iter().find(|p| lexicon.pool_len(*p) == 0) {
            return Err(Error::empty_pool(pool));
        }
        Ok(Self { lexicon })
    }

    /// The lexicon this composer draws from.
    #[must_use]
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Draws one word from each pool, independently and with replacement.
    ///
    /// # Errors
    /// Returns a source out of range error if the source returns an index
    /// past the end of a pool.
    pub fn parts(&self, source: &mut impl RandomSource) -> Result<NameParts<'a>> {
        Ok(NameParts {
            first: self.draw(Pool::Noun, source)?,
            front: self.draw(Pool::Front, source)?,
            rear: self.draw(Pool::Rear, source)?,
        })
    }

    /// Draws three words and composes a name from them.
    ///
    /// # Errors
    /// Returns an empty candidate error if a drawn word has no usable form
    /// for its position.
    pub fn compose(&self, culture: Culture, source: &mut impl RandomSource) -> Result<Name> {
        let parts = self.parts(source)?;
        compose_parts(&parts, culture, source)
    }

    fn draw(&self, pool: Pool, source: &mut impl RandomSource) -> Result<&'a Word> {
        let bound = self.lexicon.pool_len(pool);
        if bound == 0 {
            return Err(Error::empty_pool(pool));
        }
        let n = source.below(bound);
        self.lexicon
            .pool_word(pool, n)
            .ok_or_else(|| Error::source_out_of_range(n, bound))
    }
}

/// Composes a name from already-drawn parts.
///
/// # Errors
/// Returns an empty candidate error if `first` has no noun, or if `front`
/// or `rear` has no non-empty form eligible for its position.
pub fn compose_parts(
    parts: &NameParts<'_>,
    culture: Culture,
    source: &mut impl RandomSource,
) -> Result<Name> {
    let noun = parts
        .first
        .noun
        .as_ref()
        .ok_or_else(|| Error::empty_candidates(&parts.first.id, Pool::Noun))?;

    let prefer_singular = source.below(3) <= 1;
    let first = if prefer_singular && !noun.singular.is_empty() {
        &noun.singular
    } else if !noun.plural.is_empty() {
        &noun.plural
    } else {
        &noun.singular
    };

    let mut english = format!("{first} ");
    let mut translated = format!("{} ", translation(parts.first, culture));

    english.push_str(pick(&front_candidates(parts.front), parts.front, Pool::Front, source)?);
    translated.push_str(translation(parts.front, culture));

    english.push_str(pick(&rear_candidates(parts.rear), parts.rear, Pool::Rear, source)?);
    translated.push_str(translation(parts.rear, culture));

    let name = Name {
        english: crate::title::title_case(&english),
        translated: crate::title::title_case(&translated),
    };
    trace!(
        first = %parts.first.id,
        front = %parts.front.id,
        rear = %parts.rear.id,
        %name,
        "composed name"
    );
    Ok(name)
}

/// Draws three words from `lexicon` and composes a name.
///
/// # Errors
/// Returns an empty pool error if any pool is empty, otherwise as for
/// [`NameComposer::compose`].
pub fn generate_name(
    lexicon: &Lexicon,
    culture: Culture,
    source: &mut impl RandomSource,
) -> Result<Name> {
    NameComposer::new(lexicon)?.compose(culture, source)
}

/// Non-empty forms of `word` usable as the front of a compound, in draw order.
#[must_use]
pub fn front_candidates(word: &Word) -> Vec<&str> {
    let mut candidates = Vec::new();
    if let Some(noun) = &word.noun {
        if noun.front_compound_singular {
            candidates.push(noun.singular.as_str());
        }
        if noun.front_compound_plural {
            candidates.push(noun.plural.as_str());
        }
    }
    if let Some(prefix) = word.prefix.as_ref().filter(|p| p.front_compound) {
        candidates.push(prefix.prefix.as_str());
    }
    if let Some(verb) = word.verb.as_ref().filter(|v| v.standard) {
        candidates.extend(verb.compound_forms());
    }
    if let Some(adjective) = word.adjective.as_ref().filter(|a| a.front_compound) {
        candidates.push(adjective.adjective.as_str());
    }
    candidates.retain(|c| !c.is_empty());
    candidates
}

/// Non-empty forms of `word` usable as the rear of a compound, in draw order.
#[must_use]
pub fn rear_candidates(word: &Word) -> Vec<&str> {
    let mut candidates = Vec::new();
    if let Some(noun) = &word.noun {
        if noun.rear_compound_singular {
            candidates.push(noun.singular.as_str());
        }
        if noun.rear_compound_plural {
            candidates.push(noun.plural.as_str());
        }
    }
    if let Some(verb) = word.verb.as_ref().filter(|v| v.standard) {
        candidates.extend(verb.compound_forms());
    }
    candidates.retain(|c| !c.is_empty());
    candidates
}

fn pick<'w>(
    candidates: &[&'w str],
    word: &Word,
    position: Pool,
    source: &mut impl RandomSource,
) -> Result<&'w str> {
    if candidates.is_empty() {
        return Err(Error::empty_candidates(&word.id, position));
    }
    let n = source.below(candidates.len());
    candidates
        .get(n)
        .copied()
        .ok_or_else(|| Error::source_out_of_range(n, candidates.len()))
}

fn translation(word: &Word, culture: Culture) -> &str {
    word.translation.get(culture).unwrap_or_default()
}
