//! The loaded, immutable lexicon and its selection pools.

use std::collections::HashMap;
use std::io::BufRead;

use glossa_foundation::{Culture, Error, Pool, Result};

use crate::loader::LexiconLoader;
use crate::word::Word;

/// Words in declaration order, indexed by ID, partitioned into pools.
///
/// There is no mutation path after construction; share it by reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<Word>,
    index: HashMap<String, usize>,
    nouns: Vec<usize>,
    fronts: Vec<usize>,
    rears: Vec<usize>,
}

impl Lexicon {
    /// Loads a lexicon from raws with the default loader configuration.
    ///
    /// # Errors
    /// See [`LexiconLoader::load`].
    pub fn from_raws<W, I, T>(words: W, translations: I) -> Result<Self>
    where
        W: BufRead,
        I: IntoIterator<Item = (Culture, T)>,
        T: BufRead,
    {
        LexiconLoader::default().load(words, translations)
    }

    /// Builds a lexicon from already-constructed words, in the given order.
    ///
    /// # Errors
    /// Returns a malformed token error if two words share an ID.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let words: Vec<Word> = words.into_iter().collect();
        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.id.clone(), i).is_some() {
                return Err(Error::malformed_token(
                    format!("WORD:{}", word.id),
                    "word declared twice",
                ));
            }
        }
        Ok(Self::assemble(words, index))
    }

    /// Partitions words into pools. `index` must map every ID to its position.
    pub(crate) fn assemble(words: Vec<Word>, index: HashMap<String, usize>) -> Self {
        let members = |pool: Pool| -> Vec<usize> {
            words
                .iter()
                .enumerate()
                .filter(|(_, w)| w.in_pool(pool))
                .map(|(i, _)| i)
                .collect()
        };
        let nouns = members(Pool::Noun);
        let fronts = members(Pool::Front);
        let rears = members(Pool::Rear);

        Self {
            words,
            index,
            nouns,
            fronts,
            rears,
        }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up a word by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Word> {
        self.index.get(id).map(|&i| &self.words[i])
    }

    /// Returns true if a word with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All words in declaration order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterates a pool's words in declaration order.
    pub fn pool(&self, pool: Pool) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.indices(pool).iter().map(|&i| &self.words[i])
    }

    /// Number of words in a pool.
    #[must_use]
    pub fn pool_len(&self, pool: Pool) -> usize {
        self.indices(pool).len()
    }

    /// Returns the `n`th word of a pool.
    #[must_use]
    pub fn pool_word(&self, pool: Pool, n: usize) -> Option<&Word> {
        self.indices(pool).get(n).map(|&i| &self.words[i])
    }

    fn indices(&self, pool: Pool) -> &[usize] {
        match pool {
            Pool::Noun => &self.nouns,
            Pool::Front => &self.fronts,
            Pool::Rear => &self.rears,
        }
    }
}
