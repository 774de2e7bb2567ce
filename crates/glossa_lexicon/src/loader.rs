//! Builds a [`Lexicon`] from raws streams.
//!
//! Loading is two passes. The word-definition stream is scanned once, left
//! to right, with a small cursor ([`ParserState`]) remembering the word and
//! role that flag tokens apply to. Then each culture's translation stream
//! fills in that culture's slot by word ID.

use std::collections::HashMap;
use std::io::BufRead;

use glossa_foundation::{Culture, Error, ErrorContext, Pool, Result};
use glossa_raws::{RawsTokenizer, Token};
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::lexicon::Lexicon;
use crate::tag::{TranslationTag, WordTag};
use crate::word::{Adjective, AdjectiveFlag, Noun, NounFlag, Prefix, RoleKind, Verb, Word};

/// Stream label used in error context for the word-definition stream.
pub const WORDS_SOURCE: &str = "language_words";

/// Stream label used in error context for a culture's translation stream.
#[must_use]
pub fn translation_source(culture: Culture) -> String {
    format!("language_{}", culture.raw_name())
}

/// Loads lexicons from raws.
#[derive(Clone, Debug, Default)]
pub struct LexiconLoader {
    config: LoaderConfig,
}

impl LexiconLoader {
    /// Creates a loader with the given configuration.
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the loader's configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the word-definition stream, then each translation stream in order.
    ///
    /// # Errors
    /// Returns the first stream, token, or translation error encountered.
    /// Nothing partially loaded is returned.
    pub fn load<W, I, T>(&self, words: W, translations: I) -> Result<Lexicon>
    where
        W: BufRead,
        I: IntoIterator<Item = (Culture, T)>,
        T: BufRead,
    {
        let mut state = ParserState::default();

        for_each_token(words, WORDS_SOURCE, |token| state.apply(token))?;
        debug!(words = state.words.len(), "word definitions loaded");

        if self.config.strict_compound_forms {
            for word in &state.words {
                validate_compound_forms(word)
                    .map_err(|e| e.with_context(ErrorContext::new().with_source(WORDS_SOURCE)))?;
            }
        }

        for (culture, stream) in translations {
            let source = translation_source(culture);
            let mut applied = 0usize;
            for_each_token(stream, &source, |token| {
                if state.apply_translation(culture, token)? {
                    applied += 1;
                }
                Ok(())
            })?;
            debug!(%culture, translations = applied, "translation stream loaded");
        }

        let lexicon = Lexicon::assemble(state.words, state.index);
        info!(
            words = lexicon.len(),
            nouns = lexicon.pool_len(Pool::Noun),
            front = lexicon.pool_len(Pool::Front),
            rear = lexicon.pool_len(Pool::Rear),
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

/// Runs `f` over every token in `stream`, attaching the stream name and
/// token ordinal to any error.
fn for_each_token<R, F>(stream: R, source: &str, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&Token) -> Result<()>,
{
    let mut tokenizer = RawsTokenizer::new(stream);
    while let Some(next) = tokenizer.next() {
        let context = ErrorContext::new().with_source(source);
        let token = next.map_err(|e| {
            e.with_context(context.clone().with_token(tokenizer.tokens_read() + 1))
        })?;
        f(&token).map_err(|e| e.with_context(context.with_token(token.ordinal())))?;
    }
    Ok(())
}

/// The cursor threaded through the word-definition scan.
#[derive(Debug, Default)]
struct ParserState {
    words: Vec<Word>,
    index: HashMap<String, usize>,
    /// Index of the most recently declared word.
    current: Option<usize>,
    /// Most recently declared role on the current word.
    role: Option<RoleKind>,
}

impl ParserState {
    fn apply(&mut self, token: &Token) -> Result<()> {
        let Some(tag) = WordTag::from_kind(token.kind()) else {
            return Err(malformed(token, "unrecognized token kind"));
        };

        match tag {
            WordTag::Object => {}
            WordTag::Word => {
                let [id] = fields::<1>(token)?;
                if self.index.contains_key(id) {
                    return Err(malformed(token, "word declared twice"));
                }
                let next = self.words.len();
                self.index.insert(id.to_string(), next);
                self.words.push(Word::new(id));
                self.current = Some(next);
                self.role = None;
            }
            WordTag::Role(kind) => {
                let word = self.current_word(token)?;
                match kind {
                    RoleKind::Noun => {
                        let [singular, plural] = fields::<2>(token)?;
                        word.noun = Some(Noun::new(singular, plural));
                    }
                    RoleKind::Prefix => {
                        let [prefix] = fields::<1>(token)?;
                        word.prefix = Some(Prefix::new(prefix));
                    }
                    RoleKind::Verb => {
                        word.verb = Some(Verb::new(fields::<5>(token)?));
                    }
                    RoleKind::Adjective => {
                        let [adjective] = fields::<1>(token)?;
                        word.adjective = Some(Adjective::new(adjective));
                    }
                }
                self.role = Some(kind);
            }
            WordTag::AdjectiveDistance => {
                if self.role != Some(RoleKind::Adjective) {
                    return Err(malformed(token, "ADJ_DIST must follow ADJ on the same word"));
                }
                let [value] = fields::<1>(token)?;
                let distance = value
                    .parse::<i32>()
                    .map_err(|e| Error::malformed_number(value, e))?;
                self.role_record(token, RoleKind::Adjective, |w| w.adjective.as_mut())?
                    .distance = distance;
            }
            WordTag::Noun(flag) => {
                self.role_record(token, RoleKind::Noun, |w| w.noun.as_mut())?
                    .set(flag);
            }
            WordTag::Prefix(flag) => {
                self.role_record(token, RoleKind::Prefix, |w| w.prefix.as_mut())?
                    .set(flag);
            }
            WordTag::Verb(flag) => {
                self.role_record(token, RoleKind::Verb, |w| w.verb.as_mut())?
                    .set(flag);
            }
            WordTag::Adjective(flag) => {
                self.role_record(token, RoleKind::Adjective, |w| w.adjective.as_mut())?
                    .set(flag);
            }
        }
        Ok(())
    }

    /// Applies one translation-stream token. Returns whether a slot was set.
    fn apply_translation(&mut self, culture: Culture, token: &Token) -> Result<bool> {
        match TranslationTag::from_kind(token.kind()) {
            Some(TranslationTag::Object | TranslationTag::Translation) => Ok(false),
            Some(TranslationTag::Word) => {
                let [id, text] = fields::<2>(token)?;
                let &index = self
                    .index
                    .get(id)
                    .ok_or_else(|| Error::missing_translation(id, culture))?;
                self.words[index].translation.set(culture, text);
                Ok(true)
            }
            None => Err(malformed(token, "unrecognized token kind in translation stream")),
        }
    }

    fn current_word(&mut self, token: &Token) -> Result<&mut Word> {
        self.current
            .and_then(|i| self.words.get_mut(i))
            .ok_or_else(|| malformed(token, "no WORD declared yet"))
    }

    fn role_record<T>(
        &mut self,
        token: &Token,
        kind: RoleKind,
        pick: impl FnOnce(&mut Word) -> Option<&mut T>,
    ) -> Result<&mut T> {
        let word = self.current_word(token)?;
        pick(word).ok_or_else(|| malformed(token, format!("no {kind} declared on this word")))
    }
}

fn malformed(token: &Token, reason: impl Into<String>) -> Error {
    Error::malformed_token(token.to_string(), reason)
}

/// Returns the first `N` fields after the kind. Extra fields are ignored.
fn fields<const N: usize>(token: &Token) -> Result<[&str; N]> {
    let args = token.args();
    if args.len() < N {
        return Err(malformed(
            token,
            format!("expected {N} field(s), found {}", args.len()),
        ));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Rejects compound flags whose form is empty.
fn validate_compound_forms(word: &Word) -> Result<()> {
    let reject = |flag: &str| {
        Error::malformed_token(
            format!("WORD:{}", word.id),
            format!("{flag} is set but its form is empty"),
        )
    };

    if let Some(noun) = &word.noun {
        for (flag, form) in [
            (NounFlag::FrontCompoundSingular, &noun.singular),
            (NounFlag::FrontCompoundPlural, &noun.plural),
            (NounFlag::RearCompoundSingular, &noun.singular),
            (NounFlag::RearCompoundPlural, &noun.plural),
        ] {
            if noun.has(flag) && form.is_empty() {
                return Err(reject(flag.raw_name()));
            }
        }
    }
    if let Some(prefix) = &word.prefix {
        if prefix.front_compound && prefix.prefix.is_empty() {
            return Err(reject("FRONT_COMPOUND_PREFIX"));
        }
    }
    if let Some(verb) = &word.verb {
        if verb.standard && verb.compound_forms().iter().any(|f| f.is_empty()) {
            return Err(reject("STANDARD_VERB"));
        }
    }
    if let Some(adjective) = &word.adjective {
        for flag in [AdjectiveFlag::FrontCompound, AdjectiveFlag::RearCompound] {
            if adjective.has(flag) && adjective.adjective.is_empty() {
                return Err(reject(flag.raw_name()));
            }
        }
    }
    Ok(())
}
