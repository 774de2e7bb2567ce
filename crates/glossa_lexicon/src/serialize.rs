//! Writes a lexicon back out as raws.
//!
//! The output reloads into an equal [`Lexicon`]: same words in the same
//! order, same fields and flags, same translations.

use std::io::Write;

use glossa_foundation::{Culture, Result};
use glossa_raws::RawsWriter;

use crate::lexicon::Lexicon;
use crate::loader::{WORDS_SOURCE, translation_source};
use crate::word::{AdjectiveFlag, NounFlag, PrefixFlag, RoleKind, VerbFlag, Word};

impl Lexicon {
    /// Writes the word-definition stream.
    ///
    /// # Errors
    /// Returns a stream error if the sink fails, or a malformed token error
    /// if a field holds a character the format cannot represent.
    pub fn write_words<W: Write>(&self, out: W) -> Result<W> {
        let mut writer = RawsWriter::new(out);
        writer.write_header(WORDS_SOURCE)?;
        writer.blank_line()?;
        writer.write_token(0, &["OBJECT", "LANGUAGE"])?;

        for word in self.words() {
            writer.blank_line()?;
            write_word(&mut writer, word)?;
        }
        writer.finish()
    }

    /// Writes one culture's translation stream. Words without a translation
    /// for `culture` are skipped.
    ///
    /// # Errors
    /// As for [`write_words`](Self::write_words).
    pub fn write_translations<W: Write>(&self, culture: Culture, out: W) -> Result<W> {
        let mut writer = RawsWriter::new(out);
        writer.write_header(&translation_source(culture))?;
        writer.blank_line()?;
        writer.write_token(0, &["OBJECT", "LANGUAGE"])?;
        writer.blank_line()?;
        writer.write_token(0, &["TRANSLATION", culture.raw_name()])?;

        for word in self.words() {
            if let Some(text) = word.translation.get(culture) {
                writer.write_token(1, &["T_WORD", word.id.as_str(), text])?;
            }
        }
        writer.finish()
    }
}

fn write_word<W: Write>(writer: &mut RawsWriter<W>, word: &Word) -> Result<()> {
    writer.write_token(0, &["WORD", word.id.as_str()])?;

    if let Some(noun) = &word.noun {
        writer.write_token(1, &[RoleKind::Noun.raw_name(), &noun.singular, &noun.plural])?;
        for &flag in NounFlag::ALL.iter().filter(|f| noun.has(**f)) {
            writer.write_token(2, &[flag.raw_name()])?;
        }
    }
    if let Some(prefix) = &word.prefix {
        writer.write_token(1, &[RoleKind::Prefix.raw_name(), &prefix.prefix])?;
        for &flag in PrefixFlag::ALL.iter().filter(|f| prefix.has(**f)) {
            writer.write_token(2, &[flag.raw_name()])?;
        }
    }
    if let Some(verb) = &word.verb {
        let [p1, p3, pret, pp, prp] = verb.forms();
        writer.write_token(1, &[RoleKind::Verb.raw_name(), p1, p3, pret, pp, prp])?;
        for &flag in VerbFlag::ALL.iter().filter(|f| verb.has(**f)) {
            writer.write_token(2, &[flag.raw_name()])?;
        }
    }
    if let Some(adjective) = &word.adjective {
        writer.write_token(1, &[RoleKind::Adjective.raw_name(), &adjective.adjective])?;
        if adjective.distance != 0 {
            writer.write_token(2, &["ADJ_DIST", &adjective.distance.to_string()])?;
        }
        for &flag in AdjectiveFlag::ALL.iter().filter(|f| adjective.has(**f)) {
            writer.write_token(2, &[flag.raw_name()])?;
        }
    }
    Ok(())
}
