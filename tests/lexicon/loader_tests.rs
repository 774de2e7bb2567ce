//! Loader tests.
//!
//! Tests for the two-pass load over in-memory streams.

use glossa_foundation::{Culture, ErrorKind};
use glossa_lexicon::{Lexicon, LexiconLoader, LoaderConfig};

const WORDS: &str = "language_words

[OBJECT:LANGUAGE]

[WORD:AXE]
\t[NOUN:axe:axes]
\t\t[FRONT_COMPOUND_NOUN_SING]
\t\t[REAR_COMPOUND_NOUN_SING]
\t\t[THE_NOUN_SING]
[WORD:HEW]
\t[VERB:hew:hews:hewed:hewn:hewing]
\t\t[STANDARD_VERB]
[WORD:DARK]
\t[NOUN:dark:]
\t\t[FRONT_COMPOUND_NOUN_PLUR]
\t[ADJ:dark]
\t\t[ADJ_DIST:3]
\t\t[REAR_COMPOUND_ADJ]
";

const DWARF: &str = "language_DWARF

[OBJECT:LANGUAGE]

[TRANSLATION:DWARF]
\t[T_WORD:AXE:dolil]
\t[T_WORD:HEW:kol]
";

fn load(words: &str, dwarf: &str) -> glossa_foundation::Result<Lexicon> {
    Lexicon::from_raws(words.as_bytes(), [(Culture::Dwarf, dwarf.as_bytes())])
}

// =============================================================================
// Word pass
// =============================================================================

#[test]
fn loads_words_in_declaration_order() {
    let lexicon = load(WORDS, DWARF).unwrap();
    let ids: Vec<_> = lexicon.words().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["AXE", "HEW", "DARK"]);
}

#[test]
fn flags_attach_to_most_recent_role() {
    let lexicon = load(WORDS, DWARF).unwrap();
    let dark = lexicon.get("DARK").unwrap();

    let noun = dark.noun.as_ref().unwrap();
    assert!(noun.front_compound_plural);
    assert!(!noun.front_compound_singular);
    assert_eq!(noun.plural, "");

    let adjective = dark.adjective.as_ref().unwrap();
    assert_eq!(adjective.distance, 3);
    assert!(adjective.rear_compound);
    assert!(!adjective.front_compound);
}

#[test]
fn flag_before_any_word_is_rejected() {
    let err = load("[OBJECT:LANGUAGE][STANDARD_VERB]", "").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedToken { .. }));
    assert!(err.is_load_error());
}

#[test]
fn bad_distance_is_malformed_number() {
    let err = load("[WORD:RED][ADJ:red][ADJ_DIST:far]", "").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedNumber { .. }));
}

#[test]
fn error_names_stream_and_token() {
    let err = load("[OBJECT:LANGUAGE][WORD:AXE][NOUN:axe]", "").unwrap_err();
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("language_words"));
    assert_eq!(context.token, Some(3));
}

// =============================================================================
// Translation pass
// =============================================================================

#[test]
fn translations_fill_one_culture() {
    let lexicon = load(WORDS, DWARF).unwrap();
    let axe = lexicon.get("AXE").unwrap();
    assert_eq!(axe.translation.get(Culture::Dwarf), Some("dolil"));
    assert_eq!(axe.translation.get(Culture::Human), None);
    assert_eq!(lexicon.get("DARK").unwrap().translation.get(Culture::Dwarf), None);
}

#[test]
fn translation_for_undeclared_word_is_rejected() {
    let err = load(WORDS, "[TRANSLATION:DWARF][T_WORD:ZZZ:x]").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingTranslation { .. }));
    assert_eq!(
        err.context.unwrap().source.as_deref(),
        Some("language_DWARF")
    );
}

#[test]
fn cp437_translation_loads() {
    let dwarf: &[u8] = b"[TRANSLATION:DWARF]\n\t[T_WORD:AXE:\x97lol]\n";
    let lexicon = Lexicon::from_raws(WORDS.as_bytes(), [(Culture::Dwarf, dwarf)]).unwrap();
    assert_eq!(
        lexicon.get("AXE").unwrap().translation.get(Culture::Dwarf),
        Some("ùlol")
    );
}

#[test]
fn streams_load_in_given_order() {
    let lexicon = Lexicon::from_raws(
        WORDS.as_bytes(),
        [
            (Culture::Human, "[T_WORD:AXE:abo]".as_bytes()),
            (Culture::Elf, "[T_WORD:AXE:ila]".as_bytes()),
        ],
    )
    .unwrap();
    let axe = lexicon.get("AXE").unwrap();
    assert_eq!(axe.translation.get(Culture::Human), Some("abo"));
    assert_eq!(axe.translation.get(Culture::Elf), Some("ila"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn strict_mode_rejects_empty_compound_form() {
    // DARK is a front compound plural with an empty plural.
    let loader = LexiconLoader::new(LoaderConfig::strict());
    let err = loader
        .load(WORDS.as_bytes(), [(Culture::Dwarf, DWARF.as_bytes())])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedToken { .. }));

    let lenient = LexiconLoader::new(LoaderConfig::new());
    assert!(lenient
        .load(WORDS.as_bytes(), [(Culture::Dwarf, DWARF.as_bytes())])
        .is_ok());
}

#[test]
fn strict_mode_rejects_empty_prefix_and_adjective() {
    let loader = LexiconLoader::new(LoaderConfig::strict());
    let no_streams = Vec::<(Culture, &[u8])>::new;

    let prefix = loader
        .load("[WORD:UN][PREFIX:][FRONT_COMPOUND_PREFIX]".as_bytes(), no_streams())
        .unwrap_err();
    assert!(prefix.to_string().contains("FRONT_COMPOUND_PREFIX"));

    let adjective = loader
        .load("[WORD:DARK][ADJ:][REAR_COMPOUND_ADJ]".as_bytes(), no_streams())
        .unwrap_err();
    assert!(matches!(adjective.kind, ErrorKind::MalformedToken { .. }));
    assert!(adjective.to_string().contains("REAR_COMPOUND_ADJ"));

    // Flags that never reach a compound are allowed on empty forms.
    assert!(loader
        .load(
            "[WORD:UN][PREFIX:][THE_COMPOUND_PREFIX][WORD:DARK][ADJ:][THE_COMPOUND_ADJ]".as_bytes(),
            no_streams(),
        )
        .is_ok());
}
