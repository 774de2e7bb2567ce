//! Fixture directory tests.

use glossa_foundation::{Culture, ErrorKind, Pool};
use glossa_lexicon::{Lexicon, LexiconLoader, LoaderConfig};
use glossa_runtime::{RawsDirectory, RuntimeConfig, generate_names};

use crate::fixture_root;

fn load() -> Lexicon {
    RawsDirectory::new(fixture_root())
        .load(&LoaderConfig::new())
        .unwrap()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn fixture_loads() {
    let lexicon = load();
    assert_eq!(lexicon.len(), 14);
    assert!(Pool::ALL.iter().all(|&p| lexicon.pool_len(p) > 0));

    let axe = lexicon.get("AXE").unwrap();
    assert_eq!(axe.translation.get(Culture::Dwarf), Some("dolil"));
    assert!(Culture::ALL.iter().all(|&c| axe.translation.get(c).is_some()));
}

#[test]
fn fixture_partial_translations() {
    let lexicon = load();
    assert_eq!(lexicon.get("UN").unwrap().translation.get(Culture::Goblin), None);
    assert_eq!(lexicon.get("SCISSORS").unwrap().translation.get(Culture::Elf), None);
}

#[test]
fn fixture_is_clean_under_strict_mode() {
    let strict = RawsDirectory::new(fixture_root())
        .load(&LoaderConfig::strict())
        .unwrap();
    assert_eq!(strict, load());
}

#[test]
fn missing_directory_names_the_file() {
    let err = RawsDirectory::new(fixture_root().join("nowhere"))
        .load(&LoaderConfig::new())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Stream(_)));
    let source = err.context.unwrap().source.unwrap();
    assert!(source.ends_with("language_words.txt"));
}

#[test]
fn missing_translation_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = RawsDirectory::new(dir.path());
    std::fs::create_dir(dir.path().join("objects")).unwrap();

    let fixtures = RawsDirectory::new(fixture_root());
    std::fs::copy(fixtures.words_path(), root.words_path()).unwrap();
    for culture in [Culture::Dwarf, Culture::Human, Culture::Goblin] {
        std::fs::copy(
            fixtures.translation_path(culture),
            root.translation_path(culture),
        )
        .unwrap();
    }

    let err = root.load(&LoaderConfig::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Stream(_)));
    let source = err.context.unwrap().source.unwrap();
    assert!(source.ends_with("language_ELF.txt"), "{source}");
}

#[test]
fn fixture_survives_write_and_reload() {
    let lexicon = load();
    let words = lexicon.write_words(Vec::new()).unwrap();
    let translations: Vec<_> = Culture::ALL
        .iter()
        .map(|&c| (c, lexicon.write_translations(c, Vec::new()).unwrap()))
        .collect();

    let reloaded = LexiconLoader::default()
        .load(
            words.as_slice(),
            translations.iter().map(|(c, t)| (*c, t.as_slice())),
        )
        .unwrap();
    assert_eq!(reloaded, lexicon);
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn generate_batch_for_every_culture() {
    let lexicon = load();
    for culture in Culture::ALL {
        let config = RuntimeConfig::new()
            .with_culture(culture)
            .with_count(25)
            .with_seed(11);
        let names = generate_names(&lexicon, &config).unwrap();
        assert_eq!(names.len(), 25);
        for name in &names {
            assert_eq!(name.english.matches(' ').count(), 1, "{name}");
        }
    }
}

#[test]
fn seeded_batches_repeat() {
    let lexicon = load();
    let config = RuntimeConfig::new().with_count(10).with_seed(2024);
    assert_eq!(
        generate_names(&lexicon, &config).unwrap(),
        generate_names(&lexicon, &config).unwrap()
    );
}

#[test]
fn zero_count_is_empty() {
    let lexicon = load();
    let config = RuntimeConfig::new().with_count(0);
    assert!(generate_names(&lexicon, &config).unwrap().is_empty());
}

#[test]
fn empty_lexicon_cannot_generate() {
    let config = RuntimeConfig::new().with_seed(1);
    let err = generate_names(&Lexicon::default(), &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyPool(Pool::Noun)));
}
