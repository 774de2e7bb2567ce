//! Locating and opening raw files.
//!
//! The expected layout mirrors a game `raw` directory:
//!
//! ```text
//! <root>/objects/language_words.txt
//! <root>/objects/language_DWARF.txt
//! <root>/objects/language_HUMAN.txt
//! <root>/objects/language_GOBLIN.txt
//! <root>/objects/language_ELF.txt
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use glossa_foundation::{Culture, Error, ErrorContext, Result};
use glossa_lexicon::loader::{WORDS_SOURCE, translation_source};
use glossa_lexicon::{Lexicon, LexiconLoader, LoaderConfig, global};
use tracing::{debug, info};

/// A raws root directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawsDirectory {
    root: PathBuf,
}

impl RawsDirectory {
    /// Creates a handle for the given root. Nothing is opened yet.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the word-definition file.
    #[must_use]
    pub fn words_path(&self) -> PathBuf {
        self.objects().join(format!("{WORDS_SOURCE}.txt"))
    }

    /// Path of a culture's translation file.
    #[must_use]
    pub fn translation_path(&self, culture: Culture) -> PathBuf {
        self.objects()
            .join(format!("{}.txt", translation_source(culture)))
    }

    /// Opens every file and loads a lexicon from them.
    ///
    /// All four translation files are required.
    ///
    /// # Errors
    /// Returns a stream error naming the path if a file cannot be opened,
    /// otherwise whatever the loader reports.
    pub fn load(&self, config: &LoaderConfig) -> Result<Lexicon> {
        info!(root = %self.root.display(), "loading raws");
        let words = open(&self.words_path())?;
        let translations = Culture::ALL
            .into_iter()
            .map(|culture| Ok::<_, Error>((culture, open(&self.translation_path(culture))?)))
            .collect::<Result<Vec<_>>>()?;

        LexiconLoader::new(config.clone()).load(words, translations)
    }

    /// Loads into the process-wide lexicon, or returns the earlier outcome
    /// if any caller already attempted it.
    ///
    /// # Errors
    /// Returns the error from the one load attempt.
    pub fn load_global(
        &self,
        config: &LoaderConfig,
    ) -> std::result::Result<&'static Lexicon, &'static Error> {
        global::init(|| self.load(config))
    }

    fn objects(&self) -> PathBuf {
        self.root.join("objects")
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    debug!(path = %path.display(), "opening raws file");
    File::open(path).map(BufReader::new).map_err(|e| {
        Error::stream(e).with_context(ErrorContext::new().with_source(path.display().to_string()))
    })
}
