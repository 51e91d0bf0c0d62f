pub mod loader;
pub mod syllable;

pub use self::syllable::{EnglishSyllables, SyllableCounter};

use crate::config::LexiconPaths;
use crate::error::ReadResult;
use std::collections::HashSet;
use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

const SPACHE_WORDS: &str = include_str!("../../data/spache.txt");
const DALE_CHALL_WORDS: &str = include_str!("../../data/dale_chall.txt");

/// A fixed, case-folded vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn parse(text: &str) -> ReadResult<Self> {
        Ok(Self {
            words: loader::read_words(Cursor::new(text))?,
        })
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> ReadResult<Self> {
        Ok(Self {
            words: loader::load_words(path)?,
        })
    }

    /// Expects an already case-folded word.
    pub fn contains(&self, caseless: &str) -> bool {
        self.words.contains(caseless)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The external vocabulary the metrics collector consults: the familiar
/// (Spache) and easy (Dale–Chall) lists plus a syllable counter.
#[derive(Clone)]
pub struct Lexicon {
    familiar: WordList,
    easy: WordList,
    syllables: Arc<dyn SyllableCounter>,
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("familiar", &self.familiar.len())
            .field("easy", &self.easy.len())
            .finish()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    pub fn new(familiar: WordList, easy: WordList) -> Self {
        Self {
            familiar,
            easy,
            syllables: Arc::new(EnglishSyllables),
        }
    }

    /// Embedded word lists with the heuristic English syllable counter.
    pub fn english() -> Self {
        Self::new(
            WordList::from_words(embedded(SPACHE_WORDS)),
            WordList::from_words(embedded(DALE_CHALL_WORDS)),
        )
    }

    /// Embedded lists, each replaced by its file when a path is given.
    pub fn load(paths: &LexiconPaths) -> ReadResult<Self> {
        let mut lexicon = Self::english();
        if let Some(path) = &paths.familiar_words {
            lexicon.familiar = WordList::load_from_file(path)?;
        }
        if let Some(path) = &paths.easy_words {
            lexicon.easy = WordList::load_from_file(path)?;
        }
        Ok(lexicon)
    }

    pub fn with_syllable_counter<S: SyllableCounter + 'static>(mut self, counter: S) -> Self {
        self.syllables = Arc::new(counter);
        self
    }

    pub fn is_familiar(&self, caseless: &str) -> bool {
        self.familiar.contains(caseless)
    }

    pub fn is_easy(&self, caseless: &str) -> bool {
        self.easy.contains(caseless)
    }

    pub fn syllables(&self, word: &str) -> usize {
        self.syllables.syllables(word)
    }

    pub fn familiar(&self) -> &WordList {
        &self.familiar
    }

    pub fn easy(&self) -> &WordList {
        &self.easy
    }
}

fn embedded(text: &'static str) -> impl Iterator<Item = &'static str> {
    text.lines()
        .filter(|l| !l.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
}
