use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::ops::Deref;
use std::path::Path;

use anyhow::{Context, Result};

/// The english stop words, one per line.
const ENGLISH: &str = include_str!("../resources/stopwords/stopwords-en.txt");

/// A fixed set of stop words.
///
/// Membership is an exact, case-sensitive match: `"the"` is a stop word but
/// a sentence-initial `"The"` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Deref for StopWords {
    type Target = HashSet<String>;

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl Default for StopWords {
    fn default() -> Self {
        StopWords::english()
    }
}

impl StopWords {
    /// The bundled english stop words.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.lines())
    }

    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Read the `StopWords` from a file with one word per line.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = fs::File::open(path)
            .with_context(|| format!("Failed to open stop words file {:?}", path))?;
        let words: Vec<_> = BufReader::new(f)
            .lines()
            .collect::<Result<_, _>>()
            .with_context(|| format!("Failed to read stop words from {:?}", path))?;
        Ok(Self::from_words(words))
    }

    /// Whether the `word` is a stop word, case-sensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop every occurrence of a stop word from the `tokens`, keep all others
    /// in their original order.
    pub fn filter(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.contains(token))
            .cloned()
            .collect()
    }
}
