use crate::types::TokenRef;
use crate::Error;
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A set of words excluded from every document's token stream.
///
/// Entries are compared verbatim: the list is not lowercased, so an entry such
/// as `"The"` never matches the (always lowercase) token `"the"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates a set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from an arbitrary list of words. Entries are trimmed and
    /// blank entries are skipped, mirroring the file loader.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Parses a newline-delimited word list.
    pub fn from_list(list: &str) -> Self {
        Self::from_words(list.lines())
    }

    /// Loads a newline-delimited word list from disk.
    ///
    /// # Errors
    /// Returns `Error::IoError` if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let stop_words = Self::from_list(&contents);

        debug!(
            "Loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );

        Ok(stop_words)
    }

    pub fn contains(&self, word: &TokenRef) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
