use std::collections::HashSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};

/// Immutable set of words excluded from both indexing and querying.
///
/// Built once when the server is created; every candidate word must pass
/// [`is_valid_word`], empty strings are ignored.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::MalformedTerm,
                    format!("stop word {:?} contains control bytes", word),
                ));
            }
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(StopWordSet { words })
    }

    /// Builds the set from a whitespace-joined line such as `"in the and"`.
    pub fn from_text(text: &str) -> Result<Self> {
        StopWordSet::new(split_into_words(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
