use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;

use crate::core::types::DocId;
use crate::parallel::ExecutionPolicy;

/// Inverted index plus its reverse view.
///
/// Invariant: `postings[term][id]` exists iff `doc_words[id][term]` exists,
/// with equal frequency values.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// term → document → term frequency
    postings: HashMap<String, BTreeMap<DocId, f64>>,
    /// document → term → term frequency
    doc_words: HashMap<DocId, BTreeMap<String, f64>>,
}

static EMPTY_WORD_FREQS: BTreeMap<String, f64> = BTreeMap::new();

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            doc_words: HashMap::new(),
        }
    }

    /// Indexes one document's tokens. Each token adds `1/N` to both views,
    /// so a token occurring k times ends up with frequency k/N.
    ///
    /// An empty token list still registers the document with an empty
    /// reverse map, so the document is live but matches nothing.
    pub fn add_document(&mut self, document_id: DocId, words: &[&str]) {
        let word_freqs = self.doc_words.entry(document_id).or_default();
        if words.is_empty() {
            return;
        }
        let inv_word_count = 1.0 / words.len() as f64;
        for &word in words {
            *word_freqs.entry(word.to_string()).or_insert(0.0) += inv_word_count;
            *self
                .postings
                .entry(word.to_string())
                .or_default()
                .entry(document_id)
                .or_insert(0.0) += inv_word_count;
        }
    }

    /// Unindexes a document under the given policy. No-op if the document
    /// was never indexed. Both policies leave identical state; empty posting
    /// lists are pruned.
    pub fn remove_document(&mut self, policy: ExecutionPolicy, document_id: DocId) {
        let Some(word_freqs) = self.doc_words.remove(&document_id) else {
            return;
        };
        match policy {
            ExecutionPolicy::Sequential => {
                for word in word_freqs.keys() {
                    if let Some(freqs) = self.postings.get_mut(word) {
                        freqs.remove(&document_id);
                        if freqs.is_empty() {
                            self.postings.remove(word);
                        }
                    }
                }
            }
            ExecutionPolicy::Parallel => {
                let words: HashSet<&str> = word_freqs.keys().map(String::as_str).collect();
                self.postings.par_iter_mut().for_each(|(word, freqs)| {
                    if words.contains(word.as_str()) {
                        freqs.remove(&document_id);
                    }
                });
                self.postings.retain(|_, freqs| !freqs.is_empty());
            }
        }
    }

    /// Posting list for a term, if the term is indexed.
    pub fn postings_for(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.postings.get(word)
    }

    /// Term frequencies of one document; the empty map for unknown ids.
    pub fn word_frequencies(&self, document_id: DocId) -> &BTreeMap<String, f64> {
        self.doc_words
            .get(&document_id)
            .unwrap_or(&EMPTY_WORD_FREQS)
    }

    pub fn contains_document(&self, document_id: DocId) -> bool {
        self.doc_words.contains_key(&document_id)
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}
