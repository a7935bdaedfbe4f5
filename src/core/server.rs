use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::analysis::stopword::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::IndexStats;
use crate::core::types::{DocId, Document, DocumentData, DocumentStatus};
use crate::index::inverted::InvertedIndex;
use crate::index::store::{average_rating, DocumentStore};
use crate::parallel::ExecutionPolicy;
use crate::query::parser::parse_query;
use crate::scoring::tf_idf::find_all_documents;
use crate::search::results::sort_and_truncate;

/// In-memory ranked search engine over a growing document collection.
///
/// Owns the inverted index, the document store, and the immutable stop-word
/// set. Reads (`find_top*`, `match_document*`, `word_frequencies`,
/// `document_ids`, `document_count`) take `&self` and may run concurrently;
/// mutations take `&mut self`.
pub struct SearchServer {
    stop_words: StopWordSet,
    index: InvertedIndex,
    store: DocumentStore,
}

impl SearchServer {
    /// Creates a server from any iterable of stop words.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(SearchServer {
            stop_words: StopWordSet::new(stop_words)?,
            index: InvertedIndex::new(),
            store: DocumentStore::new(),
        })
    }

    /// Creates a server from a whitespace-joined stop-word line.
    pub fn from_text(stop_words_text: &str) -> Result<Self> {
        Ok(SearchServer {
            stop_words: StopWordSet::from_text(stop_words_text)?,
            index: InvertedIndex::new(),
            store: DocumentStore::new(),
        })
    }

    /// Indexes a document.
    ///
    /// The id must be non-negative and not yet live. Tokens are validated
    /// before any index mutation, so a failed add leaves the server
    /// untouched. A document whose tokens are all stop words is accepted as
    /// an empty document: live, but matching nothing.
    pub fn add_document(
        &mut self,
        document_id: DocId,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id.value() < 0 {
            return Err(Error::new(
                ErrorKind::InvalidId,
                format!("document id {} is negative", document_id.value()),
            ));
        }
        if self.store.contains(document_id) {
            return Err(Error::new(
                ErrorKind::InvalidId,
                format!("document id {} is already in the index", document_id.value()),
            ));
        }
        let words = self.split_into_words_no_stop(document)?;
        self.index.add_document(document_id, &words);
        self.store.insert(
            document_id,
            DocumentData {
                rating: average_rating(ratings),
                status,
            },
        );
        Ok(())
    }

    /// Removes a document from every index structure. No-op for ids that
    /// are not live.
    pub fn remove_document(&mut self, document_id: DocId) {
        self.remove_document_policy(ExecutionPolicy::Sequential, document_id);
    }

    /// Policy-selected removal; observationally equivalent to sequential.
    pub fn remove_document_policy(&mut self, policy: ExecutionPolicy, document_id: DocId) {
        if !self.store.contains(document_id) {
            return;
        }
        self.index.remove_document(policy, document_id);
        self.store.remove(document_id);
    }

    /// Top documents for the query among ACTUAL documents.
    pub fn find_top(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_policy(ExecutionPolicy::Sequential, raw_query)
    }

    pub fn find_top_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
    ) -> Result<Vec<Document>> {
        self.find_top_with_status_policy(policy, raw_query, DocumentStatus::Actual)
    }

    /// Top documents restricted to one status.
    pub fn find_top_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_with_status_policy(ExecutionPolicy::Sequential, raw_query, status)
    }

    pub fn find_top_with_status_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_with_policy(policy, raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents under an arbitrary predicate over (id, status, rating).
    pub fn find_top_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// The general form every other `find_top` variant delegates to.
    pub fn find_top_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = parse_query(&self.stop_words, raw_query)?;
        let matched = find_all_documents(policy, &self.index, &self.store, &query, predicate);
        Ok(sort_and_truncate(matched))
    }

    /// Positive query terms present in the document, with its status.
    ///
    /// Any negative term present in the document empties the word list. The
    /// words come back sorted; the id must be live or the call fails with
    /// `UnknownDocument`.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        self.match_document_policy(ExecutionPolicy::Sequential, raw_query, document_id)
    }

    pub fn match_document_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = parse_query(&self.stop_words, raw_query)?;
        let data = self.store.get(document_id).ok_or_else(|| {
            Error::new(
                ErrorKind::UnknownDocument,
                format!("document id {} is not in the index", document_id.value()),
            )
        })?;
        let word_freqs = self.index.word_frequencies(document_id);

        let matched_words = match policy {
            ExecutionPolicy::Sequential => {
                if query
                    .minus_words
                    .iter()
                    .any(|word| word_freqs.contains_key(word))
                {
                    Vec::new()
                } else {
                    query
                        .plus_words
                        .iter()
                        .filter(|word| word_freqs.contains_key(*word))
                        .cloned()
                        .collect()
                }
            }
            ExecutionPolicy::Parallel => {
                if query
                    .minus_words
                    .par_iter()
                    .any(|word| word_freqs.contains_key(word))
                {
                    Vec::new()
                } else {
                    let mut words: Vec<String> = query
                        .plus_words
                        .par_iter()
                        .filter(|word| word_freqs.contains_key(*word))
                        .cloned()
                        .collect();
                    words.sort_unstable();
                    words.dedup();
                    words
                }
            }
        };
        Ok((matched_words, data.status))
    }

    /// Term frequencies of one document; the empty map for non-live ids.
    pub fn word_frequencies(&self, document_id: DocId) -> &BTreeMap<String, f64> {
        self.index.word_frequencies(document_id)
    }

    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.store.ids()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            document_count: self.store.len(),
            term_count: self.index.term_count(),
        }
    }

    /// Tokenizes, validates, and drops stop words. Runs before any mutation
    /// so malformed input cannot leave a half-indexed document.
    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::MalformedTerm,
                    format!("word {:?} contains control bytes", word),
                ));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}
