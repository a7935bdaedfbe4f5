use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::core::types::{DocId, Document, DocumentStatus};
use crate::index::inverted::InvertedIndex;
use crate::index::store::DocumentStore;
use crate::parallel::concurrent_map::ConcurrentMap;
use crate::parallel::ExecutionPolicy;
use crate::query::types::Query;

/// Natural-log inverse document frequency over the live document count at
/// query time. Callers guarantee `doc_freq > 0` by checking term presence.
pub fn inverse_document_freq(document_count: usize, doc_freq: usize) -> f64 {
    (document_count as f64 / doc_freq as f64).ln()
}

/// Accumulates TF·IDF relevance for every document matching the query under
/// `predicate`, then drops documents hit by a negative term. Results come
/// back in ascending id order, unsorted by relevance.
pub fn find_all_documents<P>(
    policy: ExecutionPolicy,
    index: &InvertedIndex,
    store: &DocumentStore,
    query: &Query,
    predicate: P,
) -> Vec<Document>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    let document_to_relevance = match policy {
        ExecutionPolicy::Sequential => accumulate_sequential(index, store, query, &predicate),
        ExecutionPolicy::Parallel => accumulate_parallel(index, store, query, &predicate),
    };

    document_to_relevance
        .into_iter()
        .filter_map(|(document_id, relevance)| {
            store
                .get(document_id)
                .map(|data| Document::new(document_id, relevance, data.rating))
        })
        .collect()
}

fn accumulate_sequential<P>(
    index: &InvertedIndex,
    store: &DocumentStore,
    query: &Query,
    predicate: &P,
) -> BTreeMap<DocId, f64>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let mut document_to_relevance = BTreeMap::new();
    for word in &query.plus_words {
        let Some(postings) = index.postings_for(word) else {
            continue;
        };
        let inverse_document_freq = inverse_document_freq(store.len(), postings.len());
        for (&document_id, &term_freq) in postings {
            let Some(data) = store.get(document_id) else {
                continue;
            };
            if predicate(document_id, data.status, data.rating) {
                *document_to_relevance.entry(document_id).or_insert(0.0) +=
                    term_freq * inverse_document_freq;
            }
        }
    }
    for word in &query.minus_words {
        if let Some(postings) = index.postings_for(word) {
            for document_id in postings.keys() {
                document_to_relevance.remove(document_id);
            }
        }
    }
    document_to_relevance
}

fn accumulate_parallel<P>(
    index: &InvertedIndex,
    store: &DocumentStore,
    query: &Query,
    predicate: &P,
) -> BTreeMap<DocId, f64>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    let document_to_relevance = ConcurrentMap::default();
    query.plus_words.par_iter().for_each(|word| {
        let Some(postings) = index.postings_for(word) else {
            return;
        };
        let inverse_document_freq = inverse_document_freq(store.len(), postings.len());
        for (&document_id, &term_freq) in postings {
            let Some(data) = store.get(document_id) else {
                continue;
            };
            if predicate(document_id, data.status, data.rating) {
                document_to_relevance.add(document_id, term_freq * inverse_document_freq);
            }
        }
    });
    query.minus_words.par_iter().for_each(|word| {
        if let Some(postings) = index.postings_for(word) {
            for &document_id in postings.keys() {
                document_to_relevance.erase(document_id);
            }
        }
    });
    document_to_relevance.build_ordered()
}
