use std::collections::HashSet;

use tracing::info;

use crate::core::server::SearchServer;
use crate::core::types::DocId;

/// Removes every document whose term set duplicates an earlier document's.
///
/// Documents are scanned in ascending id order, so the lowest id of each
/// term set survives. Term frequencies are ignored: two documents with the
/// same vocabulary are duplicates no matter how often each word occurs.
/// Ids are collected before any removal, so the scan never iterates a map
/// it is mutating. Running it twice is a no-op the second time.
pub fn remove_duplicates(server: &mut SearchServer) {
    let ids: Vec<DocId> = server.document_ids().collect();
    let mut seen_term_sets: HashSet<Vec<String>> = HashSet::new();
    let mut duplicates = Vec::new();

    for document_id in ids {
        // BTreeMap keys come out sorted, giving a canonical term-set form.
        let terms: Vec<String> = server
            .word_frequencies(document_id)
            .keys()
            .cloned()
            .collect();
        if !seen_term_sets.insert(terms) {
            duplicates.push(document_id);
        }
    }

    for document_id in duplicates {
        info!(document_id = document_id.value(), "removing duplicate document");
        server.remove_document(document_id);
    }
}
