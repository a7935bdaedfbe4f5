use std::cmp::Ordering;

use crate::core::types::Document;

/// Result lists are cut to this many documents.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance gaps below this are treated as ties and broken by rating.
/// Also absorbs cross-policy floating-point summation-order drift.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Orders by relevance descending, breaking near-ties by rating descending,
/// then truncates to [`MAX_RESULT_DOCUMENT_COUNT`].
pub fn sort_and_truncate(mut documents: Vec<Document>) -> Vec<Document> {
    documents.sort_by(compare_documents);
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
    documents
}

fn compare_documents(lhs: &Document, rhs: &Document) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance
            .partial_cmp(&lhs.relevance)
            .unwrap_or(Ordering::Equal)
    }
}
