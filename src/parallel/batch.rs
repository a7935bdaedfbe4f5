use rayon::prelude::*;

use crate::core::server::SearchServer;
use crate::core::types::Document;

/// Runs `find_top` for every query across the rayon pool.
///
/// The output vector is index-aligned with `queries` regardless of worker
/// scheduling. A query that fails to parse contributes an empty result
/// vector at its position; the batch never aborts.
pub fn process_queries(server: &SearchServer, queries: &[String]) -> Vec<Vec<Document>> {
    queries
        .par_iter()
        .map(|query| server.find_top(query).unwrap_or_default())
        .collect()
}

/// Like [`process_queries`], flattened in input order.
pub fn process_queries_joined(server: &SearchServer, queries: &[String]) -> Vec<Document> {
    process_queries(server, queries).into_iter().flatten().collect()
}
