use quaero::core::server::SearchServer;
use quaero::core::types::{DocId, DocumentStatus};
use quaero::parallel::batch::{process_queries, process_queries_joined};
use quaero::parallel::ExecutionPolicy;
use quaero::search::dedup::remove_duplicates;
use quaero::search::pagination::paginate;
use quaero::search::requests::RequestQueue;
use quaero::search::results::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};

fn ranking_corpus() -> SearchServer {
    let mut server = SearchServer::from_text("").unwrap();
    server
        .add_document(
            DocId(0),
            "a white cat and a fashionable collar",
            DocumentStatus::Actual,
            &[8, -3],
        )
        .unwrap();
    server
        .add_document(
            DocId(1),
            "fluffy cat fluffy tail",
            DocumentStatus::Actual,
            &[7, 2, 7],
        )
        .unwrap();
    server
        .add_document(
            DocId(2),
            "kind dog expressive eyes",
            DocumentStatus::Actual,
            &[5, -12, 2, 1],
        )
        .unwrap();
    server
}

#[test]
fn stop_words_exclude_matches() {
    let mut server = SearchServer::from_text("in the").unwrap();
    server
        .add_document(DocId(42), "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();
    assert!(server.find_top("in").unwrap().is_empty());

    let mut unfiltered = SearchServer::from_text("").unwrap();
    unfiltered
        .add_document(DocId(42), "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();
    let results = unfiltered.find_top("in").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, DocId(42));
}

#[test]
fn minus_word_removes_document_from_results() {
    let mut server = SearchServer::from_text("").unwrap();
    server
        .add_document(DocId(50), "big black dog", DocumentStatus::Actual, &[3, 5, -2])
        .unwrap();
    server
        .add_document(DocId(51), "tiny black kitty", DocumentStatus::Actual, &[4, 9, -8])
        .unwrap();

    let results = server.find_top("black dog -big").unwrap();
    assert!(results.iter().all(|d| d.id != DocId(50)));
    assert!(results.iter().any(|d| d.id == DocId(51)));

    assert!(!server.find_top("black dog").unwrap().is_empty());
}

#[test]
fn results_come_back_in_descending_relevance() {
    let server = ranking_corpus();
    let results = server.find_top("fluffy kind cat").unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].id, DocId(1));
    for pair in results.windows(2) {
        assert!(pair[0].relevance > pair[1].relevance);
    }
}

#[test]
fn predicate_filters_results() {
    let server = ranking_corpus();
    let results = server
        .find_top_with("fluffy kind cat", |id, _, _| id.value() % 2 == 0)
        .unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|d| d.id.value() % 2 == 0));
}

#[test]
fn status_filter_selects_exactly_that_status() {
    let mut server = SearchServer::from_text("").unwrap();
    server
        .add_document(
            DocId(0),
            "a white cat and a fashionable collar",
            DocumentStatus::Actual,
            &[8, -3],
        )
        .unwrap();
    server
        .add_document(DocId(1), "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
        .unwrap();
    server
        .add_document(
            DocId(2),
            "kind dog expressive eyes",
            DocumentStatus::Banned,
            &[5, -12, 2, 1],
        )
        .unwrap();

    let banned = server
        .find_top_with_status("fluffy kind cat", DocumentStatus::Banned)
        .unwrap();
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].id, DocId(2));

    // No REMOVED documents exist, so that filter yields nothing.
    let removed = server
        .find_top_with_status("fluffy kind cat", DocumentStatus::Removed)
        .unwrap();
    assert!(removed.is_empty());
}

#[test]
fn duplicate_documents_are_removed_by_vocabulary() {
    let mut server = SearchServer::from_text("and with").unwrap();
    let corpus = [
        (1, "funny pet and nasty rat"),
        (2, "funny pet with curly hair"),
        (3, "funny pet with curly hair"),
        (4, "funny pet and curly hair"),
        (5, "funny funny pet and nasty nasty rat"),
        (6, "funny pet and not very nasty rat"),
        (7, "very nasty rat and not very funny pet"),
        (8, "pet with rat and rat and rat"),
        (9, "nasty rat with curly hair"),
    ];
    for (id, text) in corpus {
        server
            .add_document(DocId(id), text, DocumentStatus::Actual, &[1, 2])
            .unwrap();
    }
    assert_eq!(server.document_count(), 9);

    remove_duplicates(&mut server);

    let ids: Vec<i32> = server.document_ids().map(|id| id.value()).collect();
    assert_eq!(ids, vec![1, 2, 6, 8, 9]);
    assert_eq!(server.document_count(), 5);
}

#[test]
fn truncates_to_top_five() {
    let mut server = SearchServer::from_text("").unwrap();
    for id in 0..8 {
        let text = format!("shared {}", "padding ".repeat(id as usize + 1).trim_end());
        server
            .add_document(DocId(id), &text, DocumentStatus::Actual, &[id])
            .unwrap();
    }
    let results = server.find_top("shared").unwrap();
    assert_eq!(results.len(), MAX_RESULT_DOCUMENT_COUNT);
}

#[test]
fn parallel_find_top_matches_sequential() {
    let server = ranking_corpus();
    for raw_query in ["fluffy kind cat", "cat -tail", "kind eyes -collar"] {
        let sequential = server.find_top(raw_query).unwrap();
        let parallel = server
            .find_top_policy(ExecutionPolicy::Parallel, raw_query)
            .unwrap();

        assert_eq!(sequential.len(), parallel.len(), "query {:?}", raw_query);
        let mut seq_ids: Vec<i32> = sequential.iter().map(|d| d.id.value()).collect();
        let mut par_ids: Vec<i32> = parallel.iter().map(|d| d.id.value()).collect();
        seq_ids.sort_unstable();
        par_ids.sort_unstable();
        assert_eq!(seq_ids, par_ids);

        for (s, p) in sequential.iter().zip(&parallel) {
            assert!((s.relevance - p.relevance).abs() < RELEVANCE_EPSILON);
        }
    }
}

#[test]
fn removal_is_visible_to_queries() {
    let mut server = ranking_corpus();
    server.remove_document(DocId(1));
    let results = server.find_top("fluffy kind cat").unwrap();
    assert!(results.iter().all(|d| d.id != DocId(1)));
    assert_eq!(server.document_count(), 2);
}

#[test]
fn stop_word_only_query_finds_nothing() {
    let mut server = SearchServer::from_text("in the").unwrap();
    server
        .add_document(DocId(1), "cat in the city", DocumentStatus::Actual, &[1])
        .unwrap();
    assert!(server.find_top("in the").unwrap().is_empty());
}

#[test]
fn forward_and_reverse_index_stay_consistent() {
    let mut server = SearchServer::from_text("and").unwrap();
    server
        .add_document(DocId(1), "black dog and tail", DocumentStatus::Actual, &[1])
        .unwrap();
    server
        .add_document(DocId(2), "black cat", DocumentStatus::Actual, &[2])
        .unwrap();
    server.remove_document(DocId(1));

    for id in server.document_ids().collect::<Vec<_>>() {
        let freqs = server.word_frequencies(id);
        let total: f64 = freqs.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        for word in freqs.keys() {
            let (matched, _) = server.match_document(word, id).unwrap();
            assert_eq!(matched, vec![word.clone()]);
        }
    }
    assert!(server.word_frequencies(DocId(1)).is_empty());
}

#[test]
fn batch_queries_preserve_order_and_flatten() {
    let server = ranking_corpus();
    let queries: Vec<String> = ["fluffy", "kind dog", "absent term"]
        .iter()
        .map(|q| q.to_string())
        .collect();

    let per_query = process_queries(&server, &queries);
    assert_eq!(per_query.len(), 3);
    assert_eq!(per_query[0][0].id, DocId(1));
    assert_eq!(per_query[1][0].id, DocId(2));
    assert!(per_query[2].is_empty());

    let joined = process_queries_joined(&server, &queries);
    let expected: Vec<_> = per_query.into_iter().flatten().collect();
    assert_eq!(joined, expected);
}

#[test]
fn request_queue_counts_misses_over_window() {
    let mut server = SearchServer::from_text("").unwrap();
    server
        .add_document(DocId(1), "curly dog", DocumentStatus::Actual, &[3])
        .unwrap();

    let mut queue = RequestQueue::new(&server);
    for _ in 0..1439 {
        queue.add_find_request("empty request").unwrap();
    }
    queue.add_find_request("curly dog").unwrap();
    assert_eq!(queue.no_result_requests(), 1439);
}

#[test]
fn pagination_chunks_results() {
    let server = ranking_corpus();
    let results = server.find_top("fluffy kind cat").unwrap();
    let pages = paginate(&results, 2);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 2);
    assert_eq!(pages[1].len(), 1);
    assert_eq!(pages[0][0].id, results[0].id);
}
