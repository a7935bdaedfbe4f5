/// Complete Quaero API Demo
///
/// Demonstrates the major search-server operations:
/// - Adding documents with statuses and ratings
/// - Ranked queries (default, by status, by predicate, parallel)
/// - Matching a query against one document
/// - Batch query processing
/// - Duplicate removal and statistics

use quaero::core::server::SearchServer;
use quaero::core::types::{DocId, Document, DocumentStatus};
use quaero::parallel::batch::process_queries;
use quaero::parallel::ExecutionPolicy;
use quaero::search::dedup::remove_duplicates;
use quaero::search::pagination::paginate;

fn print_document(document: &Document) {
    println!(
        "  {{ document_id = {}, relevance = {:.6}, rating = {} }}",
        document.id.value(),
        document.relevance,
        document.rating
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("Creating search server with stop words \"and in on\"...");
    let mut server = SearchServer::from_text("and in on")?;

    println!("Adding documents...");
    server.add_document(
        DocId(0),
        "white cat and fashionable collar",
        DocumentStatus::Actual,
        &[8, -3],
    )?;
    server.add_document(
        DocId(1),
        "fluffy cat fluffy tail",
        DocumentStatus::Actual,
        &[7, 2, 7],
    )?;
    server.add_document(
        DocId(2),
        "kind dog expressive eyes",
        DocumentStatus::Actual,
        &[5, -12, 2, 1],
    )?;
    server.add_document(
        DocId(3),
        "kind starling eugene",
        DocumentStatus::Banned,
        &[9],
    )?;
    server.add_document(
        DocId(4),
        "fluffy tail fluffy cat",
        DocumentStatus::Actual,
        &[3],
    )?;
    println!("  {} documents indexed\n", server.document_count());

    println!("ACTUAL by default:");
    for document in server.find_top("fluffy kind cat")? {
        print_document(&document);
    }

    println!("BANNED:");
    for document in server.find_top_with_status("fluffy kind cat", DocumentStatus::Banned)? {
        print_document(&document);
    }

    println!("Even ids:");
    for document in server.find_top_with("fluffy kind cat", |id, _, _| id.value() % 2 == 0)? {
        print_document(&document);
    }

    println!("Parallel policy:");
    for document in server.find_top_policy(ExecutionPolicy::Parallel, "fluffy kind cat -collar")? {
        print_document(&document);
    }

    println!("\nMatching \"fluffy cat -dog\" against document 1:");
    let (words, status) = server.match_document("fluffy cat -dog", DocId(1))?;
    println!("  matched words: {:?}, status: {:?}", words, status);

    println!("\nBatch queries:");
    let queries = vec![
        "fluffy cat".to_string(),
        "kind dog".to_string(),
        "sparrow".to_string(),
    ];
    for (query, results) in queries.iter().zip(process_queries(&server, &queries)) {
        println!("  {:?} -> {} results", query, results.len());
    }

    println!("\nPaginating \"fluffy kind cat\" by 2:");
    let results = server.find_top("fluffy kind cat")?;
    for (page_number, page) in paginate(&results, 2).iter().enumerate() {
        println!("  page {}:", page_number);
        for document in page {
            print_document(document);
        }
    }

    println!("\nRemoving duplicates (document 4 duplicates document 1)...");
    remove_duplicates(&mut server);
    println!("  {} documents remain", server.document_count());

    let stats = server.stats();
    println!("\nIndex stats: {} documents, {} distinct terms", stats.document_count, stats.term_count);

    Ok(())
}
