/// rankdex API demo
///
/// Walks through the public surface of the search server:
/// - indexing documents with ratings and statuses
/// - ranked search with status and predicate filters
/// - matching a query against one document
/// - request statistics over a sliding window
/// - duplicate removal and batch query processing
///
/// Run with `RUST_LOG=rankdex=debug` to see per-document events.

use rankdex::core::search_server::SearchServer;
use rankdex::core::stats::RequestQueue;
use rankdex::core::types::{DocId, DocumentStatus};
use rankdex::core::utils::LogDuration;
use rankdex::index::duplicates::remove_duplicates;
use rankdex::parallel::batch::{process_queries, process_queries_joined};
use rankdex::parallel::policy::ExecutionPolicy;
use rankdex::search::results::Document;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║   rankdex Search Server - API Demo            ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Create server
    println!("Step 1: Creating server with stop words \"and in on with\"...");
    let mut server = SearchServer::new("and in on with")?;
    println!("Done!\n");

    // Step 2: Index documents
    println!("Step 2: INDEX - Adding documents...");
    {
        let _timer = LogDuration::new("indexing");
        server.add_document(1, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3])?;
        server.add_document(2, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])?;
        server.add_document(3, "groomed dog expressive eyes", DocumentStatus::Actual, &[5, -12, 2, 1])?;
        server.add_document(4, "groomed starling eugene", DocumentStatus::Banned, &[9])?;
        server.add_document(5, "fluffy cat fluffy tail", DocumentStatus::Actual, &[1])?;
    }
    println!("  Indexed {} documents, {} distinct terms", server.document_count(), server.term_count());

    match server.add_document(6, "broken \u{2}word", DocumentStatus::Actual, &[]) {
        Ok(_) => println!("  Unexpectedly accepted a control character"),
        Err(e) => println!("  Rejected document 6: {}", e),
    }
    println!();

    // Step 3: Search
    println!("Step 3: SEARCH - Ranked queries...");
    print_results("fluffy groomed cat", &server.find_top_documents("fluffy groomed cat")?);
    print_results(
        "fluffy groomed cat [BANNED]",
        &server.find_top_documents_by_status("fluffy groomed cat", DocumentStatus::Banned)?,
    );
    let even = |id: DocId, _: DocumentStatus, _: i32| id.0 % 2 == 0;
    print_results(
        "fluffy groomed cat [even ids]",
        &server.find_top_documents_by("fluffy groomed cat", &even)?,
    );
    print_results(
        "cat -collar [parallel]",
        &server.find_top_documents_with(ExecutionPolicy::Parallel, "cat -collar", &DocumentStatus::Actual)?,
    );
    println!();

    // Step 4: Match
    println!("Step 4: MATCH - Query words per document...");
    for id in &server {
        let (words, status) = server.match_document("fluffy cat -eugene", id)?;
        println!("  {{ document_id = {}, status = {:?}, words = {:?} }}", id, status, words);
    }
    println!();

    // Step 5: Request statistics
    println!("Step 5: STATS - Sliding request window...");
    let mut queue = RequestQueue::new(&server);
    for _ in 0..1439 {
        queue.add_find_request("empty request")?;
    }
    queue.add_find_request("curly dog")?;
    queue.add_find_request("big collar")?;
    queue.add_find_request("sparrow")?;
    let stats = queue.stats();
    println!("  Window:           {}/{}", stats.total_requests, stats.capacity);
    println!("  No-result count:  {}", stats.no_result_requests);
    println!();

    // Step 6: Batch
    println!("Step 6: BATCH - Processing queries in parallel...");
    let queries = ["fluffy cat", "groomed -eugene", "collar"];
    for (query, documents) in queries.iter().zip(process_queries(&server, &queries)?) {
        print_results(query, &documents);
    }
    let joined = process_queries_joined(&server, &queries)?;
    println!("  Joined: {} documents", joined.len());
    println!();

    // Step 7: Duplicates
    println!("Step 7: DEDUPLICATE - Removing documents with equal term sets...");
    let removed = remove_duplicates(&mut server);
    println!("  Removed {:?}; {} documents remain", removed, server.document_count());

    println!("\n╔════════════════════════════════════════╗");
    println!("║    All API Operations Completed!       ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}

fn print_results(query: &str, documents: &[Document]) {
    println!("  '{}': {} results", query, documents.len());
    for document in documents {
        println!("    {}", document);
    }
}
