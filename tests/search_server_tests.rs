use rankdex::core::config::Config;
use rankdex::core::search_server::SearchServer;
use rankdex::core::stats::{RequestQueue, RequestStats};
use rankdex::core::types::{DocId, DocumentStatus};
use rankdex::analysis::filters::stopword::StopWordFilter;
use rankdex::index::duplicates::remove_duplicates;
use rankdex::parallel::policy::ExecutionPolicy;
use rankdex::search::results::Document;

const STOP_WORDS: &str = "and in on with";

const SAMPLE_DOCS: [(i32, &str, DocumentStatus, &[i32]); 8] = [
    (1, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3]),
    (2, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7]),
    (3, "groomed dog expressive eyes", DocumentStatus::Actual, &[5, -12, 2, 1]),
    (4, "groomed starling eugene", DocumentStatus::Banned, &[9]),
    (5, "curly cat curly tail", DocumentStatus::Irrelevant, &[1]),
    (6, "cat with dog in garden", DocumentStatus::Actual, &[4, 4]),
    (7, "dog dog dog", DocumentStatus::Actual, &[]),
    (8, "tail of a cat", DocumentStatus::Removed, &[-5, -6]),
];

fn build_server<'a, I>(docs: I) -> SearchServer
where
    I: IntoIterator<Item = (i32, &'a str, DocumentStatus, &'a [i32])>,
{
    let mut server = SearchServer::new(STOP_WORDS).unwrap();
    for (id, text, status, ratings) in docs {
        server.add_document(id, text, status, ratings).unwrap();
    }
    server
}

fn sample_server() -> SearchServer {
    build_server(SAMPLE_DOCS)
}

fn ids(documents: &[Document]) -> Vec<i32> {
    documents.iter().map(|d| d.id.0).collect()
}

fn assert_views_agree(server: &SearchServer) {
    for doc_id in server {
        for (term, &freq) in server.get_word_frequencies(doc_id) {
            let posting = server.index().search_term(term).unwrap();
            assert_eq!(posting.term_freq(doc_id), Some(freq), "doc {} term {:?}", doc_id, term);
        }
    }
    for term in server.index().terms() {
        let posting = server.index().search_term(term).unwrap();
        assert!(!posting.is_empty(), "empty posting left for {:?}", term);
        for doc_id in posting.doc_ids() {
            assert!(server.get_word_frequencies(doc_id).contains_key(term));
        }
    }
}

#[test]
fn forward_and_inverse_views_agree() {
    assert_views_agree(&sample_server());
}

#[test]
fn views_agree_after_removals() {
    for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
        let mut server = sample_server();
        for id in [2, 7, 4, 100] {
            server.remove_document_with(policy, id);
            assert_views_agree(&server);
        }
        assert_eq!(server.document_count(), 5);
        assert!(server.index().search_term("fluffy").is_none());
        assert!(server.index().search_term("eugene").is_none());
    }
}

#[test]
fn views_agree_after_duplicate_removal() {
    let mut server = sample_server();
    server.add_document(10, "tail fluffy cat", DocumentStatus::Actual, &[]).unwrap();
    server.add_document(11, "dog and dog", DocumentStatus::Banned, &[]).unwrap();
    remove_duplicates(&mut server);
    assert_views_agree(&server);
}

#[test]
fn readding_after_removal_matches_a_fresh_build() {
    const REPLACEMENT: (i32, &str, DocumentStatus, &[i32]) =
        (3, "curly parrot and curly cage", DocumentStatus::Banned, &[2, 4]);

    let fresh = build_server(
        SAMPLE_DOCS.into_iter()
            .filter(|&(id, ..)| id != 3 && id != 6)
            .chain([REPLACEMENT]),
    );

    for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
        let mut server = sample_server();
        server.remove_document_with(policy, 3);
        server.remove_document_with(policy, 6);
        let (id, text, status, ratings) = REPLACEMENT;
        server.add_document(id, text, status, ratings).unwrap();

        assert_eq!(server.index().postings, fresh.index().postings, "{:?}", policy);
        assert_eq!(server.iter().collect::<Vec<_>>(), fresh.iter().collect::<Vec<_>>());
        for doc_id in &fresh {
            let (ours, theirs) = (server.document(doc_id).unwrap(), fresh.document(doc_id).unwrap());
            assert_eq!(ours.word_freqs, theirs.word_freqs);
            assert_eq!((ours.rating, ours.status), (theirs.rating, theirs.status));
        }
        assert!(server.index().search_term("expressive").is_none());
        assert!(server.index().search_term("garden").is_none());
        assert_views_agree(&server);
    }
}

#[test]
fn term_frequencies_sum_to_one() {
    let server = sample_server();
    for doc_id in &server {
        let total: f64 = server.get_word_frequencies(doc_id).values().sum();
        assert!((total - 1.0).abs() < 1e-9, "doc {} sums to {}", doc_id, total);
    }
}

#[test]
fn stop_words_are_never_indexed() {
    let server = sample_server();
    for stop_word in ["and", "in", "on", "with"] {
        assert!(server.index().search_term(stop_word).is_none());
    }
    assert_eq!(server.get_word_frequencies(6).len(), 3);
}

#[test]
fn removing_twice_matches_removing_once() {
    let mut once = sample_server();
    once.remove_document(3);
    let mut twice = sample_server();
    twice.remove_document(3);
    twice.remove_document(3);
    twice.remove_document(100);

    assert_eq!(once.iter().collect::<Vec<_>>(), twice.iter().collect::<Vec<_>>());
    assert_eq!(once.term_count(), twice.term_count());
    assert!(once.index().search_term("expressive").is_none());
    assert_eq!(
        once.find_top_documents("dog groomed").unwrap(),
        twice.find_top_documents("dog groomed").unwrap()
    );
}

#[test]
fn removed_id_can_be_added_again() {
    let mut server = sample_server();
    server.remove_document_with(ExecutionPolicy::Parallel, 2);
    assert!(server.find_top_documents("fluffy").unwrap().is_empty());

    server.add_document(2, "fluffy parrot", DocumentStatus::Actual, &[3]).unwrap();
    let hits = server.find_top_documents("fluffy").unwrap();
    assert_eq!(ids(&hits), vec![2]);
    assert_eq!(hits[0].rating, 3);
}

#[test]
fn results_are_ranked_and_capped() {
    let server = sample_server();
    let hits = server.find_top_documents("cat dog tail groomed fluffy collar").unwrap();
    assert!(hits.len() <= Config::default().max_result_document_count);
    for pair in hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.relevance > b.relevance - 1e-6);
        if a.relevance == b.relevance {
            assert!(a.rating >= b.rating);
        }
    }
    assert_eq!(hits, server.find_top_documents("cat dog tail groomed fluffy collar").unwrap());
}

#[test]
fn minus_words_exclude_absolutely() {
    let server = sample_server();
    let hits = server.find_top_documents("cat dog -tail").unwrap();
    assert!(!hits.is_empty());
    for document in &hits {
        assert!(!server.get_word_frequencies(document.id).contains_key("tail"));
    }
    assert!(server.find_top_documents("cat -cat").unwrap().is_empty());
}

#[test]
fn minus_word_unknown_to_the_index_is_harmless() {
    let server = sample_server();
    assert_eq!(
        server.find_top_documents("cat -zebra").unwrap(),
        server.find_top_documents("cat").unwrap()
    );
}

#[test]
fn query_of_only_stop_words_finds_nothing() {
    let server = sample_server();
    assert!(server.find_top_documents("and with in").unwrap().is_empty());
    assert!(server.find_top_documents("").unwrap().is_empty());
}

#[test]
fn malformed_queries_are_rejected() {
    let server = sample_server();
    for query in ["cat -", "--cat", "cat \u{7}dog", "-"] {
        let err = server.find_top_documents(query).unwrap_err();
        assert!(err.is_invalid_argument(), "query {:?}", query);
    }
}

#[test]
fn sequential_and_parallel_policies_agree() {
    let server = sample_server();
    let any = |_: DocId, _: DocumentStatus, _: i32| true;
    for query in ["cat", "dog -garden", "groomed fluffy tail", "cat dog tail -white"] {
        let sequential = server.find_top_documents_with(ExecutionPolicy::Sequential, query, &any).unwrap();
        let parallel = server.find_top_documents_with(ExecutionPolicy::Parallel, query, &any).unwrap();
        assert_eq!(ids(&sequential), ids(&parallel), "query {:?}", query);
        for (s, p) in sequential.iter().zip(&parallel) {
            assert!((s.relevance - p.relevance).abs() < 1e-9);
        }

        for doc_id in &server {
            assert_eq!(
                server.match_document_with(ExecutionPolicy::Sequential, query, doc_id).unwrap(),
                server.match_document_with(ExecutionPolicy::Parallel, query, doc_id).unwrap()
            );
        }
    }
}

#[test]
fn custom_config_limits_results() {
    let config = Config { max_result_document_count: 2, ..Config::default() };
    let mut server = SearchServer::with_config(StopWordFilter::from_text("").unwrap(), config);
    for id in 0..6 {
        server.add_document(id, "cat", DocumentStatus::Actual, &[id]).unwrap();
    }
    server.add_document(6, "dog", DocumentStatus::Actual, &[]).unwrap();
    let hits = server.find_top_documents("cat").unwrap();
    // equal relevance, so rating decides
    assert_eq!(ids(&hits), vec![5, 4]);
}

#[test]
fn stop_words_from_collection() {
    let server = SearchServer::from_stop_words(vec!["in", "", "the"]).unwrap();
    let mut server = server;
    server.add_document(1, "in the garden", DocumentStatus::Actual, &[]).unwrap();
    assert_eq!(server.get_word_frequencies(1).keys().collect::<Vec<_>>(), vec!["garden"]);
    assert!(SearchServer::from_stop_words(["bad\u{1}word"]).unwrap_err().is_invalid_argument());
}

#[test]
fn duplicate_removal_keeps_lowest_ids() {
    let mut server = sample_server();
    server.add_document(10, "tail fluffy cat", DocumentStatus::Actual, &[]).unwrap();
    server.add_document(11, "dog and dog", DocumentStatus::Banned, &[]).unwrap();
    let removed = remove_duplicates(&mut server);
    assert_eq!(removed, vec![DocId(10), DocId(11)]);
    assert!(server.iter().any(|id| id == DocId(2)));
    assert!(server.iter().any(|id| id == DocId(7)));
}

#[test]
fn request_window_holds_capacity_requests() {
    let server = sample_server();
    let capacity = 5;
    let mut queue = RequestQueue::with_capacity(&server, capacity);
    for _ in 0..capacity + 1 {
        queue.add_find_request("sparrow").unwrap();
    }
    assert_eq!(queue.stats(), RequestStats { total_requests: 5, no_result_requests: 5, capacity: 5 });

    for _ in 0..capacity {
        queue.add_find_request("cat").unwrap();
    }
    assert_eq!(queue.no_result_requests(), 0);
}

#[test]
fn results_and_stats_serialize() {
    let server = sample_server();
    let hits = server.find_top_documents("fluffy").unwrap();
    let json = serde_json::to_string(&hits).unwrap();
    let decoded: Vec<Document> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, hits);

    let stats = RequestStats { total_requests: 3, no_result_requests: 1, capacity: 1440 };
    let value = serde_json::to_value(stats).unwrap();
    assert_eq!(value["no_result_requests"], 1);
}

#[test]
fn document_display_format() {
    let document = Document::new(DocId(2), 0.5, -1);
    assert_eq!(document.to_string(), "{ document_id = 2, relevance = 0.5, rating = -1 }");
}
