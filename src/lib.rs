pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;
pub mod parallel;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::search_server::SearchServer;
pub use crate::core::stats::RequestQueue;
pub use crate::core::types::{DocId, DocumentStatus};
pub use crate::index::duplicates::remove_duplicates;
pub use crate::parallel::batch::{process_queries, process_queries_joined};
pub use crate::parallel::concurrent_map::ConcurrentMap;
pub use crate::parallel::policy::ExecutionPolicy;
pub use crate::search::predicate::DocumentPredicate;
pub use crate::search::results::Document;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                            RANKDEX ARCHITECTURE                              │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ──────────────────────────────────┐
│  struct SearchServer                                                         │
│  │ config: Config                        // limits, epsilon, shard count     │
│  │ analyzer: Analyzer                    // split + validate + stop words    │
│  │ index: InvertedIndex                  // term -> PostingList              │
│  │ documents: BTreeMap<DocId, DocumentData> // rating, status, word_freqs    │
│  │ document_ids: BTreeSet<DocId>         // ascending iteration              │
│                                                                              │
│  struct RequestQueue<'a>   // sliding window of "was empty" outcomes         │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── SEARCH LAYER ────────────────────────────────┐
│  QueryParser ──► Query { plus_words, minus_words }                           │
│  QueryExecutor ──► relevance += tf * ln(N / df)  (minus words drop docs)     │
│  TopKCollector ──► relevance desc, rating desc within epsilon, first k       │
└──────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── PARALLEL LAYER ───────────────────────────────┐
│  ConcurrentMap<K, V>   // Vec<Mutex<BTreeMap>>, shard = key mod N            │
│  process_queries       // rayon fan-out, output[i] <-> queries[i]            │
│  process_queries_joined                                                      │
│  ExecutionPolicy { Sequential, Parallel }                                    │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── MAINTENANCE ───────────────────────────────────┐
│  remove_duplicates     // equal term sets, lowest id kept                    │
└──────────────────────────────────────────────────────────────────────────────┘
*/
