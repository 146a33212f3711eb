use std::collections::BTreeMap;
use rayon::prelude::*;
use crate::core::types::{DocId, DocumentData};
use crate::index::inverted::InvertedIndex;
use crate::parallel::concurrent_map::ConcurrentMap;
use crate::parallel::policy::ExecutionPolicy;
use crate::query::types::Query;
use crate::scoring::scorer::TfIdfScorer;
use crate::search::predicate::DocumentPredicate;
use crate::search::results::Document;

/// Accumulates TF-IDF relevance for a parsed query over a borrowed index.
pub struct QueryExecutor<'a> {
    pub index: &'a InvertedIndex,
    pub documents: &'a BTreeMap<DocId, DocumentData>,
    pub scorer: TfIdfScorer,
    pub shard_count: usize,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(
        index: &'a InvertedIndex,
        documents: &'a BTreeMap<DocId, DocumentData>,
        shard_count: usize,
    ) -> Self {
        QueryExecutor {
            index,
            documents,
            scorer: TfIdfScorer::new(),
            shard_count,
        }
    }

    /// Every document that survives the query, unsorted.
    ///
    /// Plus words add `tf * idf` for documents accepted by `predicate`; minus
    /// words then drop their documents unconditionally.
    pub fn find_all(
        &self,
        policy: ExecutionPolicy,
        query: &Query,
        predicate: &dyn DocumentPredicate,
    ) -> Vec<Document> {
        let relevance = match policy {
            ExecutionPolicy::Sequential => self.accumulate_sequential(query, predicate),
            ExecutionPolicy::Parallel => self.accumulate_parallel(query, predicate),
        };

        relevance.into_iter()
            .filter_map(|(doc_id, relevance)| {
                self.documents.get(&doc_id)
                    .map(|data| Document::new(doc_id, relevance, data.rating))
            })
            .collect()
    }

    fn admits(&self, doc_id: DocId, predicate: &dyn DocumentPredicate) -> bool {
        self.documents.get(&doc_id)
            .is_some_and(|data| predicate.matches(doc_id, data.status, data.rating))
    }

    fn accumulate_sequential(
        &self,
        query: &Query,
        predicate: &dyn DocumentPredicate,
    ) -> BTreeMap<DocId, f64> {
        let total_docs = self.documents.len();
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(posting_list) = self.index.search_term(word) else {
                continue;
            };
            let idf = self.scorer.idf(total_docs, posting_list.doc_freq());
            for (doc_id, term_freq) in posting_list.iter() {
                if self.admits(doc_id, predicate) {
                    *relevance.entry(doc_id).or_insert(0.0) += self.scorer.score(term_freq, idf);
                }
            }
        }

        for word in &query.minus_words {
            if let Some(posting_list) = self.index.search_term(word) {
                for doc_id in posting_list.doc_ids() {
                    relevance.remove(&doc_id);
                }
            }
        }

        relevance
    }

    fn accumulate_parallel(
        &self,
        query: &Query,
        predicate: &dyn DocumentPredicate,
    ) -> BTreeMap<DocId, f64> {
        let total_docs = self.documents.len();
        let relevance: ConcurrentMap<DocId, f64> = ConcurrentMap::new(self.shard_count);

        query.plus_words.par_iter().for_each(|word| {
            let Some(posting_list) = self.index.search_term(word) else {
                return;
            };
            let idf = self.scorer.idf(total_docs, posting_list.doc_freq());
            for (doc_id, term_freq) in posting_list.iter() {
                if self.admits(doc_id, predicate) {
                    *relevance.access(doc_id) += self.scorer.score(term_freq, idf);
                }
            }
        });

        // Runs only after every plus word has been accumulated.
        query.minus_words.par_iter().for_each(|word| {
            if let Some(posting_list) = self.index.search_term(word) {
                for doc_id in posting_list.doc_ids() {
                    relevance.remove(doc_id);
                }
            }
        });

        relevance.into_map()
    }
}
