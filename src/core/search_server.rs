use std::collections::{btree_set, BTreeMap, BTreeSet};
use rayon::prelude::*;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::types::{compute_average_rating, DocId, DocumentData, DocumentStatus};
use crate::index::inverted::InvertedIndex;
use crate::parallel::policy::ExecutionPolicy;
use crate::query::parser::QueryParser;
use crate::query::types::Query;
use crate::search::executor::QueryExecutor;
use crate::search::predicate::DocumentPredicate;
use crate::search::results::{Document, TopKCollector};

static EMPTY_WORD_FREQS: BTreeMap<String, f64> = BTreeMap::new();

/// In-memory TF-IDF search server.
///
/// Reads take `&self` and may run from any number of threads at once; writes
/// take `&mut self`, so a write can never overlap a read. Views handed out by
/// `get_word_frequencies` and `match_document` borrow the server and therefore
/// cannot outlive a later `remove_document`.
#[derive(Debug)]
pub struct SearchServer {
    config: Config,
    analyzer: Analyzer,
    index: InvertedIndex,
    documents: BTreeMap<DocId, DocumentData>,
    document_ids: BTreeSet<DocId>,
}

impl SearchServer {
    /// Stop words given as space separated text.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        let stop_words = StopWordFilter::from_text(stop_words_text)?;
        Ok(Self::with_config(stop_words, Config::default()))
    }

    /// Stop words given as an explicit collection.
    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = StopWordFilter::new(stop_words)?;
        Ok(Self::with_config(stop_words, Config::default()))
    }

    pub fn with_config(stop_words: StopWordFilter, config: Config) -> Self {
        SearchServer {
            config,
            analyzer: Analyzer::whitespace(stop_words),
            index: InvertedIndex::new(),
            documents: BTreeMap::new(),
            document_ids: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn add_document(
        &mut self,
        document_id: impl Into<DocId>,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let doc_id = document_id.into();
        if doc_id.0 < 0 {
            return Err(Error::invalid_argument(format!("Document id {} is negative", doc_id)));
        }
        if self.documents.contains_key(&doc_id) {
            return Err(Error::invalid_argument(format!("Document id {} already exists", doc_id)));
        }

        // Analysis fails before anything is stored, so a rejected add leaves no trace.
        let tokens = self.analyzer.analyze(document)?;

        let mut data = DocumentData::new(compute_average_rating(ratings), status);
        let inv_word_count = 1.0 / tokens.len() as f64;
        for token in tokens {
            *data.word_freqs.entry(token.text).or_insert(0.0) += inv_word_count;
        }

        self.index.add_document(doc_id, &data.word_freqs);
        tracing::debug!(doc_id = doc_id.0, terms = data.word_freqs.len(), "document added");
        self.documents.insert(doc_id, data);
        self.document_ids.insert(doc_id);

        Ok(())
    }

    pub fn remove_document(&mut self, document_id: impl Into<DocId>) {
        self.remove_document_with(ExecutionPolicy::Sequential, document_id);
    }

    /// No-op when the id is not indexed.
    pub fn remove_document_with(&mut self, policy: ExecutionPolicy, document_id: impl Into<DocId>) {
        let doc_id = document_id.into();
        let Some(data) = self.documents.remove(&doc_id) else {
            return;
        };

        self.index.remove_document(policy, doc_id, &data.word_freqs);
        self.document_ids.remove(&doc_id);
        tracing::debug!(doc_id = doc_id.0, ?policy, "document removed");
    }

    /// Top hits among documents with `DocumentStatus::Actual`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, &status)
    }

    pub fn find_top_documents_by(
        &self,
        raw_query: &str,
        predicate: &dyn DocumentPredicate,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    pub fn find_top_documents_with(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: &dyn DocumentPredicate,
    ) -> Result<Vec<Document>> {
        let query = self.parse_query(raw_query)?;
        let executor = QueryExecutor::new(&self.index, &self.documents, self.config.shard_count);
        let hits = executor.find_all(policy, &query, predicate);

        let collector = TopKCollector::new(
            self.config.max_result_document_count,
            self.config.relevance_epsilon,
        );
        Ok(collector.collect(hits))
    }

    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: impl Into<DocId>,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        self.match_document_with(ExecutionPolicy::Sequential, raw_query, document_id)
    }

    /// Plus words found in the document, in ascending order, and its status.
    /// The word list is empty when any minus word occurs in the document.
    ///
    /// The matched words borrow the index and are invalidated by removal:
    ///
    /// ```compile_fail
    /// use rankdex::core::search_server::SearchServer;
    /// use rankdex::core::types::DocumentStatus;
    /// use rankdex::parallel::policy::ExecutionPolicy;
    ///
    /// let mut server = SearchServer::new("").unwrap();
    /// server.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
    /// let (words, _) = server.match_document_with(ExecutionPolicy::Sequential, "cat", 1).unwrap();
    /// server.remove_document(1);
    /// assert_eq!(words, vec!["cat"]);
    /// ```
    pub fn match_document_with(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        document_id: impl Into<DocId>,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        let doc_id = document_id.into();
        let query = self.parse_query(raw_query)?;
        let status = self.documents.get(&doc_id)
            .map(|data| data.status)
            .ok_or_else(|| Error::invalid_argument(format!("Document id {} is not indexed", doc_id)))?;

        let excluded = match policy {
            ExecutionPolicy::Sequential => query.minus_words.iter()
                .any(|word| self.index.contains(word, doc_id)),
            ExecutionPolicy::Parallel => query.minus_words.par_iter()
                .any(|word| self.index.contains(word, doc_id)),
        };
        if excluded {
            return Ok((Vec::new(), status));
        }

        let matched_term = |word: &String| {
            self.index.term_entry(word)
                .filter(|(_, posting_list)| posting_list.contains(doc_id))
                .map(|(term, _)| term)
        };
        let matched_words: Vec<&str> = match policy {
            ExecutionPolicy::Sequential => query.plus_words.iter().filter_map(matched_term).collect(),
            ExecutionPolicy::Parallel => query.plus_words.par_iter().filter_map(matched_term).collect(),
        };

        Ok((matched_words, status))
    }

    /// Term -> frequency map of a document; empty when the id is not indexed.
    ///
    /// ```
    /// use rankdex::core::search_server::SearchServer;
    /// use rankdex::core::types::DocumentStatus;
    ///
    /// let mut server = SearchServer::new("and").unwrap();
    /// server.add_document(1, "cat and dog", DocumentStatus::Actual, &[]).unwrap();
    /// assert_eq!(server.get_word_frequencies(1).get("cat"), Some(&0.5));
    /// ```
    ///
    /// The map borrows the server, so it cannot be held across a removal:
    ///
    /// ```compile_fail
    /// use rankdex::core::search_server::SearchServer;
    /// use rankdex::core::types::DocumentStatus;
    ///
    /// let mut server = SearchServer::new("").unwrap();
    /// server.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
    /// let freqs = server.get_word_frequencies(1);
    /// server.remove_document(1);
    /// assert!(freqs.contains_key("cat"));
    /// ```
    pub fn get_word_frequencies(&self, document_id: impl Into<DocId>) -> &BTreeMap<String, f64> {
        self.documents.get(&document_id.into())
            .map(|data| &data.word_freqs)
            .unwrap_or(&EMPTY_WORD_FREQS)
    }

    pub fn document(&self, document_id: impl Into<DocId>) -> Option<&DocumentData> {
        self.documents.get(&document_id.into())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Live document ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_ids.iter().copied()
    }

    fn parse_query(&self, raw_query: &str) -> Result<Query> {
        QueryParser::new(&self.analyzer).parse(raw_query)
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocId;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, DocId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids.iter().copied()
    }
}
