use std::collections::VecDeque;
use serde::{Serialize, Deserialize};
use crate::core::error::Result;
use crate::core::search_server::SearchServer;
use crate::core::types::DocumentStatus;
use crate::search::predicate::DocumentPredicate;
use crate::search::results::Document;

/// Snapshot of the request window for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStats {
    pub total_requests: usize,
    pub no_result_requests: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    is_empty: bool,
}

/// Records the outcome of the last `capacity` searches and counts the ones
/// that found nothing. Requests that fail to parse are not recorded.
pub struct RequestQueue<'a> {
    search_server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    capacity: usize,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Window capacity comes from `Config::requests_per_day`.
    pub fn new(search_server: &'a SearchServer) -> Self {
        let capacity = search_server.config().requests_per_day;
        Self::with_capacity(search_server, capacity)
    }

    pub fn with_capacity(search_server: &'a SearchServer, capacity: usize) -> Self {
        RequestQueue {
            search_server,
            requests: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
            no_result_count: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let documents = self.search_server.find_top_documents(raw_query)?;
        self.record(&documents);
        Ok(documents)
    }

    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let documents = self.search_server.find_top_documents_by_status(raw_query, status)?;
        self.record(&documents);
        Ok(documents)
    }

    pub fn add_find_request_by(
        &mut self,
        raw_query: &str,
        predicate: &dyn DocumentPredicate,
    ) -> Result<Vec<Document>> {
        let documents = self.search_server.find_top_documents_by(raw_query, predicate)?;
        self.record(&documents);
        Ok(documents)
    }

    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    pub fn stats(&self) -> RequestStats {
        RequestStats {
            total_requests: self.requests.len(),
            no_result_requests: self.no_result_count,
            capacity: self.capacity,
        }
    }

    fn record(&mut self, documents: &[Document]) {
        let result = QueryResult { is_empty: documents.is_empty() };
        self.requests.push_back(result);
        if result.is_empty {
            self.no_result_count += 1;
        }

        while self.requests.len() > self.capacity {
            if let Some(oldest) = self.requests.pop_front() {
                if oldest.is_empty {
                    self.no_result_count -= 1;
                }
            }
        }
    }
}
