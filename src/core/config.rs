#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on the number of hits returned by a single search.
    pub max_result_document_count: usize,
    /// Relevance values closer than this are treated as equal and ordered by rating.
    pub relevance_epsilon: f64,
    /// Shard count for the concurrent accumulators used by parallel execution.
    pub shard_count: usize,
    /// Capacity of the request statistics window.
    pub requests_per_day: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_result_document_count: 5,
            relevance_epsilon: 1e-6,
            shard_count: 64,
            requests_per_day: 1440,  // one request per minute
        }
    }
}
