use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub i32);

impl From<i32> for DocId {
    fn from(id: i32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle tag attached to every indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Per-document data owned by the search server.
#[derive(Debug, Clone)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
    /// Term -> share of the document's (stop word free) word count.
    pub word_freqs: BTreeMap<String, f64>,
}

impl DocumentData {
    pub fn new(rating: i32, status: DocumentStatus) -> Self {
        DocumentData {
            rating,
            status,
            word_freqs: BTreeMap::new(),
        }
    }

    pub fn has_same_terms(&self, other: &DocumentData) -> bool {
        self.word_freqs.len() == other.word_freqs.len()
            && self.word_freqs.keys().eq(other.word_freqs.keys())
    }
}

/// Integer-truncated mean, 0 when there are no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}
