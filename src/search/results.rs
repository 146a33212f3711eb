use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Document with relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        Document { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Orders hits by descending relevance, breaks ties (relevance closer than
/// `epsilon`) by descending rating and then ascending id, and keeps the
/// first `k`.
pub struct TopKCollector {
    pub k: usize,
    pub epsilon: f64,
}

impl TopKCollector {
    pub fn new(k: usize, epsilon: f64) -> Self {
        TopKCollector { k, epsilon }
    }

    pub fn collect(&self, mut hits: Vec<Document>) -> Vec<Document> {
        hits.sort_by(|a, b| {
            b.relevance
                .total_cmp(&a.relevance)
                .then_with(|| b.rating.cmp(&a.rating))
                .then_with(|| a.id.cmp(&b.id))
        });

        // An epsilon comparison is not a total order, so ties are settled on
        // runs of near-equal relevance after the strict sort.
        let mut start = 0;
        while start < hits.len() {
            let anchor = hits[start].relevance;
            let mut end = start + 1;
            while end < hits.len() && (anchor - hits[end].relevance).abs() < self.epsilon {
                end += 1;
            }
            hits[start..end].sort_by(|a, b| {
                b.rating.cmp(&a.rating).then_with(|| a.id.cmp(&b.id))
            });
            start = end;
        }

        hits.truncate(self.k);
        hits
    }
}
