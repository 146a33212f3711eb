use std::collections::BTreeMap;
use crate::core::types::DocId;

/// Posting list for a term
/// Note: Keyed by doc_id so iteration is always ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingList {
    pub postings: BTreeMap<DocId, f64>,  // doc_id -> term frequency
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: BTreeMap::new(),
        }
    }

    /// Accumulates `term_freq` for `doc_id`.
    pub fn add(&mut self, doc_id: DocId, term_freq: f64) {
        *self.postings.entry(doc_id).or_insert(0.0) += term_freq;
    }

    pub fn remove(&mut self, doc_id: DocId) -> Option<f64> {
        self.postings.remove(&doc_id)
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.postings.contains_key(&doc_id)
    }

    pub fn term_freq(&self, doc_id: DocId) -> Option<f64> {
        self.postings.get(&doc_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, f64)> + '_ {
        self.postings.iter().map(|(&doc_id, &tf)| (doc_id, tf))
    }

    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.postings.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }
}
