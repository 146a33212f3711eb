use std::collections::BTreeMap;
use rayon::prelude::*;
use crate::core::types::DocId;
use crate::index::posting::PostingList;
use crate::parallel::policy::ExecutionPolicy;

/// Inverted index structure: term -> posting list.
///
/// Every document id stored under a term must also carry that term in its own
/// frequency map; `SearchServer` is the only writer and keeps both sides in step.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    pub postings: BTreeMap<String, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: BTreeMap::new(),
        }
    }

    pub fn add_document(&mut self, doc_id: DocId, word_freqs: &BTreeMap<String, f64>) {
        for (term, &term_freq) in word_freqs {
            self.postings.entry(term.clone())
                .or_insert_with(PostingList::new)
                .add(doc_id, term_freq);
        }
    }

    /// Drops `doc_id` from the postings of every term in `word_freqs` and purges
    /// postings left empty. Work is proportional to the document's own distinct
    /// terms under either policy; the parallel policy detaches those postings
    /// and edits each one on its own worker.
    pub fn remove_document(
        &mut self,
        policy: ExecutionPolicy,
        doc_id: DocId,
        word_freqs: &BTreeMap<String, f64>,
    ) {
        match policy {
            ExecutionPolicy::Sequential => {
                for term in word_freqs.keys() {
                    if let Some(list) = self.postings.get_mut(term) {
                        list.remove(doc_id);
                    }
                }
            }
            ExecutionPolicy::Parallel => {
                let mut detached: Vec<(String, PostingList)> = word_freqs.keys()
                    .filter_map(|term| self.postings.remove_entry(term))
                    .collect();
                detached.par_iter_mut().for_each(|(_, list)| {
                    list.remove(doc_id);
                });
                self.postings.extend(detached);
            }
        }

        for term in word_freqs.keys() {
            if self.postings.get(term).is_some_and(PostingList::is_empty) {
                self.postings.remove(term);
            }
        }
    }

    pub fn search_term(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Like `search_term`, but also hands back the index-owned key.
    pub fn term_entry(&self, term: &str) -> Option<(&str, &PostingList)> {
        self.postings.get_key_value(term).map(|(key, list)| (key.as_str(), list))
    }

    pub fn contains(&self, term: &str, doc_id: DocId) -> bool {
        self.postings.get(term).is_some_and(|list| list.contains(doc_id))
    }

    /// Get an iterator over all terms in the index
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}
