use crate::core::types::{DocId, DocumentStatus};

/// Filter applied to every candidate while relevance is accumulated.
/// Shared across worker threads, hence `Sync`.
pub trait DocumentPredicate: Sync {
    fn matches(&self, doc_id: DocId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    fn matches(&self, doc_id: DocId, status: DocumentStatus, rating: i32) -> bool {
        self(doc_id, status, rating)
    }
}

/// A bare status matches documents carrying exactly that status.
impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _doc_id: DocId, status: DocumentStatus, _rating: i32) -> bool {
        *self == status
    }
}
