use std::collections::BTreeSet;
use crate::core::search_server::SearchServer;
use crate::core::types::DocId;

/// Ids of documents whose term set equals that of a lower id. The lowest id
/// of every group of equal documents is kept. Term frequencies are ignored.
///
/// Quadratic in the number of documents; meant for offline maintenance.
pub fn find_duplicates(search_server: &SearchServer) -> BTreeSet<DocId> {
    let ids: Vec<DocId> = search_server.iter().collect();
    let mut duplicates = BTreeSet::new();

    for (i, &doc_id) in ids.iter().enumerate() {
        if duplicates.contains(&doc_id) {
            continue;
        }
        let Some(document) = search_server.document(doc_id) else {
            continue;
        };

        for &other_id in &ids[i + 1..] {
            if duplicates.contains(&other_id) {
                continue;
            }
            if search_server.document(other_id).is_some_and(|other| document.has_same_terms(other)) {
                duplicates.insert(other_id);
            }
        }
    }

    duplicates
}

/// Removes every duplicate found by `find_duplicates` and returns the removed
/// ids in ascending order.
pub fn remove_duplicates(search_server: &mut SearchServer) -> Vec<DocId> {
    let duplicates = find_duplicates(search_server);

    for &doc_id in &duplicates {
        tracing::info!(doc_id = doc_id.0, "found duplicate document id {}", doc_id);
        search_server.remove_document(doc_id);
    }

    duplicates.into_iter().collect()
}
