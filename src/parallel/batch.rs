use rayon::prelude::*;
use crate::core::error::Result;
use crate::core::search_server::SearchServer;
use crate::parallel::concurrent_map::ConcurrentMap;
use crate::search::results::Document;

/// Runs every query against `search_server` in parallel, one task per query.
/// `result[i]` always belongs to `queries[i]`; the first invalid query fails
/// the whole batch.
pub fn process_queries<S>(search_server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    let results = queries
        .par_iter()
        .map(|query| search_server.find_top_documents(query.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(queries = queries.len(), "batch processed");
    Ok(results)
}

/// Same fan-out as `process_queries`, flattened into one sequence. Each
/// query's hits keep their ranked order; how different queries' hits are
/// interleaved is unspecified.
pub fn process_queries_joined<S>(search_server: &SearchServer, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    let collected: ConcurrentMap<usize, Vec<Document>> =
        ConcurrentMap::new(search_server.config().shard_count);

    queries
        .par_iter()
        .enumerate()
        .try_for_each(|(slot, query)| -> Result<()> {
            let documents = search_server.find_top_documents(query.as_ref())?;
            *collected.access(slot) = documents;
            Ok(())
        })?;

    let documents: Vec<Document> = collected.into_map().into_values().flatten().collect();
    tracing::debug!(queries = queries.len(), documents = documents.len(), "joined batch processed");
    Ok(documents)
}
