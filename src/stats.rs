use std::collections::HashSet;
use std::time::Duration;

use crate::error::EmptyBatchError;

/// Size reported when the server omits the Content-Length header.
pub const SIZE_UNKNOWN: i64 = -1;

/// Outcome of one completed fetch. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStatistic {
    /// 1-based position in the input url list.
    pub index: usize,
    pub url: String,
    /// Wall-clock time of the network call only, headers received.
    pub elapsed_ms: u64,
    /// Declared content length, or [`SIZE_UNKNOWN`].
    pub size_bytes: i64,
    /// Thread the call ran on. Observability only.
    pub context_id: String,
    /// Runtime worker-pool size at the moment of measurement.
    pub pool_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_wall_ms: u64,
    pub max_latency_ms: u64,
    pub distinct_contexts: usize,
    pub record_count: usize,
}

/// Folds a completed batch into its summary. The batch wall clock is
/// measured by the caller around the whole dispatch, since the sum of
/// per-record times says nothing about a concurrent batch.
pub fn summarize<'a, I>(records: I, total_wall: Duration) -> Result<BatchSummary, EmptyBatchError>
where
    I: IntoIterator<Item = &'a UrlStatistic>,
{
    let mut max_latency_ms: Option<u64> = None;
    let mut contexts = HashSet::new();
    let mut record_count = 0;
    for record in records {
        max_latency_ms = Some(max_latency_ms.map_or(record.elapsed_ms, |max| max.max(record.elapsed_ms)));
        contexts.insert(record.context_id.as_str());
        record_count += 1;
    }
    let max_latency_ms = max_latency_ms.ok_or(EmptyBatchError)?;
    Ok(BatchSummary {
        total_wall_ms: total_wall.as_millis() as u64,
        max_latency_ms,
        distinct_contexts: contexts.len(),
        record_count,
    })
}
