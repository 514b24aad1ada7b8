//! Core search scan: filter, rank, cap.
//!
//! Scans the full candidate set in store order, scoring each record and
//! accumulating those at or above the query threshold. The scan polls the
//! query's cancellation token at every iteration boundary and stops early
//! once the result cap is reached. A cancelled scan discards everything;
//! there are no partial results.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::types::{ScoredResult, SearchQuery, SearchableRecord};

use super::scoring::relevance_score;

/// Run a search over `records`.
///
/// # Pipeline
///
/// 1. Fail with [`SearchError::Cancelled`] if the token is already cancelled
/// 2. Scan records in store order, re-checking the token each iteration
/// 3. Skip records scoring below the early-termination floor; keep records
///    at or above the effective threshold (`query.threshold`, else
///    `config.threshold`)
/// 4. Stop scanning once the effective cap (`query.limit`, else
///    `config.max_results`) is reached
/// 5. Stable-sort by score descending (ties keep scan order)
/// 6. Re-truncate to the cap and return
///
/// Because the scan stops at the cap before sorting, the returned set is not
/// guaranteed to be the globally best-scoring subset of an over-cap corpus;
/// responsiveness wins over completeness there.
///
/// Assumes `query.text` is non-blank; the crate-root entry points validate
/// it before delegating here.
///
/// # Errors
///
/// Returns [`SearchError::Cancelled`] if the token is cancelled before or
/// during the scan. Callers treat that as "attempt void", not a failure.
pub fn execute(
    records: &[SearchableRecord],
    query: &SearchQuery,
    config: &SearchConfig,
) -> Result<Vec<ScoredResult>> {
    if query.cancel.is_cancelled() {
        tracing::debug!("search cancelled before scan");
        return Err(SearchError::Cancelled);
    }

    let threshold = query.threshold.unwrap_or(config.threshold);
    let cap = query.limit.unwrap_or(config.max_results);
    let perf = &config.performance;

    tracing::trace!(query = %query.text, "starting scan");
    tracing::debug!(candidates = records.len(), threshold, cap, "scanning records");

    let mut results: Vec<ScoredResult> = Vec::new();
    for (scanned, record) in records.iter().enumerate() {
        if query.cancel.is_cancelled() {
            tracing::debug!(scanned, "search cancelled mid-scan");
            return Err(SearchError::Cancelled);
        }

        let score = relevance_score(record, &query.text, perf);

        // Early-terminated records are skipped, never an error.
        if perf.enable_early_termination && score < perf.low_score_threshold {
            continue;
        }
        if score >= threshold {
            results.push(ScoredResult {
                record: record.clone(),
                score,
            });
        }
        if results.len() >= cap {
            tracing::debug!(scanned, "result cap reached, stopping scan");
            break;
        }
    }

    // Vec::sort_by is stable: equal scores keep their scan order.
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(cap);

    tracing::debug!(matched = results.len(), "scan complete");
    Ok(results)
}
