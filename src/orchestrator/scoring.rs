//! Tiered lexical relevance scoring for searchable records.
//!
//! Maps a (record, query) pair to a score in `[0.0, 1.0]`:
//!
//! - Title component: exact match 1.0, prefix 0.8, suffix 0.6, substring 0.4
//! - Body component (only while the running score is below 0.8): fraction of
//!   whitespace-delimited query tokens found in the body, weighted by 0.3
//! - Category bonus (only while the running score is below 0.9): +0.1 when
//!   the category contains the query
//!
//! When early termination is enabled and the title component already sits
//! below the low-score floor, scoring returns immediately without touching
//! body text or category. The skip is observable: a record whose title
//! misses the query entirely is dropped even when its body contains every
//! query token. Callers wanting body-only matches disable early termination
//! in [`PerformanceConfig`].

use crate::config::PerformanceConfig;
use crate::types::SearchableRecord;

/// Score for a title equal to the query.
const EXACT_SCORE: f64 = 1.0;
/// Score for a title starting with the query.
const PREFIX_SCORE: f64 = 0.8;
/// Score for a title ending with the query.
const SUFFIX_SCORE: f64 = 0.6;
/// Score for a title containing the query elsewhere.
const CONTAINS_SCORE: f64 = 0.4;
/// Weight of the body token-match ratio.
const BODY_WEIGHT: f64 = 0.3;
/// Bonus for a category containing the query.
const CATEGORY_BONUS: f64 = 0.1;
/// Body text is only consulted while the running score is below this.
const BODY_GATE: f64 = 0.8;
/// The category bonus only applies while the running score is below this.
const CATEGORY_GATE: f64 = 0.9;

/// Compute the relevance of `record` for `query`.
///
/// Matching is case-insensitive; `query` is expected to be non-blank (the
/// public entry points validate it). The result is always within
/// `[0.0, 1.0]` and deterministic for the same inputs.
pub fn relevance_score(record: &SearchableRecord, query: &str, perf: &PerformanceConfig) -> f64 {
    let query = query.to_lowercase();
    let title = record.primary_text.to_lowercase();

    let mut score = title_component(&title, &query);

    // A weak title disqualifies the record before the body tokenization
    // runs. Body and category are never examined on this path.
    if perf.enable_early_termination && score < perf.low_score_threshold {
        return score;
    }

    if score < BODY_GATE {
        let body = record.secondary_text.to_lowercase();
        score += BODY_WEIGHT * body_match_ratio(&body, &query);
    }

    if score < CATEGORY_GATE {
        if let Some(category) = &record.category {
            if category.to_lowercase().contains(query.as_str()) {
                score += CATEGORY_BONUS;
            }
        }
    }

    score.min(EXACT_SCORE)
}

/// Tiered title match: exact, prefix, suffix, substring, or no match.
fn title_component(title: &str, query: &str) -> f64 {
    if title == query {
        EXACT_SCORE
    } else if title.starts_with(query) {
        PREFIX_SCORE
    } else if title.ends_with(query) {
        SUFFIX_SCORE
    } else if title.contains(query) {
        CONTAINS_SCORE
    } else {
        0.0
    }
}

/// Fraction of whitespace-delimited query tokens occurring anywhere in
/// `body`. Containment is per token substring, not token-exact.
fn body_match_ratio(body: &str, query: &str) -> f64 {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let matching = tokens.iter().filter(|token| body.contains(**token)).count();
    matching as f64 / tokens.len() as f64
}
