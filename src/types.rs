//! Core types for record search: searchable views, queries, scored results.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// A record-agnostic searchable view of an indexed entity.
///
/// Task-tree entries and memory notes are both reduced to this shape before
/// scoring. The view is a read-only snapshot taken at search time; the
/// scorer never mutates it and nothing is retained between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchableRecord {
    /// Opaque identifier of the underlying record.
    pub id: String,
    /// Short name or title. Dominant in scoring.
    pub primary_text: String,
    /// Long-form body text (task details, note content).
    pub secondary_text: String,
    /// Optional short category label (project name, notebook category).
    pub category: Option<String>,
}

/// A search request against the full record corpus.
///
/// Per-query overrides fall back to the [`SearchConfig`] values when `None`.
/// The embedded token makes cancellation cooperative: the scan polls it at
/// every iteration boundary and aborts with no partial results.
///
/// [`SearchConfig`]: crate::config::SearchConfig
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Raw user input. Case-folded before matching. The public entry points
    /// reject blank text.
    pub text: String,
    /// Minimum score for a record to be included.
    pub threshold: Option<f64>,
    /// Hard cap on returned results.
    pub limit: Option<usize>,
    /// 1-based page requested from the paged entry points.
    pub page: Option<usize>,
    /// Page size for the paged entry points.
    pub page_size: Option<usize>,
    /// Cooperative cancellation token for this query.
    pub cancel: CancellationToken,
}

impl SearchQuery {
    /// Build a query with no per-query overrides and a fresh token that is
    /// never cancelled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            threshold: None,
            limit: None,
            page: None,
            page_size: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Attach an externally owned cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// A record together with its relevance score.
///
/// Scores range over `[0.0, 1.0]`, higher is more relevant. Accumulated
/// result sets are unordered; the orchestrator establishes descending-score
/// order (ties keep scan order) before returning them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    /// The matched record snapshot.
    pub record: SearchableRecord,
    /// Relevance of the record for the query.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_construction() {
        let record = SearchableRecord {
            id: "task-1".into(),
            primary_text: "Design mockups".into(),
            secondary_text: "create wireframes for homepage".into(),
            category: Some("design".into()),
        };
        assert_eq!(record.id, "task-1");
        assert_eq!(record.category.as_deref(), Some("design"));
    }

    #[test]
    fn record_serde_round_trip() {
        let record = SearchableRecord {
            id: "note-7".into(),
            primary_text: "Standup notes".into(),
            secondary_text: "discussed release timeline".into(),
            category: None,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let decoded: SearchableRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.id, "note-7");
        assert!(decoded.category.is_none());
    }

    #[test]
    fn new_query_has_no_overrides() {
        let query = SearchQuery::new("release");
        assert_eq!(query.text, "release");
        assert!(query.threshold.is_none());
        assert!(query.limit.is_none());
        assert!(query.page.is_none());
        assert!(query.page_size.is_none());
        assert!(!query.cancel.is_cancelled());
    }

    #[test]
    fn with_cancel_wires_external_token() {
        let token = CancellationToken::new();
        let query = SearchQuery::new("release").with_cancel(token.clone());
        token.cancel();
        assert!(query.cancel.is_cancelled());
    }

    #[test]
    fn scored_result_holds_record_and_score() {
        let result = ScoredResult {
            record: SearchableRecord {
                id: "task-2".into(),
                primary_text: "Setup CI".into(),
                secondary_text: String::new(),
                category: None,
            },
            score: 0.4,
        };
        assert!((result.score - 0.4).abs() < f64::EPSILON);
        assert_eq!(result.record.primary_text, "Setup CI");
    }
}
