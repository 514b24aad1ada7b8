//! # taskwell-search
//!
//! Embedded relevance search for Taskwell task trees and memory notes.
//!
//! The host application keeps projects, tasks, and notebook notes as JSON
//! records; this crate ranks them against free-text queries. It compiles
//! into the host as a plain library dependency, with no index files and no
//! background services.
//!
//! ## Design
//!
//! - Tiered lexical scoring over title, body, and category; deterministic
//!   for a given corpus snapshot and query
//! - Single cooperative scan per query: early termination for weak titles,
//!   scan-order-stable ranking, hard result caps
//! - Cooperative cancellation so a new keystroke voids the in-flight search
//! - Pagination with navigation metadata for incremental rendering
//! - Debounced sessions that absorb keystroke churn
//!
//! Scoring reruns from scratch on every query: the corpus is whatever the
//! record store hands over, and nothing is cached between calls.
//!
//! ## Security
//!
//! - Record text and query text never appear in error messages
//! - Query text is logged at trace level only

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod record;
pub mod session;
pub mod types;

pub use config::{PerformanceConfig, SearchConfig};
pub use error::{Result, SearchError};
pub use orchestrator::paginate::{paginate, PageInfo, PaginatedResult};
pub use record::RecordStore;
pub use session::SearchSession;
pub use types::{ScoredResult, SearchQuery, SearchableRecord};

/// Search `records` for `query`, returning ranked results.
///
/// Validates the configuration, rejects blank query text, then scans the
/// records in store order. Results carry scores in `[0.0, 1.0]`, are sorted
/// by descending score (ties keep store order), and are capped at the
/// effective limit.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration,
/// [`SearchError::Query`] for blank query text, and
/// [`SearchError::Cancelled`] if the query's token is cancelled before or
/// during the scan. Callers treat the last as "attempt void", not a
/// failure.
///
/// # Examples
///
/// ```
/// use taskwell_search::{SearchConfig, SearchQuery, SearchableRecord};
///
/// let records = vec![SearchableRecord {
///     id: "task-1".into(),
///     primary_text: "Design mockups".into(),
///     secondary_text: "create wireframes for homepage".into(),
///     category: Some("design".into()),
/// }];
/// let results = taskwell_search::search(
///     &records,
///     &SearchQuery::new("design"),
///     &SearchConfig::default(),
/// )?;
/// assert_eq!(results.len(), 1);
/// assert!((results[0].score - 0.9).abs() < f64::EPSILON);
/// # Ok::<(), taskwell_search::SearchError>(())
/// ```
pub fn search(
    records: &[SearchableRecord],
    query: &SearchQuery,
    config: &SearchConfig,
) -> Result<Vec<ScoredResult>> {
    config.validate()?;
    validate_query_text(&query.text)?;
    orchestrator::search::execute(records, query, config)
}

/// Search `records` for `query` and return one page of ranked results.
///
/// Runs [`search`], then slices the ranked list using `query.page`
/// (default 1) and `query.page_size` (default `config.page_size`).
///
/// # Errors
///
/// Same as [`search`].
pub fn search_page(
    records: &[SearchableRecord],
    query: &SearchQuery,
    config: &SearchConfig,
) -> Result<PaginatedResult<ScoredResult>> {
    let results = search(records, query, config)?;
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(config.page_size);
    Ok(paginate(results, page, page_size))
}

fn validate_query_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(SearchError::Query("query text must not be blank".into()));
    }
    Ok(())
}
