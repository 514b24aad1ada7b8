//! Debounced, self-cancelling search sessions.
//!
//! The host fires a search per keystroke. A [`SearchSession`] absorbs that
//! churn: each submission cancels the in-flight search for the previous
//! query, waits out the configured debounce, loads a fresh corpus snapshot
//! from the record store, and runs the scan. Superseded submissions resolve
//! to [`SearchError::Cancelled`], which callers swallow rather than surface.

use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::orchestrator::paginate::{paginate, PaginatedResult};
use crate::orchestrator::search;
use crate::record::RecordStore;
use crate::types::{ScoredResult, SearchQuery};

/// A search session bound to one record store and one configuration.
///
/// The session owns the cancellation token of the in-flight query and
/// replaces it on every submission, cancelling the previous one. Sessions
/// are cheap; the host keeps one per search surface (task tree, notebook).
#[derive(Debug)]
pub struct SearchSession<S> {
    store: S,
    config: SearchConfig,
    /// Token of the in-flight query; replaced (and cancelled) per submission.
    current: Mutex<CancellationToken>,
}

impl<S: RecordStore> SearchSession<S> {
    /// Create a session. The configuration is validated once here; search
    /// calls reuse it without re-validating.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration.
    pub fn new(store: S, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            current: Mutex::new(CancellationToken::new()),
        })
    }

    /// Submit a query, superseding any in-flight one.
    ///
    /// Waits `config.debounce_ms`, loads the corpus, and scans it. If a
    /// newer submission arrives while this one is debouncing or scanning,
    /// this call resolves to [`SearchError::Cancelled`].
    ///
    /// # Errors
    ///
    /// [`SearchError::Query`] for blank text, [`SearchError::Cancelled`]
    /// when superseded, [`SearchError::Store`] when the record store fails.
    pub async fn search(&self, text: &str) -> Result<Vec<ScoredResult>> {
        let query = self.begin(text)?;
        self.run(&query).await
    }

    /// Like [`SearchSession::search`], returning one page of results.
    pub async fn search_page(
        &self,
        text: &str,
        page: usize,
    ) -> Result<PaginatedResult<ScoredResult>> {
        let results = self.search(text).await?;
        Ok(paginate(results, page, self.config.page_size))
    }

    /// Cancel the in-flight query without submitting a new one.
    pub fn cancel_pending(&self) {
        self.lock_current().cancel();
    }

    /// Validate the text, supersede the previous query, and build the new one.
    fn begin(&self, text: &str) -> Result<SearchQuery> {
        if text.trim().is_empty() {
            return Err(SearchError::Query("query text must not be blank".into()));
        }
        let token = CancellationToken::new();
        {
            let mut current = self.lock_current();
            current.cancel();
            *current = token.clone();
        }
        Ok(SearchQuery::new(text).with_cancel(token))
    }

    async fn run(&self, query: &SearchQuery) -> Result<Vec<ScoredResult>> {
        tokio::select! {
            () = query.cancel.cancelled() => {
                tracing::debug!("query superseded during debounce");
                return Err(SearchError::Cancelled);
            }
            () = tokio::time::sleep(Duration::from_millis(self.config.debounce_ms)) => {}
        }

        let records = self.store.load().await?;
        if query.cancel.is_cancelled() {
            tracing::debug!("query superseded during corpus load");
            return Err(SearchError::Cancelled);
        }

        search::execute(&records, query, &self.config)
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, CancellationToken> {
        // A poisoned lock only means another submission panicked mid-swap;
        // the token itself is still usable.
        match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
