//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] mirrors the search settings the host application exposes
//! to users. It deserializes from the host's camelCase settings JSON with
//! per-field defaults, is validated once at load time, and is passed
//! explicitly into every search call; the scorer performs no ambient
//! configuration lookups.

use serde::Deserialize;

use crate::error::SearchError;

/// Configuration for record search operations.
///
/// Use [`Default::default()`] for the stock behaviour, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Minimum relevance score for a record to appear in results.
    pub threshold: f64,
    /// Hard cap on the number of returned results.
    pub max_results: usize,
    /// Default page size when paginating results.
    pub page_size: usize,
    /// Keystroke debounce in milliseconds, applied by [`SearchSession`]
    /// before a submitted query runs. The scan itself imposes no delay.
    ///
    /// [`SearchSession`]: crate::session::SearchSession
    pub debounce_ms: u64,
    /// Performance tuning for the scorer.
    pub performance: PerformanceConfig,
}

/// Scorer performance tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceConfig {
    /// Whether the scorer may return before examining body text and category
    /// once the running score is already below `low_score_threshold`.
    pub enable_early_termination: bool,
    /// Running-score floor below which early termination kicks in. Records
    /// scoring below it are also skipped by the scan.
    pub low_score_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            max_results: 200,
            page_size: 20,
            debounce_ms: 300,
            performance: PerformanceConfig::default(),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            enable_early_termination: true,
            low_score_threshold: 0.1,
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from the host's settings JSON fragment.
    ///
    /// Missing fields take their defaults, so `"{}"` yields
    /// [`SearchConfig::default()`]. Unknown fields are ignored. The parsed
    /// configuration is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the JSON is malformed or a field
    /// fails validation.
    pub fn from_json_str(raw: &str) -> Result<Self, SearchError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| SearchError::Config(format!("invalid settings JSON: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `threshold` must be within `0.0..=1.0`
    /// - `max_results` must be greater than 0
    /// - `page_size` must be greater than 0
    /// - `performance.low_score_threshold` must be within `0.0..=1.0`
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::Config(
                "threshold must be within 0.0..=1.0".into(),
            ));
        }
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "maxResults must be greater than 0".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::Config(
                "pageSize must be greater than 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.performance.low_score_threshold) {
            return Err(SearchError::Config(
                "lowScoreThreshold must be within 0.0..=1.0".into(),
            ));
        }
        Ok(())
    }
}
