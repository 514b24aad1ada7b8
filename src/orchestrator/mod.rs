//! Search orchestration: scan, score, rank, paginate.
//!
//! This module scans the candidate corpus in store order, scores each record
//! against the query, filters by threshold, sorts by descending relevance,
//! and slices the ranked list into pages for the host UI.

pub mod paginate;
pub mod scoring;
pub mod search;
