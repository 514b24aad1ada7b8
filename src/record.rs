//! Record sources and searchable views of the host's record kinds.
//!
//! The engine is corpus-agnostic: anything reduced to a [`SearchableRecord`]
//! can be scored. The host owns two record kinds (task-tree entries and
//! memory-notebook notes), and a [`RecordStore`] hands the engine the full
//! candidate set for the current corpus on every call. Nothing is cached or
//! paged lazily here; the corpus is rescanned per query.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::SearchableRecord;

/// A source of searchable records.
///
/// Implementors load the complete candidate set for the current corpus
/// ("all tasks", "all notes") with parent project and category names already
/// resolved. Store consistency under concurrent writes is the implementor's
/// concern; the engine only reads the returned snapshot.
///
/// All implementations must be `Send + Sync` so sessions can share them.
pub trait RecordStore: Send + Sync {
    /// Load the full candidate set for the current corpus.
    ///
    /// # Errors
    ///
    /// Implementations surface load failures as [`SearchError::Store`];
    /// the engine propagates them unchanged.
    fn load(&self) -> impl Future<Output = Result<Vec<SearchableRecord>, SearchError>> + Send;
}

/// Searchable view of a task-tree entry.
///
/// Carries only the fields relevant to search; the resolved parent project
/// name doubles as the category label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: String,
    /// Short task title.
    pub title: String,
    /// Long-form task details.
    #[serde(default)]
    pub details: String,
    /// Resolved name of the owning project, if any.
    #[serde(default)]
    pub project: Option<String>,
}

/// Searchable view of a memory-notebook note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryNote {
    /// Note identifier.
    pub id: String,
    /// Note title.
    pub title: String,
    /// Note body.
    #[serde(default)]
    pub content: String,
    /// Notebook category, if any.
    #[serde(default)]
    pub category: Option<String>,
}

impl From<Task> for SearchableRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            primary_text: task.title,
            secondary_text: task.details,
            category: task.project,
        }
    }
}

impl From<MemoryNote> for SearchableRecord {
    fn from(note: MemoryNote) -> Self {
        Self {
            id: note.id,
            primary_text: note.title,
            secondary_text: note.content,
            category: note.category,
        }
    }
}
