//! History source abstraction
//!
//! Decouples graph traversal from object storage (git2, in-memory fixtures).

use crate::model::{CommitId, CommitNode};

use super::error::Result;

/// Read access to commit objects.
///
/// Lookups are synchronous and assumed cheap relative to a keystroke.
/// A failed lookup is permanent for that hash.
pub trait HistorySource {
    /// Read a commit's parents, author, subject and time
    fn lookup(&self, id: CommitId) -> Result<CommitNode>;

    /// Paths changed by a commit relative to its first parent
    fn changed_paths(&self, id: CommitId) -> Result<Vec<String>>;

    /// Current HEAD, used when no other tips are available
    fn head(&self) -> Option<CommitId>;
}

impl<S: HistorySource + ?Sized> HistorySource for &S {
    fn lookup(&self, id: CommitId) -> Result<CommitNode> {
        (**self).lookup(id)
    }

    fn changed_paths(&self, id: CommitId) -> Result<Vec<String>> {
        (**self).changed_paths(id)
    }

    fn head(&self) -> Option<CommitId> {
        (**self).head()
    }
}
