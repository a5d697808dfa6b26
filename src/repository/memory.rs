//! In-memory history source for tests and benchmarks

use rustc_hash::FxHashMap;
use std::cell::Cell;

use crate::model::{CommitId, CommitNode, CommitTime, HASH_LEN};

use super::error::{GraphError, Result};
use super::source::HistorySource;

/// Build a deterministic id whose trailing bytes hold `n` (big-endian),
/// so ids compare in the same order as their numbers.
pub fn numbered_id(n: u64) -> CommitId {
    let mut bytes = [0u8; HASH_LEN];
    bytes[HASH_LEN - 8..].copy_from_slice(&n.to_be_bytes());
    CommitId::from_bytes(bytes)
}

/// A history held in a map, counting lookups
#[derive(Default)]
pub struct MemoryHistory {
    commits: FxHashMap<CommitId, CommitNode>,
    paths: FxHashMap<CommitId, Vec<String>>,
    head: Option<CommitId>,
    lookups: Cell<usize>,
    diffs: Cell<usize>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit with a message equal to its subject
    pub fn add(
        &mut self,
        id: CommitId,
        parents: &[CommitId],
        author: &str,
        subject: &str,
        seconds: i64,
    ) -> &mut Self {
        self.commits.insert(
            id,
            CommitNode {
                id,
                parents: parents.to_vec(),
                author: author.to_string(),
                subject: subject.to_string(),
                message: subject.to_string(),
                time: CommitTime::new(seconds, 0),
            },
        );
        self
    }

    pub fn set_paths(&mut self, id: CommitId, paths: &[&str]) -> &mut Self {
        self.paths
            .insert(id, paths.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn set_head(&mut self, id: CommitId) -> &mut Self {
        self.head = Some(id);
        self
    }

    /// Remove a commit so later lookups of it fail
    pub fn remove(&mut self, id: CommitId) -> &mut Self {
        self.commits.remove(&id);
        self
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Number of `lookup` calls so far, successful or not
    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }

    /// Number of `changed_paths` calls so far
    pub fn diff_count(&self) -> usize {
        self.diffs.get()
    }
}

impl HistorySource for MemoryHistory {
    fn lookup(&self, id: CommitId) -> Result<CommitNode> {
        self.lookups.set(self.lookups.get() + 1);
        self.commits
            .get(&id)
            .cloned()
            .ok_or_else(|| GraphError::LookupFailed {
                id,
                reason: "object not found".to_string(),
            })
    }

    fn changed_paths(&self, id: CommitId) -> Result<Vec<String>> {
        self.diffs.set(self.diffs.get() + 1);
        let commit = self.commits.get(&id).ok_or_else(|| GraphError::DiffUnavailable {
            id,
            reason: "object not found".to_string(),
        })?;
        if commit.is_root() {
            return Ok(Vec::new());
        }
        Ok(self.paths.get(&id).cloned().unwrap_or_default())
    }

    fn head(&self) -> Option<CommitId> {
        self.head
    }
}
