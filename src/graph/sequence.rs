use tracing::debug;

use crate::model::{CommitEntry, CommitId};
use crate::repository::{HistorySource, Result};

use super::frontier::Traversal;
use super::layout::ColumnLayout;

/// Traversal options chosen on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GraphOptions {
    /// Include remote-tracking branches as tips
    pub include_all: bool,
    /// Maximum commits to materialize, 0 = unbounded
    pub limit: usize,
}

/// Append-only, laid-out prefix of the history.
///
/// Grows only through [`CommitGraph::ensure`]. A single call may perform any
/// number of history lookups if the requested index is far ahead; there is
/// no cap and no cancellation.
pub struct CommitGraph<S> {
    traversal: Traversal<S>,
    layout: ColumnLayout,
    entries: Vec<CommitEntry>,
}

impl<S: HistorySource> CommitGraph<S> {
    pub fn new(source: S, tips: &[CommitId], limit: usize) -> Result<Self> {
        Ok(Self {
            traversal: Traversal::new(source, tips, limit)?,
            layout: ColumnLayout::new(),
            entries: Vec::new(),
        })
    }

    /// Materialize commits until index `index` exists or history runs out.
    /// Already-satisfied indices do no work.
    pub fn ensure(&mut self, index: usize) -> Result<()> {
        let before = self.entries.len();
        while self.entries.len() <= index && self.traversal.has_more() {
            let commit = self.traversal.advance()?;
            let row = self.layout.render(&commit);
            self.entries.push(CommitEntry::new(commit, row));
        }
        if self.entries.len() > before {
            debug!(
                loaded = self.entries.len(),
                frontier = self.traversal.frontier_len(),
                "materialized commits"
            );
        }
        Ok(())
    }

    pub fn has_more(&self) -> bool {
        self.traversal.has_more()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CommitEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CommitEntry] {
        &self.entries
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn source(&self) -> &S {
        self.traversal.source()
    }
}
