//! Priority-ordered traversal of the commit DAG
//!
//! Commits are visited most recent first across all tips. This is not a
//! topological sort: with skewed clocks a child may be emitted after a
//! parent that claims a later time.

use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

use crate::model::{CommitId, CommitNode};
use crate::repository::{GraphError, HistorySource, Result};

/// Total visiting order: newer commits first, then greater hash first.
/// `Ordering::Less` means `a` is visited before `b`.
pub fn visit_order(a: &CommitNode, b: &CommitNode) -> Ordering {
    b.time
        .seconds
        .cmp(&a.time.seconds)
        .then_with(|| b.id.cmp(&a.id))
}

/// Heap entry; the greatest entry is the next one to visit
struct FrontierEntry(CommitNode);

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        visit_order(&other.0, &self.0)
    }
}

/// Discovered but not yet visited commits
#[derive(Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<FrontierEntry>,
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, commit: CommitNode) {
        self.heap.push(FrontierEntry(commit));
    }

    /// Remove the next commit in visiting order
    pub fn pop(&mut self) -> Option<CommitNode> {
        self.heap.pop().map(|entry| entry.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Lazy walk over the history reachable from a set of tips
pub struct Traversal<S> {
    source: S,
    seen: FxHashSet<CommitId>,
    frontier: FrontierQueue,
    /// Maximum commits to emit, 0 = unbounded
    limit: usize,
    emitted: usize,
}

impl<S: HistorySource> Traversal<S> {
    /// Seed the frontier from `tips`, falling back to HEAD when empty.
    ///
    /// Tips that fail to resolve are skipped.
    pub fn new(source: S, tips: &[CommitId], limit: usize) -> Result<Self> {
        let mut tips = tips.to_vec();
        if tips.is_empty() {
            tips.extend(source.head());
        }
        if tips.is_empty() {
            return Err(GraphError::NoTipsFound);
        }

        let mut traversal = Self {
            source,
            seen: FxHashSet::default(),
            frontier: FrontierQueue::new(),
            limit,
            emitted: 0,
        };
        for tip in tips {
            traversal.discover(tip);
        }
        debug!(frontier = traversal.frontier.len(), limit, "traversal seeded");
        Ok(traversal)
    }

    /// True while the frontier is non-empty and the limit is not reached
    pub fn has_more(&self) -> bool {
        if self.limit > 0 && self.emitted >= self.limit {
            return false;
        }
        !self.frontier.is_empty()
    }

    /// Visit the next commit, enqueueing its unseen parents
    pub fn advance(&mut self) -> Result<CommitNode> {
        if !self.has_more() {
            return Err(GraphError::FrontierExhausted);
        }
        let commit = self.frontier.pop().ok_or(GraphError::FrontierExhausted)?;
        self.emitted += 1;

        // Parents past the limit would never be visited
        if self.limit > 0 && self.emitted >= self.limit {
            return Ok(commit);
        }
        for parent in &commit.parents {
            self.discover(*parent);
        }
        Ok(commit)
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn discover(&mut self, id: CommitId) {
        if self.seen.contains(&id) {
            return;
        }
        match self.source.lookup(id) {
            Ok(commit) => {
                self.seen.insert(id);
                self.frontier.push(commit);
            }
            Err(e) => debug!(%id, error = %e, "skipping unreadable commit"),
        }
    }
}
