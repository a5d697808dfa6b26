use rustc_hash::FxHashSet;

use crate::model::CommitId;

/// Ordered list of open branch lines, each waiting for its next commit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnList {
    columns: Vec<CommitId>,
}

impl ColumnList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn as_slice(&self) -> &[CommitId] {
        &self.columns
    }

    pub fn position(&self, id: CommitId) -> Option<usize> {
        self.columns.iter().position(|c| *c == id)
    }

    /// Insert at `index`, shifting later columns right. Appends when
    /// `index` is past the end.
    pub fn insert_at(&mut self, index: usize, id: CommitId) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, id);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<CommitId> {
        (index < self.columns.len()).then(|| self.columns.remove(index))
    }

    pub fn replace_at(&mut self, index: usize, id: CommitId) {
        if let Some(slot) = self.columns.get_mut(index) {
            *slot = id;
        }
    }

    /// Drop repeated ids, keeping the first occurrence of each
    pub fn dedup(&mut self) {
        let mut seen = FxHashSet::default();
        self.columns.retain(|id| seen.insert(*id));
    }
}

impl FromIterator<CommitId> for ColumnList {
    fn from_iter<I: IntoIterator<Item = CommitId>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
