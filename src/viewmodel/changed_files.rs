use rustc_hash::FxHashMap;
use tracing::warn;

use crate::model::CommitId;
use crate::repository::HistorySource;

/// Shown when a commit changes nothing relative to its first parent
pub const NO_CHANGES: &str = "(no file changes)";

/// Shown when the diff could not be computed
pub const UNAVAILABLE: &str = "(unable to load files)";

/// Per-session memo of changed paths by commit.
///
/// Entries are never evicted; the map lives as long as the viewer.
#[derive(Debug, Default)]
pub struct ChangedFilesCache {
    files: FxHashMap<CommitId, Vec<String>>,
}

impl ChangedFilesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changed paths for `id`, computing them on first request
    pub fn get_or_load<S: HistorySource>(&mut self, source: &S, id: CommitId) -> &[String] {
        self.files.entry(id).or_insert_with(|| match source.changed_paths(id) {
            Ok(paths) if paths.is_empty() => vec![NO_CHANGES.to_string()],
            Ok(paths) => paths,
            Err(e) => {
                warn!(%id, error = %e, "changed files unavailable");
                vec![UNAVAILABLE.to_string()]
            }
        })
    }

    pub fn get(&self, id: CommitId) -> Option<&[String]> {
        self.files.get(&id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{numbered_id, MemoryHistory};

    fn history() -> MemoryHistory {
        let mut history = MemoryHistory::new();
        history
            .add(numbered_id(1), &[], "a", "root", 10)
            .add(numbered_id(2), &[numbered_id(1)], "a", "change", 20)
            .add(numbered_id(3), &[numbered_id(2)], "a", "empty", 30)
            .set_paths(numbered_id(2), &["src/lib.rs", "README.md"]);
        history
    }

    #[test]
    fn test_loads_once_per_commit() {
        let history = history();
        let mut cache = ChangedFilesCache::new();

        assert_eq!(
            cache.get_or_load(&history, numbered_id(2)),
            &["src/lib.rs".to_string(), "README.md".to_string()]
        );
        cache.get_or_load(&history, numbered_id(2));
        assert_eq!(history.diff_count(), 1);
    }

    #[test]
    fn test_placeholders() {
        let history = history();
        let mut cache = ChangedFilesCache::new();

        assert_eq!(cache.get_or_load(&history, numbered_id(1)), &[NO_CHANGES.to_string()]);
        assert_eq!(cache.get_or_load(&history, numbered_id(3)), &[NO_CHANGES.to_string()]);
        assert_eq!(cache.get_or_load(&history, numbered_id(9)), &[UNAVAILABLE.to_string()]);
        assert_eq!(cache.len(), 3);
    }
}
