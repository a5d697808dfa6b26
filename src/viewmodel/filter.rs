use crate::model::CommitEntry;

/// Incremental subject/author filter over the materialized commits.
///
/// Entries below `scanned` have already been tested and are never
/// rescanned; `matches` holds ascending indices below `scanned`.
#[derive(Debug, Default)]
pub struct CommitFilter {
    query: String,
    query_lower: String,
    matches: Vec<usize>,
    scanned: usize,
}

impl CommitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query (trimmed) and forget all previous results.
    /// An empty query deactivates the filter.
    pub fn apply(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.query_lower = self.query.to_lowercase();
        self.matches.clear();
        self.scanned = 0;
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Test entries from the scan cursor to the end of `entries`
    pub fn scan(&mut self, entries: &[CommitEntry]) {
        if !self.is_active() {
            return;
        }
        for (index, entry) in entries.iter().enumerate().skip(self.scanned) {
            if self.is_match(entry) {
                self.matches.push(index);
            }
        }
        self.scanned = self.scanned.max(entries.len());
    }

    fn is_match(&self, entry: &CommitEntry) -> bool {
        entry.subject().to_lowercase().contains(&self.query_lower)
            || entry.author().to_lowercase().contains(&self.query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommitNode, CommitTime};
    use crate::repository::numbered_id;

    fn entry(n: u64, subject: &str, author: &str) -> CommitEntry {
        CommitEntry::new(
            CommitNode {
                id: numbered_id(n),
                parents: Vec::new(),
                author: author.to_string(),
                subject: subject.to_string(),
                message: subject.to_string(),
                time: CommitTime::default(),
            },
            Vec::new(),
        )
    }

    fn entries() -> Vec<CommitEntry> {
        vec![
            entry(1, "Fix crash on start", "alice"),
            entry(2, "Add feature", "bob"),
            entry(3, "Refactor", "Felix"),
            entry(4, "prefix handling", "carol"),
        ]
    }

    #[test]
    fn test_matches_subject_and_author_case_insensitive() {
        let mut filter = CommitFilter::new();
        filter.apply("FIX");
        filter.scan(&entries());
        assert_eq!(filter.matches(), &[0, 3]);

        filter.apply("felix");
        filter.scan(&entries());
        assert_eq!(filter.matches(), &[2]);
    }

    #[test]
    fn test_scan_is_incremental() {
        let all = entries();
        let mut filter = CommitFilter::new();
        filter.apply("fix");

        filter.scan(&all[..2]);
        assert_eq!(filter.scanned(), 2);
        assert_eq!(filter.matches(), &[0]);

        filter.scan(&all);
        assert_eq!(filter.scanned(), 4);
        assert_eq!(filter.matches(), &[0, 3]);

        // nothing new to scan
        filter.scan(&all);
        assert_eq!(filter.matches(), &[0, 3]);
    }

    #[test]
    fn test_empty_query_clears_state() {
        let mut filter = CommitFilter::new();
        filter.apply("fix");
        filter.scan(&entries());

        filter.apply("   ");
        assert!(!filter.is_active());
        assert!(filter.matches().is_empty());
        assert_eq!(filter.scanned(), 0);

        filter.scan(&entries());
        assert_eq!(filter.scanned(), 0);
    }
}
