use tracing::warn;

use crate::graph::CommitGraph;
use crate::model::CommitEntry;
use crate::repository::HistorySource;

use super::changed_files::ChangedFilesCache;
use super::filter::CommitFilter;
use super::selection::Viewport;

/// Extra rows loaded past the bottom of the window so scrolling does not
/// stall on every keystroke
pub const LOOKAHEAD: usize = 5;

/// Drives history loading from what the user is looking at.
///
/// All loading happens synchronously inside the call that needs it; a large
/// jump or a rare filter query can walk a lot of history in one call.
pub struct LogViewModel<S> {
    graph: CommitGraph<S>,
    filter: CommitFilter,
    viewport: Viewport,
    files: ChangedFilesCache,
}

impl<S: HistorySource> LogViewModel<S> {
    pub fn new(graph: CommitGraph<S>) -> Self {
        let mut vm = Self {
            graph,
            filter: CommitFilter::new(),
            viewport: Viewport::default(),
            files: ChangedFilesCache::new(),
        };
        vm.load(0);
        vm
    }

    pub fn graph(&self) -> &CommitGraph<S> {
        &self.graph
    }

    pub fn filter(&self) -> &CommitFilter {
        &self.filter
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Length of the list being shown: matches when filtering, else all
    /// loaded commits
    pub fn list_len(&self) -> usize {
        if self.filter.is_active() {
            self.filter.matches().len()
        } else {
            self.graph.len()
        }
    }

    pub fn loaded(&self) -> usize {
        self.graph.len()
    }

    pub fn has_more(&self) -> bool {
        self.graph.has_more()
    }

    /// Entry at a position of the shown list
    pub fn entry_at(&self, list_index: usize) -> Option<&CommitEntry> {
        let index = if self.filter.is_active() {
            *self.filter.matches().get(list_index)?
        } else {
            list_index
        };
        self.graph.get(index)
    }

    pub fn selected_entry(&self) -> Option<&CommitEntry> {
        self.entry_at(self.viewport.cursor())
    }

    /// Rows inside the window, with their list positions
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &CommitEntry)> + '_ {
        self.viewport
            .visible_range(self.list_len())
            .filter_map(|i| self.entry_at(i).map(|entry| (i, entry)))
    }

    pub fn resize(&mut self, height: usize) {
        self.viewport.set_height(height);
        self.refresh();
    }

    /// Load whatever the window now needs, then clamp cursor and offset
    pub fn refresh(&mut self) {
        self.ensure_visible();
        self.viewport.normalize(self.list_len());
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.viewport.move_by(delta, self.list_len());
        self.refresh();
    }

    pub fn page(&mut self, pages: isize) {
        let height = self.viewport.height() as isize;
        self.move_cursor(pages.saturating_mul(height));
    }

    pub fn move_to_top(&mut self) {
        self.viewport.reset();
        self.refresh();
    }

    /// Jump to the last row loaded so far; the lookahead then loads past it
    pub fn move_to_bottom(&mut self) {
        self.viewport.move_to(usize::MAX, self.list_len());
        self.refresh();
    }

    /// Replace the filter and restart from the top
    pub fn apply_filter(&mut self, query: &str) {
        self.filter.apply(query);
        self.viewport.reset();
        self.filter.scan(self.graph.entries());
        self.refresh();
    }

    /// Compute and cache changed files of the selected commit
    pub fn load_selected_files(&mut self) {
        let Some(id) = self.selected_entry().map(CommitEntry::id) else {
            return;
        };
        self.files.get_or_load(self.graph.source(), id);
    }

    /// Cached changed files of the selected commit, if loaded
    pub fn selected_files(&self) -> Option<&[String]> {
        self.selected_entry().and_then(|entry| self.files.get(entry.id()))
    }

    fn ensure_visible(&mut self) {
        let target = self.viewport.offset() + self.viewport.height() + LOOKAHEAD;
        if !self.filter.is_active() {
            self.load(target);
            return;
        }

        self.filter.scan(self.graph.entries());
        while self.filter.matches().len() <= target && self.graph.has_more() {
            self.load(self.graph.len());
            self.filter.scan(self.graph.entries());
        }
    }

    fn load(&mut self, index: usize) {
        if let Err(e) = self.graph.ensure(index) {
            warn!(index, error = %e, "failed to extend commit graph");
        }
    }
}
