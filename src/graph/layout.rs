//! Column assignment for the branch graph
//!
//! Each commit is placed in the column waiting for it. A merge opens one new
//! column per extra parent directly to the right of the commit; a root
//! closes its column. Columns that end up waiting for the same commit are
//! collapsed after the row is drawn, so a merge-back shows up one row after
//! the shared ancestor is first reached.

use crate::model::{CommitNode, GraphCell, GraphSymbol, RenderedRow};

use super::columns::ColumnList;

/// Stateful graph layout, fed commits in traversal order
#[derive(Debug, Default)]
pub struct ColumnLayout {
    columns: ColumnList,
}

impl ColumnLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open columns
    pub fn columns(&self) -> &ColumnList {
        &self.columns
    }

    /// Lay out one commit and advance the column state
    pub fn render(&mut self, commit: &CommitNode) -> RenderedRow {
        let idx = match self.columns.position(commit.id) {
            Some(idx) => idx,
            None => {
                // A branch never seen as a parent enters on the left
                self.columns.insert_at(0, commit.id);
                0
            }
        };

        let parents = &commit.parents;
        let extra = parents.len().saturating_sub(1);
        let width = self.columns.len() + extra;

        let mut row: RenderedRow = (0..width)
            .map(|color| GraphCell {
                symbol: GraphSymbol::Line,
                color,
            })
            .collect();
        row[idx].symbol = GraphSymbol::Node;
        for cell in row.iter_mut().skip(idx + 1).take(extra) {
            cell.symbol = GraphSymbol::Branch;
        }

        match parents.split_first() {
            None => {
                self.columns.remove_at(idx);
            }
            Some((first, rest)) => {
                self.columns.replace_at(idx, *first);
                for (i, parent) in rest.iter().enumerate() {
                    self.columns.insert_at(idx + 1 + i, *parent);
                }
            }
        }
        self.columns.dedup();
        row
    }
}
