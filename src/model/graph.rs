use super::commit::{CommitId, CommitNode, CommitTime};

/// Glyph drawn in one graph column
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GraphSymbol {
    /// The commit itself
    Node,
    /// A branch line passing through this row
    Line,
    /// A new branch line opened by a merge
    Branch,
}

impl GraphSymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            GraphSymbol::Node => "*",
            GraphSymbol::Line => "|",
            GraphSymbol::Branch => "\\",
        }
    }
}

/// One column of a rendered row. `color` is the column index at render
/// time; the presentation layer maps it onto its palette.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GraphCell {
    pub symbol: GraphSymbol,
    pub color: usize,
}

/// Graph cells for one commit, one per open column
pub type RenderedRow = Vec<GraphCell>;

/// A commit that has been traversed and laid out
#[derive(Debug, Clone)]
pub struct CommitEntry {
    pub commit: CommitNode,
    pub short_id: String,
    pub row: RenderedRow,
}

impl CommitEntry {
    pub fn new(commit: CommitNode, row: RenderedRow) -> Self {
        let short_id = commit.id.short();
        Self { commit, short_id, row }
    }

    pub fn id(&self) -> CommitId {
        self.commit.id
    }

    pub fn subject(&self) -> &str {
        &self.commit.subject
    }

    pub fn author(&self) -> &str {
        &self.commit.author
    }

    pub fn time(&self) -> CommitTime {
        self.commit.time
    }

    /// The row as plain text, e.g. `*|\`
    pub fn graph_text(&self) -> String {
        self.row.iter().map(|c| c.symbol.as_str()).collect()
    }
}
