mod commit;
mod graph;

pub use commit::{subject_line, CommitId, CommitNode, CommitTime, HASH_LEN, SHORT_LEN};
pub use graph::{CommitEntry, GraphCell, GraphSymbol, RenderedRow};
