//! Incremental commit graph
//!
//! Walks history on demand and lays each commit out as it is visited.
//!
//! # Architecture
//!
//! - **frontier**: priority-ordered traversal with a seen set
//! - **columns**: ordered list of open branch lines
//! - **layout**: per-commit column assignment and glyphs
//! - **sequence**: append-only materialized rows, grown by `ensure`

mod columns;
mod frontier;
mod layout;
mod sequence;

pub use columns::ColumnList;
pub use frontier::{visit_order, FrontierQueue, Traversal};
pub use layout::ColumnLayout;
pub use sequence::{CommitGraph, GraphOptions};
