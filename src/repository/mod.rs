mod error;
mod git_history;
mod memory;
mod source;

pub use error::{GraphError, Result};
pub use git_history::GitHistory;
pub use memory::{numbered_id, MemoryHistory};
pub use source::HistorySource;
