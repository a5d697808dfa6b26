use thiserror::Error;

use crate::model::CommitId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no commits found")]
    NoTipsFound,

    #[error("commit frontier is exhausted")]
    FrontierExhausted,

    #[error("failed to look up commit {id}: {reason}")]
    LookupFailed { id: CommitId, reason: String },

    #[error("changed files unavailable for {id}: {reason}")]
    DiffUnavailable { id: CommitId, reason: String },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}
