use anyhow::Context;
use git2::{Oid, ReferenceType, Repository};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::model::{subject_line, CommitId, CommitNode, CommitTime};

use super::error::{GraphError, Result};
use super::source::HistorySource;

/// History source backed by a git repository on disk
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open the repository containing `path`, searching upward for `.git`
    pub fn discover(path: &Path) -> anyhow::Result<Self> {
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;
        Ok(Self { repo })
    }

    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Working tree root, or the git dir for bare repositories
    pub fn root(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }

    /// Enumerate traversal tips: local branch heads, a detached HEAD, and
    /// remote-tracking branches when `include_all` is set. Symbolic refs are
    /// skipped.
    pub fn tips(&self, include_all: bool) -> Result<Vec<CommitId>> {
        let mut tips = Vec::new();
        for reference in self.repo.references()? {
            let reference = match reference {
                Ok(r) => r,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable reference");
                    continue;
                }
            };
            let wanted = reference.is_branch() || (include_all && reference.is_remote());
            if !wanted || reference.kind() != Some(ReferenceType::Direct) {
                continue;
            }
            if let Some(oid) = reference.target() {
                tips.push(CommitId::from(oid));
            }
        }

        if self.repo.head_detached().unwrap_or(false) {
            if let Some(head) = self.head() {
                tips.push(head);
            }
        }
        Ok(tips)
    }

    /// Short label for the current HEAD, for the header bar
    pub fn head_label(&self) -> String {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(_) => return String::new(),
        };
        if head.is_branch() {
            return head.shorthand().unwrap_or_default().to_string();
        }
        match head.target() {
            Some(oid) if !oid.is_zero() => format!("detached@{}", CommitId::from(oid).short()),
            _ => "detached".to_string(),
        }
    }

    fn find_commit(&self, id: CommitId) -> std::result::Result<git2::Commit<'_>, git2::Error> {
        let oid = Oid::from_bytes(id.as_bytes())?;
        self.repo.find_commit(oid)
    }

    fn diff_paths(
        &self,
        commit: &git2::Commit<'_>,
    ) -> std::result::Result<Vec<String>, git2::Error> {
        if commit.parent_count() == 0 {
            return Ok(Vec::new());
        }
        let parent_tree = commit.parent(0)?.tree()?;
        let tree = commit.tree()?;
        let diff = self
            .repo
            .diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)?;

        let mut paths: Vec<String> = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl HistorySource for GitHistory {
    fn lookup(&self, id: CommitId) -> Result<CommitNode> {
        let commit = self.find_commit(id).map_err(|e| GraphError::LookupFailed {
            id,
            reason: e.message().to_string(),
        })?;

        let author = String::from_utf8_lossy(commit.author().name_bytes()).into_owned();
        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
        let when = commit.committer().when();

        Ok(CommitNode {
            id,
            parents: commit.parent_ids().map(CommitId::from).collect(),
            author,
            subject: subject_line(&message),
            message,
            time: CommitTime::new(when.seconds(), when.offset_minutes()),
        })
    }

    fn changed_paths(&self, id: CommitId) -> Result<Vec<String>> {
        let unavailable = |e: git2::Error| GraphError::DiffUnavailable {
            id,
            reason: e.message().to_string(),
        };
        let commit = self.find_commit(id).map_err(unavailable)?;
        self.diff_paths(&commit).map_err(unavailable)
    }

    fn head(&self) -> Option<CommitId> {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .map(|c| CommitId::from(c.id()))
    }
}
