// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary git repository with no commits
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    // Configure git user for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

fn signature(author: &str, seconds: i64) -> Signature<'static> {
    Signature::new(author, "test@example.com", &Time::new(seconds, 0)).unwrap()
}

/// Write files into the index and create a commit with explicit parents
/// and time. `update_ref` is moved to the new commit when given.
pub fn commit_at(
    repo: &Repository,
    update_ref: Option<&str>,
    files: &[(&str, &[u8])],
    message: &str,
    author: &str,
    parents: &[Oid],
    seconds: i64,
) -> Oid {
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        // Write file to working directory
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();

        index.add_path(Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent_commits: Vec<_> = parents
        .iter()
        .map(|oid| repo.find_commit(*oid).unwrap())
        .collect();
    let parent_refs: Vec<_> = parent_commits.iter().collect();

    let sig = signature(author, seconds);
    repo.commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Commit on top of HEAD (or as a root when HEAD is unborn)
pub fn add_commit(repo: &Repository, files: &[(&str, &[u8])], message: &str, seconds: i64) -> Oid {
    let parent = repo
        .head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok())
        .map(|c| c.id());
    let parents: Vec<Oid> = parent.into_iter().collect();
    commit_at(repo, Some("HEAD"), files, message, "Test User", &parents, seconds)
}

/// Point `refs/heads/<name>` at `target`
pub fn create_branch(repo: &Repository, name: &str, target: Oid) {
    let commit = repo.find_commit(target).unwrap();
    repo.branch(name, &commit, true).unwrap();
}
