// Shared benchmark helpers
#![allow(dead_code)]

use arbor::model::CommitId;
use arbor::repository::{numbered_id, MemoryHistory};

/// Generate a branchy history of `count` commits.
///
/// Commits form a main line; every 7th commit starts a side branch that is
/// merged back 5 commits later. Returns the history and its tip.
pub fn generate_history(count: u64) -> (MemoryHistory, CommitId) {
    let mut history = MemoryHistory::new();
    history.add(numbered_id(1), &[], "dev", "initial", 1);

    let mut main = numbered_id(1);
    let mut side: Option<(CommitId, u64)> = None;
    for n in 2..=count {
        let id = numbered_id(n);
        let seconds = n as i64;
        let subject = format!("commit {}", n);

        match side {
            Some((branch, started)) if n - started >= 5 => {
                history.add(id, &[main, branch], "dev", &subject, seconds);
                main = id;
                side = None;
            }
            Some((branch, started)) if n % 2 == 0 => {
                history.add(id, &[branch], "other", &subject, seconds);
                side = Some((id, started));
            }
            _ if side.is_none() && n % 7 == 0 => {
                history.add(id, &[main], "other", &subject, seconds);
                side = Some((id, n));
            }
            _ => {
                history.add(id, &[main], "dev", &subject, seconds);
                main = id;
            }
        }
    }

    // Leave a dangling side branch reachable from the tip
    if let Some((branch, _)) = side {
        let tip = numbered_id(count + 1);
        history.add(tip, &[main, branch], "dev", "final merge", (count + 1) as i64);
        return (history, tip);
    }
    (history, main)
}
