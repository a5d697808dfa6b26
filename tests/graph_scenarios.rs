// End-to-end graph scenarios
// Drives the traversal, layout and filter over in-memory histories

use arbor::graph::CommitGraph;
use arbor::model::{CommitId, GraphSymbol};
use arbor::repository::{numbered_id, MemoryHistory};
use arbor::viewmodel::LogViewModel;
use std::collections::HashSet;

fn id(n: u64) -> CommitId {
    numbered_id(n)
}

fn ids(graph: &CommitGraph<&MemoryHistory>) -> Vec<CommitId> {
    graph.entries().iter().map(|e| e.id()).collect()
}

fn rows(graph: &CommitGraph<&MemoryHistory>) -> Vec<String> {
    graph.entries().iter().map(|e| e.graph_text()).collect()
}

#[test]
fn test_linear_history() {
    let mut history = MemoryHistory::new();
    history
        .add(id(1), &[], "alice", "first", 100)
        .add(id(2), &[id(1)], "alice", "second", 200)
        .add(id(3), &[id(2)], "bob", "third", 300);

    let mut graph = CommitGraph::new(&history, &[id(3)], 0).unwrap();
    graph.ensure(2).unwrap();

    assert_eq!(ids(&graph), vec![id(3), id(2), id(1)]);
    assert_eq!(rows(&graph), vec!["*", "*", "*"]);
    assert!(!graph.has_more());

    // Asking again, or for more than exists, changes nothing
    graph.ensure(2).unwrap();
    graph.ensure(50).unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(history.lookup_count(), 3);
}

#[test]
fn test_ensure_loads_lazily() {
    let mut history = MemoryHistory::new();
    for n in 1..=50 {
        let parents: Vec<_> = if n > 1 { vec![id(n - 1)] } else { vec![] };
        history.add(id(n), &parents, "dev", &format!("commit {}", n), n as i64);
    }

    let mut graph = CommitGraph::new(&history, &[id(50)], 0).unwrap();
    graph.ensure(0).unwrap();
    assert_eq!(graph.len(), 1);
    // The tip, plus its parent queued on the frontier
    assert_eq!(history.lookup_count(), 2);

    graph.ensure(9).unwrap();
    assert_eq!(graph.len(), 10);
    assert!(graph.has_more());
}

#[test]
fn test_merge_opens_and_collapses_columns() {
    // 1 <- 2 <- 4(merge of 2, 3) <- 5, with 3 branching off 1
    let mut history = MemoryHistory::new();
    history
        .add(id(1), &[], "dev", "base", 10)
        .add(id(2), &[id(1)], "dev", "main work", 20)
        .add(id(3), &[id(1)], "dev", "side work", 30)
        .add(id(4), &[id(2), id(3)], "dev", "merge side", 40)
        .add(id(5), &[id(4)], "dev", "after merge", 50);

    let mut graph = CommitGraph::new(&history, &[id(5)], 0).unwrap();
    graph.ensure(10).unwrap();

    assert_eq!(ids(&graph), vec![id(5), id(4), id(3), id(2), id(1)]);
    assert_eq!(rows(&graph), vec!["*", "*\\", "|*", "*|", "*"]);
    let widths: Vec<_> = graph.entries().iter().map(|e| e.row.len()).collect();
    assert_eq!(widths, vec![1, 2, 2, 2, 1]);
    assert!(graph.layout().columns().is_empty());
}

#[test]
fn test_octopus_merge_and_roots() {
    let mut history = MemoryHistory::new();
    history
        .add(id(1), &[], "dev", "root a", 10)
        .add(id(2), &[], "dev", "root b", 20)
        .add(id(3), &[], "dev", "root c", 30)
        .add(id(10), &[id(1), id(2), id(3)], "dev", "octopus", 100);

    let mut graph = CommitGraph::new(&history, &[id(10)], 0).unwrap();

    graph.ensure(0).unwrap();
    let merge = graph.get(0).unwrap();
    let branches = merge
        .row
        .iter()
        .filter(|c| c.symbol == GraphSymbol::Branch)
        .count();
    assert_eq!(branches, 2);
    assert_eq!(merge.graph_text(), "*\\\\");
    assert_eq!(graph.layout().columns().len(), 3);

    // Each root closes its own column
    graph.ensure(1).unwrap();
    assert_eq!(graph.get(1).unwrap().graph_text(), "||*");
    assert_eq!(graph.layout().columns().len(), 2);
    graph.ensure(3).unwrap();
    assert_eq!(rows(&graph)[2..], ["|*", "*"]);
    assert!(graph.layout().columns().is_empty());
}

#[test]
fn test_disjoint_tips_interleave() {
    // Two unrelated chains; the tips share a timestamp
    let mut history = MemoryHistory::new();
    history
        .add(id(1), &[], "dev", "a1", 10)
        .add(id(2), &[id(1)], "dev", "a2", 30)
        .add(id(3), &[id(2)], "dev", "a3", 50)
        .add(id(4), &[], "dev", "b1", 20)
        .add(id(5), &[id(4)], "dev", "b2", 40)
        .add(id(6), &[id(5)], "dev", "b3", 50);

    let mut graph = CommitGraph::new(&history, &[id(3), id(6)], 0).unwrap();
    graph.ensure(100).unwrap();

    assert_eq!(ids(&graph), vec![id(6), id(3), id(5), id(2), id(4), id(1)]);
    assert_eq!(rows(&graph), vec!["*", "*|", "|*", "*|", "|*", "*"]);
}

#[test]
fn test_limit_boundary() {
    let mut history = MemoryHistory::new();
    for n in 1..=10 {
        let parents: Vec<_> = if n > 1 { vec![id(n - 1)] } else { vec![] };
        history.add(id(n), &parents, "dev", "work", n as i64);
    }

    let mut graph = CommitGraph::new(&history, &[id(10)], 4).unwrap();
    graph.ensure(100).unwrap();
    assert_eq!(ids(&graph), vec![id(10), id(9), id(8), id(7)]);
    assert!(!graph.has_more());

    let mut exact = CommitGraph::new(&history, &[id(10)], 10).unwrap();
    exact.ensure(100).unwrap();
    assert_eq!(exact.len(), 10);
    assert!(!exact.has_more());
}

#[test]
fn test_limit_with_unrelated_tips() {
    let mut history = MemoryHistory::new();
    history
        .add(id(1), &[], "dev", "one", 10)
        .add(id(2), &[], "dev", "two", 20)
        .add(id(3), &[], "dev", "three", 30);

    let mut graph = CommitGraph::new(&history, &[id(1), id(2), id(3)], 2).unwrap();
    graph.ensure(100).unwrap();

    assert_eq!(ids(&graph), vec![id(3), id(2)]);
    assert!(!graph.has_more());
}

#[test]
fn test_no_duplicate_commits_in_lattice() {
    // Every commit n > 2 has parents n-1 and n-2
    let mut history = MemoryHistory::new();
    history.add(id(1), &[], "dev", "root", 1);
    history.add(id(2), &[id(1)], "dev", "two", 2);
    for n in 3..=40 {
        history.add(id(n), &[id(n - 1), id(n - 2)], "dev", "merge", n as i64);
    }

    let mut graph = CommitGraph::new(&history, &[id(40), id(39)], 0).unwrap();
    graph.ensure(1_000).unwrap();

    let all = ids(&graph);
    let unique: HashSet<_> = all.iter().copied().collect();
    assert_eq!(all.len(), 40);
    assert_eq!(unique.len(), 40);
    assert_eq!(all[0], id(40));
    assert_eq!(all[39], id(1));
}

#[test]
fn test_equal_timestamps_are_deterministic() {
    let build = || {
        let mut history = MemoryHistory::new();
        for n in 1..=5 {
            history.add(id(n), &[], "dev", "root", 0);
        }
        history
    };

    let first = build();
    let second = build();
    let tips: Vec<_> = (1..=5).map(id).collect();
    let reversed: Vec<_> = tips.iter().rev().copied().collect();

    let mut a = CommitGraph::new(&first, &tips, 0).unwrap();
    let mut b = CommitGraph::new(&second, &reversed, 0).unwrap();
    a.ensure(10).unwrap();
    b.ensure(10).unwrap();

    assert_eq!(ids(&a), ids(&b));
    assert_eq!(ids(&a), vec![id(5), id(4), id(3), id(2), id(1)]);
    assert_eq!(rows(&a), rows(&b));
}

#[test]
fn test_filter_finds_matches_in_order() {
    let fixes = [95, 80, 64, 50, 33, 12, 3];
    let mut history = MemoryHistory::new();
    for n in 1..=100u64 {
        let parents: Vec<_> = if n > 1 { vec![id(n - 1)] } else { vec![] };
        let subject = if fixes.contains(&n) {
            format!("Fix bug {}", n)
        } else {
            format!("feature {}", n)
        };
        history.add(id(n), &parents, "dev", &subject, n as i64);
    }

    let graph = CommitGraph::new(&history, &[id(100)], 0).unwrap();
    let mut vm = LogViewModel::new(graph);
    vm.resize(20);
    vm.apply_filter("fix");

    // Newest first, so commit n sits at index 100 - n
    assert_eq!(vm.filter().matches(), &[5, 20, 36, 50, 67, 88, 97]);
    assert_eq!(vm.list_len(), 7);
    assert!(!vm.has_more());
    assert_eq!(vm.selected_entry().unwrap().subject(), "Fix bug 95");
}

#[test]
fn test_filter_matches_author() {
    let mut history = MemoryHistory::new();
    history
        .add(id(1), &[], "Alice", "one", 1)
        .add(id(2), &[id(1)], "Bob", "two", 2)
        .add(id(3), &[id(2)], "alice", "three", 3);

    let graph = CommitGraph::new(&history, &[id(3)], 0).unwrap();
    let mut vm = LogViewModel::new(graph);
    vm.resize(10);
    vm.apply_filter("  ALICE ");

    assert_eq!(vm.filter().query(), "ALICE");
    assert_eq!(vm.filter().matches(), &[0, 2]);
}
