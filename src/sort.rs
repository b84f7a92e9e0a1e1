//! Topological sort driver.
//!
//! Reads whitespace-delimited tokens in pairs `(pred, succ)`, builds the
//! dependency graph, and emits nodes in Kahn order: repeatedly extract a
//! node with no remaining incoming edges, then drop its outgoing edges.
//!
//! A pair with identical tokens declares the node without adding an edge,
//! per the classic tsort convention, and an input of one sole token is
//! likewise a bare declaration. An unpaired token left over after real
//! pairs is malformed ("odd data count"). When extraction stalls, every
//! leftover node sits on
//! or behind a cycle; the driver reports one cycle to the diagnostic
//! writer, deletes the edge that closes it, and keeps going, so every
//! input node is still written exactly once.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::graph::Graph;
use crate::multiset::Multiset;
use crate::queue::Queue;
use crate::set::Set;

/// How a sort run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Acyclic input; the ordering respects every edge.
    Clean,
    /// One or more cycles were broken to make progress.
    CyclesBroken,
}

/// Sort the token pairs read from `input`, writing one node per line to
/// `output` and cycle reports to `diag`.
pub fn run(
    mut input: impl Read,
    output: &mut impl Write,
    diag: &mut impl Write,
) -> Result<Outcome> {
    let mut data = String::new();
    input
        .read_to_string(&mut data)
        .context("Failed to read input")?;

    let graph = build_graph(&data)?;
    extract_ordering(graph, output, diag)
}

/// Sort the contents of `path`. Used by the CLI for a FILE argument.
pub fn run_file(path: &Path, output: &mut impl Write, diag: &mut impl Write) -> Result<Outcome> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    run(file, output, diag)
}

/// Split on ASCII whitespace. `split_ascii_whitespace` misses vertical tab,
/// which the traditional tool accepts as a separator.
fn tokens(data: &str) -> impl Iterator<Item = &str> {
    data.split(|c: char| c.is_ascii_whitespace() || c == '\x0B')
        .filter(|token| !token.is_empty())
}

fn build_graph(data: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    // Self-paired tokens declare a node without contributing an edge.
    // Collected separately so duplicate declarations stay out of the
    // graph's edge accounting.
    let mut declared = Multiset::new();

    let mut pairs = 0usize;
    let mut it = tokens(data);
    while let Some(pred) = it.next() {
        match it.next() {
            Some(succ) if succ == pred => declared.add(pred, 1),
            Some(succ) => graph.put_edge(pred, succ),
            // A sole token declares an isolated node; an unpaired token
            // after real pairs is malformed.
            None if pairs == 0 => declared.add(pred, 1),
            None => bail!("odd data count"),
        }
        pairs += 1;
    }

    declared.for_each_unique(|node| {
        graph.add_node(node);
        true
    });

    Ok(graph)
}

fn extract_ordering(
    mut graph: Graph,
    output: &mut impl Write,
    diag: &mut impl Write,
) -> Result<Outcome> {
    let mut frontier = Queue::new();
    for node in graph.nodes() {
        if graph.in_degree(node) == 0 {
            frontier.enqueue(node);
        }
    }

    let mut emitted = Set::new();
    let mut cycles_broken = false;

    while emitted.len() < graph.node_count() {
        while !frontier.is_empty() {
            let node = frontier.dequeue();
            writeln!(output, "{node}").context("Failed to write output")?;

            // remove_edge mutates the set being walked; iterate a snapshot.
            let successors: Vec<String> =
                graph.successors(&node).iter().map(str::to_string).collect();
            for succ in successors {
                graph.remove_edge(&node, &succ);
                if graph.in_degree(&succ) == 0 {
                    frontier.enqueue(succ);
                }
            }
            emitted.add(node);
        }

        if emitted.len() == graph.node_count() {
            break;
        }

        // Stalled with nodes left: all of them have incoming edges, so a
        // cycle exists among them. Report it, cut the closing edge, and
        // resume extraction.
        let cycle = find_cycle(&graph, &emitted);
        report_cycle(diag, &cycle)?;
        cycles_broken = true;

        let first = &cycle[0];
        let last = &cycle[cycle.len() - 1];
        graph.remove_edge(last, first);
        if graph.in_degree(first) == 0 {
            frontier.enqueue(first.as_str());
        }
    }

    if cycles_broken {
        Ok(Outcome::CyclesBroken)
    } else {
        Ok(Outcome::Clean)
    }
}

/// Find a cycle among the nodes not yet emitted.
///
/// Depth-first search over leftover successors; a back-edge into the
/// current path yields the cycle, listed so the last node's edge to the
/// first closes it. Panics when no cycle exists: only called when
/// extraction stalled, which guarantees one.
fn find_cycle(graph: &Graph, emitted: &Set) -> Vec<String> {
    let mut finished = Set::new();
    for root in graph.nodes() {
        if emitted.has(root) || finished.has(root) {
            continue;
        }
        if let Some(cycle) = cycle_from(graph, emitted, root, &mut finished) {
            return cycle;
        }
    }
    panic!("no cycle among leftover nodes");
}

/// Depth-first search from `root` with an explicit frame stack, so the
/// search handles cycles far longer than the call stack could.
fn cycle_from<'a>(
    graph: &'a Graph,
    emitted: &Set,
    root: &'a str,
    finished: &mut Set,
) -> Option<Vec<String>> {
    struct Frame<'a> {
        node: &'a str,
        successors: Vec<&'a str>,
        next: usize,
    }

    let mut stack = vec![Frame {
        node: root,
        successors: graph.successors(root).iter().collect(),
        next: 0,
    }];
    let mut on_path = Set::new();
    on_path.add(root);

    while let Some(top) = stack.last_mut() {
        if top.next == top.successors.len() {
            on_path.remove(top.node);
            finished.add(top.node);
            stack.pop();
            continue;
        }
        let succ = top.successors[top.next];
        top.next += 1;

        if emitted.has(succ) || finished.has(succ) {
            continue;
        }
        if on_path.has(succ) {
            let start = stack
                .iter()
                .position(|frame| frame.node == succ)
                .expect("on-path node is on the stack");
            return Some(stack[start..].iter().map(|frame| frame.node.to_string()).collect());
        }
        on_path.add(succ);
        stack.push(Frame {
            node: succ,
            successors: graph.successors(succ).iter().collect(),
            next: 0,
        });
    }

    None
}

fn report_cycle(diag: &mut impl Write, cycle: &[String]) -> Result<()> {
    writeln!(diag, "tsort: cycle in data").context("Failed to write diagnostic")?;
    for node in cycle {
        writeln!(diag, "tsort: {node}").context("Failed to write diagnostic")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_tokens(data: &str) -> Vec<&str> {
        tokens(data).collect()
    }

    #[test]
    fn test_tokens_split_on_every_separator() {
        assert_eq!(collect_tokens("a b"), ["a", "b"]);
        assert_eq!(collect_tokens("a\tb"), ["a", "b"]);
        assert_eq!(collect_tokens("a\nb"), ["a", "b"]);
        assert_eq!(collect_tokens("a\rb"), ["a", "b"]);
        assert_eq!(collect_tokens("a\x0Bb"), ["a", "b"]);
        assert_eq!(collect_tokens("a\x0Cb"), ["a", "b"]);
    }

    #[test]
    fn test_tokens_collapse_runs_and_edges() {
        assert_eq!(collect_tokens("  a \n\n b\t"), ["a", "b"]);
        assert!(collect_tokens("").is_empty());
        assert!(collect_tokens(" \n\r\t\x0B\x0C").is_empty());
    }

    #[test]
    fn test_build_graph_edges_and_declarations() {
        let g = build_graph("a b a a c c").expect("even input");
        assert_eq!(g.node_count(), 3);
        assert!(g.successors("a").has("b"));
        assert_eq!(g.in_degree("b"), 1);
        // "a a" and "c c" are declarations, not edges
        assert!(!g.successors("a").has("a"));
        assert_eq!(g.in_degree("a"), 0);
        assert_eq!(g.in_degree("c"), 0);
        assert!(g.successors("c").is_empty());
    }

    #[test]
    fn test_build_graph_duplicate_edges_not_double_counted() {
        let g = build_graph("a b a b b a").expect("even input");
        assert_eq!(g.in_degree("b"), 1);
        assert_eq!(g.in_degree("a"), 1);
    }

    #[test]
    fn test_build_graph_sole_token_is_a_declaration() {
        let g = build_graph("solo").expect("sole token input");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.in_degree("solo"), 0);
        assert!(g.successors("solo").is_empty());
    }

    #[test]
    fn test_build_graph_odd_token_count_errors() {
        for input in ["a b c", "a b c d e", "a a b"] {
            let err = build_graph(input).expect_err("odd input should fail");
            assert!(
                err.to_string().contains("odd data count"),
                "input {input:?}: unexpected error {err:#}"
            );
        }
    }
}
