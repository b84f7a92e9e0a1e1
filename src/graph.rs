//! Directed graph keyed by node identifier.
//!
//! Each node carries its successor set and the count of distinct incoming
//! edges. Edge insertion is idempotent, so duplicated input pairs never
//! inflate an in-degree.

use std::collections::HashMap;

use crate::set::Set;

#[derive(Debug, Default)]
struct NodeData {
    in_degree: usize,
    successors: Set,
}

#[derive(Debug, Default)]
pub struct Graph {
    node_to_data: HashMap<String, NodeData>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `node` exists, with no edges if newly created. Idempotent.
    pub fn add_node(&mut self, node: &str) {
        self.node_to_data.entry(node.to_string()).or_default();
    }

    /// Insert the edge `source -> target`, creating either endpoint as
    /// needed. A no-op when the edge already exists. Self-edges are
    /// permitted at this layer.
    pub fn put_edge(&mut self, source: &str, target: &str) {
        self.add_node(source);
        self.add_node(target);

        let source_data = self
            .node_to_data
            .get_mut(source)
            .expect("source node exists after add_node");
        if source_data.successors.has(target) {
            return;
        }
        source_data.successors.add(target);

        let target_data = self
            .node_to_data
            .get_mut(target)
            .expect("target node exists after add_node");
        target_data.in_degree += 1;
    }

    /// The live successor set of `node`.
    ///
    /// Panics when `node` is absent: querying an unknown node is a caller
    /// bug. Callers that remove edges while walking successors must iterate
    /// over a snapshot.
    pub fn successors(&self, node: &str) -> &Set {
        match self.node_to_data.get(node) {
            Some(data) => &data.successors,
            None => panic!("successors of unknown node {node:?}"),
        }
    }

    /// Remove the edge `source -> target` and decrement `target`'s
    /// in-degree. Callers only invoke this for edges they know are present;
    /// panics when either endpoint is unknown or the accounting underflows.
    pub fn remove_edge(&mut self, source: &str, target: &str) {
        let source_data = match self.node_to_data.get_mut(source) {
            Some(data) => data,
            None => panic!("remove_edge from unknown node {source:?}"),
        };
        source_data.successors.remove(target);

        let target_data = match self.node_to_data.get_mut(target) {
            Some(data) => data,
            None => panic!("remove_edge to unknown node {target:?}"),
        };
        target_data.in_degree = match target_data.in_degree.checked_sub(1) {
            Some(n) => n,
            None => panic!("in-degree underflow for node {target:?}"),
        };
    }

    /// Count of distinct incoming edges, zero for unknown nodes.
    pub fn in_degree(&self, node: &str) -> usize {
        self.node_to_data.get(node).map_or(0, |data| data.in_degree)
    }

    pub fn node_count(&self) -> usize {
        self.node_to_data.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_to_data.keys().map(String::as_str)
    }
}
