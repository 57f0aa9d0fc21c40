//! Windowed payment graph
//!
//! An undirected multigraph of participants. Each node keeps an ordered
//! multiset of edge endpoints, one entry per active transaction touching it,
//! so degree tracks transaction count rather than distinct-neighbor count.
//! Two transactions between the same pair produce two adjacency entries on
//! each side, and removal takes out one matching entry at a time.
//!
//! The node map is keyed strictly by participant id. Every mutation looks the
//! node up by id; nodes are never used as map keys themselves.

use std::collections::HashMap;

/// One participant currently touched by at least one in-window transaction.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Ordered multiset of edge endpoints. Duplicates are expected whenever a
    /// pair transacts more than once inside the window.
    adjacency: Vec<String>,
}

impl Node {
    /// Number of active transactions touching this participant.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    fn add_endpoint(&mut self, endpoint: &str) {
        self.adjacency.push(endpoint.to_string());
    }

    /// Remove the first adjacency entry equal to `endpoint`, leaving any
    /// further duplicates in place. Returns false if no entry matched.
    fn remove_endpoint(&mut self, endpoint: &str) -> bool {
        match self.adjacency.iter().position(|e| e == endpoint) {
            Some(idx) => {
                self.adjacency.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Undirected multigraph restricted to the trailing time window.
///
/// Invariants maintained across every mutation:
/// * a participant id is present iff its node has degree >= 1
/// * each active edge (a, b) contributes exactly one adjacency entry to each
///   endpoint, so total entries equal 2x the active edge count
#[derive(Debug, Clone, Default)]
pub struct WindowedGraph {
    nodes: HashMap<String, Node>,
}

impl WindowedGraph {
    pub fn new() -> Self {
        WindowedGraph {
            nodes: HashMap::new(),
        }
    }

    /// Ensure a node exists for `id`. Idempotent; an existing node and its
    /// adjacency are left untouched.
    pub fn add_node(&mut self, id: &str) {
        self.nodes.entry(id.to_string()).or_default();
    }

    /// Insert one undirected edge between `a` and `b`, creating either node
    /// as needed. A self-loop (`a == b`) lands two entries on the one node.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.add_node(a);
        self.add_node(b);

        if let Some(node) = self.nodes.get_mut(a) {
            node.add_endpoint(b);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.add_endpoint(a);
        }
    }

    /// Remove one edge instance per `(actor, target)` pair in `edges`.
    ///
    /// Removal is remove-first-occurrence on each side, which is what keeps
    /// multiplicity correct when only some instances of a repeated pair are
    /// being evicted. If either endpoint is not in the graph the pair is
    /// skipped entirely, so a stale candidate can never half-remove an edge.
    /// Endpoints whose degree reaches zero are dropped from the graph.
    pub fn remove_edges(&mut self, edges: &[(String, String)]) {
        for (actor, target) in edges {
            if !self.nodes.contains_key(actor) || !self.nodes.contains_key(target) {
                continue;
            }

            if let Some(node) = self.nodes.get_mut(actor) {
                node.remove_endpoint(target);
            }
            if let Some(node) = self.nodes.get_mut(target) {
                node.remove_endpoint(actor);
            }

            self.drop_if_isolated(actor);
            self.drop_if_isolated(target);
        }
    }

    fn drop_if_isolated(&mut self, id: &str) {
        if self.nodes.get(id).is_some_and(|n| n.degree() == 0) {
            self.nodes.remove(id);
        }
    }

    /// Degree of every present node, in no particular order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.nodes.values().map(Node::degree).collect()
    }

    /// Degree of one participant, if present.
    pub fn degree_of(&self, id: &str) -> Option<usize> {
        self.nodes.get(id).map(Node::degree)
    }

    /// Number of participants currently in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
