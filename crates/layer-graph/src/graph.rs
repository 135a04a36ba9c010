// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The layer dependency graph and its node registry.
//!
//! # Storage
//!
//! ```text
//! index: HashMap<String, NodeId>   name → handle (uniqueness)
//! nodes: Vec<Node>                 dense arena, insertion order
//! ```
//!
//! A node is appended to the arena exactly once, at creation, and its
//! handle is its arena position. The lookup table and the arena therefore
//! always describe the same set of nodes, and iterating the arena yields
//! the deterministic order used for rendering.
//!
//! Connections may name nodes that have not been declared yet; those are
//! created as untyped placeholders and retyped when the declaring layer is
//! registered later.

use crate::{Node, NodeId, NodeKind};
use std::collections::HashMap;

/// Directed graph of layers and tensor names.
#[derive(Debug, Clone, Default)]
pub struct NetGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl NetGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ───────────────────────────────────────────────────

    /// Looks up a node handle by name. Never creates.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Looks up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.find(name).map(|id| &self.nodes[id.0])
    }

    /// Returns the node behind a handle, if the handle belongs to this graph.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Creates `name` with the kind mapped from `type_str`, or retypes it.
    ///
    /// Returns `true` if a new node was created. An existing node always
    /// takes the kind of the latest call, even when that kind is
    /// [`NodeKind::None`].
    fn register(&mut self, name: &str, type_str: &str) -> bool {
        let kind = NodeKind::from_type_str(type_str);

        if let Some(id) = self.find(name) {
            self.nodes[id.0].set_kind(kind);
            return false;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.to_string(), kind));
        self.index.insert(name.to_string(), id);
        true
    }

    // ── Builder ────────────────────────────────────────────────────

    /// Declares a layer. Returns `true` if the node did not exist yet.
    pub fn add_node(&mut self, name: &str, type_str: &str) -> bool {
        self.register(name, type_str)
    }

    /// Adds the directed edge `src → dst`.
    ///
    /// Identical names are rejected with `false` and nothing is created.
    /// Unknown endpoints become untyped placeholders. Repeating a
    /// connection is a no-op that still returns `true`.
    pub fn connect(&mut self, src: &str, dst: &str) -> bool {
        if src == dst {
            return false;
        }

        let src_id = self.find_or_placeholder(src);
        let dst_id = self.find_or_placeholder(dst);

        let was_inplace = self.nodes[src_id.0].is_inplace();
        if self.nodes[src_id.0].add_sink(dst_id) {
            self.nodes[dst_id.0].add_source(src_id);
        }
        if !was_inplace && self.nodes[src_id.0].is_inplace() {
            tracing::debug!("'{src}' writes in place over '{dst}'");
        }

        true
    }

    fn find_or_placeholder(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.find(name) {
            return id;
        }
        tracing::debug!("creating placeholder node '{name}'");
        self.add_node(name, "none");
        NodeId(self.nodes.len() - 1)
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Total number of recorded sink entries.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.sinks().len()).sum()
    }

    /// Number of nodes flagged in-place.
    pub fn inplace_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_inplace()).count()
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} nodes, {} edges, {} in-place",
            self.len(),
            self.edge_count(),
            self.inplace_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_creates_once() {
        let mut g = NetGraph::new();
        assert!(g.add_node("conv1", "Convolution"));
        assert!(!g.add_node("conv1", "Convolution"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_add_node_last_type_wins() {
        let mut g = NetGraph::new();
        g.add_node("x", "Convolution");
        g.add_node("y", "Input");
        g.add_node("x", "ReLU");
        g.add_node("y", "bogus");
        assert_eq!(g.len(), 2);
        assert_eq!(g.node("x").unwrap().kind(), NodeKind::ReLU);
        assert_eq!(g.node("y").unwrap().kind(), NodeKind::None);
    }

    #[test]
    fn test_find_never_creates() {
        let g = NetGraph::new();
        assert!(g.find("missing").is_none());
        assert!(g.node("missing").is_none());
        assert!(g.is_empty());
    }

    #[test]
    fn test_connect_self_rejected() {
        let mut g = NetGraph::new();
        assert!(!g.connect("data", "data"));
        assert!(g.is_empty());

        g.add_node("conv1", "Convolution");
        assert!(!g.connect("conv1", "conv1"));
        let n = g.node("conv1").unwrap();
        assert!(n.sinks().is_empty());
        assert!(n.sources().is_empty());
        assert!(!n.is_inplace());
        assert_eq!(n.kind(), NodeKind::Convolution);
    }

    #[test]
    fn test_connect_creates_placeholders() {
        let mut g = NetGraph::new();
        assert!(g.connect("data", "conv1"));
        assert_eq!(g.len(), 2);
        assert_eq!(g.node("data").unwrap().kind(), NodeKind::None);

        // Declaring later upgrades the placeholder without a new node.
        assert!(!g.add_node("conv1", "Convolution"));
        assert_eq!(g.node("conv1").unwrap().kind(), NodeKind::Convolution);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_connect_twice_single_edge() {
        let mut g = NetGraph::new();
        assert!(g.connect("a", "b"));
        assert!(g.connect("a", "b"));
        let a = g.find("a").unwrap();
        let b = g.find("b").unwrap();
        assert_eq!(g.get(a).unwrap().sinks(), &[b]);
        assert_eq!(g.get(b).unwrap().sources(), &[a]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_back_edge_marks_inplace() {
        let mut g = NetGraph::new();
        g.connect("a", "b");
        g.connect("b", "a");

        let a = g.find("a").unwrap();
        let b_node = g.node("b").unwrap();
        assert!(b_node.is_inplace());
        assert_eq!(b_node.inplace_sinks(), &[a]);
        assert!(b_node.is_sink(a));
        assert!(!g.node("a").unwrap().is_inplace());
        assert_eq!(g.inplace_count(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut g = NetGraph::new();
        g.add_node("data", "Data");
        g.connect("data", "conv1");
        g.add_node("conv1", "Convolution");
        g.connect("conv1", "pool1");
        let names: Vec<_> = g.nodes().map(|(_, n)| n.name()).collect();
        assert_eq!(names, ["data", "conv1", "pool1"]);
        for (id, node) in g.nodes() {
            assert_eq!(g.find(node.name()), Some(id));
            assert_eq!(g.get(id).map(Node::name), Some(node.name()));
        }
    }

    #[test]
    fn test_caffe_inplace_relu() {
        // A ReLU whose top blob is its bottom blob.
        let mut g = NetGraph::new();
        g.add_node("conv1", "Convolution");
        g.connect("data", "conv1");
        assert!(!g.connect("conv1", "conv1"));
        g.add_node("relu1", "ReLU");
        g.connect("conv1", "relu1");
        g.connect("relu1", "conv1");

        assert!(g.node("relu1").unwrap().is_inplace());
        assert!(!g.node("conv1").unwrap().is_inplace());
        assert_eq!(g.summary(), "3 nodes, 3 edges, 1 in-place");
    }
}
