// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Graph vertices: node handles, kind tags, and per-node adjacency.
//!
//! A [`Node`] never owns its neighbours. Sources, sinks and in-place sinks
//! are stored as [`NodeId`] handles into the arena owned by
//! [`crate::NetGraph`], and only the graph may mutate them.

use std::fmt;

/// Handle to a node inside a [`crate::NetGraph`] arena.
///
/// Handles are dense indices assigned in insertion order, so comparing two
/// handles compares node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of layer a node represents.
///
/// Implicit nodes (tensor names referenced before any layer declares them)
/// and layers with unrecognized type strings are [`NodeKind::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Untyped: placeholder or unrecognized layer type.
    #[default]
    None,
    /// Network input declaration.
    Input,
    /// Data-provider layer.
    Data,
    /// Convolution layer.
    Convolution,
    /// Rectified linear activation.
    ReLU,
    /// Pooling layer.
    Pooling,
    /// Fully connected layer.
    InnerProduct,
}

/// Recognized layer type strings. Matching is exact and case-sensitive.
const KIND_TABLE: &[(&str, NodeKind)] = &[
    ("Input", NodeKind::Input),
    ("Data", NodeKind::Data),
    ("Convolution", NodeKind::Convolution),
    ("ReLU", NodeKind::ReLU),
    ("Pooling", NodeKind::Pooling),
    ("InnerProduct", NodeKind::InnerProduct),
];

impl NodeKind {
    /// Maps a declared layer type string to a kind.
    ///
    /// Unknown strings (including `"none"`) map to [`NodeKind::None`].
    pub fn from_type_str(type_str: &str) -> Self {
        KIND_TABLE
            .iter()
            .find(|(name, _)| *name == type_str)
            .map(|(_, kind)| *kind)
            .unwrap_or(NodeKind::None)
    }

    /// Returns the canonical type string, or `"none"` for untyped nodes.
    pub fn as_str(&self) -> &'static str {
        KIND_TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("none")
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vertex: a layer, or a tensor name seen only in a connection.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    in_place: bool,
    sources: Vec<NodeId>,
    sinks: Vec<NodeId>,
    inplace_sinks: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            kind,
            in_place: false,
            sources: Vec::new(),
            sinks: Vec::new(),
            inplace_sinks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` if this node overwrites one of its own inputs.
    pub fn is_inplace(&self) -> bool {
        self.in_place
    }

    /// Producers of this node, in the order they were connected.
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }

    /// Consumers of this node, in the order they were connected.
    pub fn sinks(&self) -> &[NodeId] {
        &self.sinks
    }

    /// Sinks that were already sources when they were added.
    pub fn inplace_sinks(&self) -> &[NodeId] {
        &self.inplace_sinks
    }

    pub fn is_source(&self, id: NodeId) -> bool {
        self.sources.contains(&id)
    }

    pub fn is_sink(&self, id: NodeId) -> bool {
        self.sinks.contains(&id)
    }

    pub(crate) fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    /// Records `sink` as a consumer of this node.
    ///
    /// If `sink` already feeds this node, the node is flagged in-place and
    /// `sink` is also recorded as an in-place sink. Returns `true` only when
    /// `sink` was not yet in the generic sink list.
    pub(crate) fn add_sink(&mut self, sink: NodeId) -> bool {
        if self.is_source(sink) {
            self.in_place = true;
            self.add_inplace_sink(sink);
        }

        if self.is_sink(sink) {
            return false;
        }
        self.sinks.push(sink);
        true
    }

    /// Records `source` as a producer of this node; `true` iff new.
    pub(crate) fn add_source(&mut self, source: NodeId) -> bool {
        if self.is_source(source) {
            return false;
        }
        self.sources.push(source);
        true
    }

    fn add_inplace_sink(&mut self, sink: NodeId) -> bool {
        if self.inplace_sinks.contains(&sink) {
            return false;
        }
        self.inplace_sinks.push(sink);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> Node {
        Node::new(name.into(), NodeKind::None)
    }

    #[test]
    fn test_kind_from_type_str() {
        assert_eq!(NodeKind::from_type_str("Convolution"), NodeKind::Convolution);
        assert_eq!(NodeKind::from_type_str("Input"), NodeKind::Input);
        assert_eq!(NodeKind::from_type_str("ReLU"), NodeKind::ReLU);
        assert_eq!(NodeKind::from_type_str("InnerProduct"), NodeKind::InnerProduct);
        assert_eq!(NodeKind::from_type_str("none"), NodeKind::None);
        assert_eq!(NodeKind::from_type_str("Softmax"), NodeKind::None);
        // Case-sensitive, like the layer type registry it mirrors.
        assert_eq!(NodeKind::from_type_str("convolution"), NodeKind::None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Pooling.to_string(), "Pooling");
        assert_eq!(NodeKind::None.to_string(), "none");
        for (name, kind) in KIND_TABLE {
            assert_eq!(NodeKind::from_type_str(kind.as_str()), *kind);
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn test_add_sink_dedup() {
        let mut n = node("a");
        assert!(n.add_sink(NodeId(1)));
        assert!(!n.add_sink(NodeId(1)));
        assert_eq!(n.sinks(), &[NodeId(1)]);
        assert!(!n.is_inplace());
    }

    #[test]
    fn test_add_source_dedup() {
        let mut n = node("a");
        assert!(n.add_source(NodeId(2)));
        assert!(!n.add_source(NodeId(2)));
        assert_eq!(n.sources(), &[NodeId(2)]);
        assert!(n.is_source(NodeId(2)));
        assert!(!n.is_sink(NodeId(2)));
    }

    #[test]
    fn test_add_sink_of_source_marks_inplace() {
        let mut n = node("b");
        n.add_source(NodeId(0));
        assert!(n.add_sink(NodeId(0)));
        assert!(n.is_inplace());
        assert_eq!(n.inplace_sinks(), &[NodeId(0)]);
        assert_eq!(n.sinks(), &[NodeId(0)]);

        // Repeating does not duplicate either list.
        assert!(!n.add_sink(NodeId(0)));
        assert_eq!(n.inplace_sinks(), &[NodeId(0)]);
        assert_eq!(n.sinks(), &[NodeId(0)]);
    }

    #[test]
    fn test_sink_order_preserved() {
        let mut n = node("a");
        for i in [3, 1, 2] {
            n.add_sink(NodeId(i));
        }
        assert_eq!(n.sinks(), &[NodeId(3), NodeId(1), NodeId(2)]);
    }
}
