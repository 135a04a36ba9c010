// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # layer-graph
//!
//! Dependency graph of a layered network description.
//!
//! Layers arrive one at a time, in any order, as a name, a type string and
//! the names of the tensors they read and write. The graph:
//!
//! - [`NetGraph`]: keeps one node per distinct name, deduplicates edges,
//!   and remembers insertion order for deterministic output.
//! - [`Node`]: a layer or tensor name with its sources, sinks and
//!   in-place sinks, addressed through a [`NodeId`] handle.
//! - [`NodeKind`]: the recognized layer kinds.
//!
//! A layer whose output names one of its own inputs is detected as an
//! *in-place* operation (a two-node cycle) and rendered as an annotation
//! rather than a vertex by [`NetGraph::to_dot`].
//!
//! # Example
//! ```
//! use layer_graph::NetGraph;
//!
//! let mut graph = NetGraph::new();
//! graph.add_node("conv1", "Convolution");
//! graph.add_node("relu1", "ReLU");
//! graph.connect("conv1", "relu1");
//! assert!(graph.to_dot().contains("\tconv1->relu1\n"));
//! ```

mod dot;
mod error;
mod graph;
mod node;

pub use error::GraphError;
pub use graph::NetGraph;
pub use node::{Node, NodeId, NodeKind};
