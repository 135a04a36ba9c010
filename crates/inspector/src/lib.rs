// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # inspector
//!
//! The model inspection pipeline.
//!
//! Given a network definition, and optionally its trained weights and a
//! mean blob, the [`Inspector`]:
//!
//! 1. prints a per-layer weight report, extracting every blob to
//!    `<layer>.<index>.bin`, including layers present only in the weights;
//! 2. feeds each layer into a [`layer_graph::NetGraph`] while printing the
//!    layer dependency report;
//! 3. writes the graph as a Graphviz DOT script;
//! 4. extracts the mean blob to `<mean file>.bin`.
//!
//! Configuration comes from an [`InspectConfig`] (TOML or programmatic).

mod config;
mod error;
mod extract;
mod pipeline;
mod report;

pub use config::InspectConfig;
pub use error::InspectError;
pub use extract::BlobExtractor;
pub use pipeline::{InspectSummary, Inspector};
pub use report::{build_graph, report_structure, report_weights, WeightReport};
