// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the inspection pipeline.

use std::path::PathBuf;

/// Errors that can occur while inspecting a model.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Loading the network definition or weights failed.
    #[error("model error: {0}")]
    ModelError(#[from] net_model::ModelError),

    /// The graph could not be exported.
    #[error("graph error: {0}")]
    GraphError(#[from] layer_graph::GraphError),

    /// A blob could not be written to disk.
    #[error("failed to extract blob to '{}': {source}", path.display())]
    ExtractError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a report failed.
    #[error("report output failed: {0}")]
    ReportError(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
