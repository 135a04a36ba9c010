// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for graph export.

use std::path::PathBuf;

/// Errors that can occur when exporting a [`crate::NetGraph`].
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The DOT script could not be written to its destination.
    #[error("failed to write graph to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
