// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for network definitions and weight files.

/// Errors that can occur when loading a network description or its weights.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A definition or weight file could not be read.
    #[error("failed to read model file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The network definition JSON is malformed.
    #[error("failed to parse network definition: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The SafeTensors weight file could not be loaded.
    #[error("failed to load SafeTensors: {0}")]
    SafeTensorsError(String),

    /// A weight tensor is stored with an element type other than f32.
    #[error("tensor '{name}' has unsupported dtype {dtype}")]
    UnsupportedDtype { name: String, dtype: String },

    /// A layer record is invalid (e.g., empty or duplicate name).
    #[error("invalid layer '{layer}': {detail}")]
    InvalidLayer { layer: String, detail: String },

    /// The network definition as a whole is unusable.
    #[error("invalid network definition: {0}")]
    InvalidNet(String),
}
