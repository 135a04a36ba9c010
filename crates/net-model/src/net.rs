// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON network definition parsing.
//!
//! # Format
//! ```json
//! {
//!   "name": "lenet",
//!   "layers": [
//!     { "name": "data",  "type": "Input", "top": ["data"] },
//!     {
//!       "name": "conv1",
//!       "type": "Convolution",
//!       "bottom": ["data"],
//!       "top": ["conv1"],
//!       "convolution_param": { "num_output": 20, "kernel_size": [5], "stride": [1] }
//!     },
//!     { "name": "relu1", "type": "ReLU", "bottom": ["conv1"], "top": ["conv1"] }
//!   ]
//! }
//! ```
//!
//! `inputs`/`outputs` are the canonical field names; `bottom`/`top` are
//! accepted as aliases.

use crate::ModelError;
use std::collections::HashSet;
use std::path::Path;

/// Top-level network definition.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NetDefinition {
    /// Network name (e.g., `"lenet"`).
    #[serde(default)]
    pub name: String,
    /// Layer records in declaration order.
    #[serde(alias = "layer")]
    pub layers: Vec<LayerRecord>,
}

/// One layer as declared in the definition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerRecord {
    pub name: String,
    /// Free-form type string (e.g., `"Convolution"`).
    #[serde(rename = "type", default)]
    pub layer_type: String,
    /// Names of the tensors this layer reads.
    #[serde(default, alias = "bottom")]
    pub inputs: Vec<String>,
    /// Names of the tensors this layer writes.
    #[serde(default, alias = "top")]
    pub outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convolution_param: Option<ConvolutionParam>,
}

/// Convolution hyper-parameters, reported but never interpreted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConvolutionParam {
    pub num_output: u32,
    #[serde(default)]
    pub kernel_size: Vec<u32>,
    #[serde(default)]
    pub stride: Vec<u32>,
}

impl ConvolutionParam {
    /// First kernel size, or 0 when none is declared.
    pub fn kernel(&self) -> u32 {
        self.kernel_size.first().copied().unwrap_or(0)
    }

    /// First stride, defaulting to 1.
    pub fn stride(&self) -> u32 {
        self.stride.first().copied().unwrap_or(1)
    }
}

impl LayerRecord {
    /// Returns `true` if the layer writes one of the tensors it reads.
    pub fn is_inplace(&self) -> bool {
        self.outputs.iter().any(|o| self.inputs.contains(o))
    }
}

impl NetDefinition {
    /// Loads a definition from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let net: Self = serde_json::from_str(json)?;
        Ok(net)
    }

    /// Checks that the definition can be turned into a graph.
    ///
    /// # Checks
    /// - At least one layer is declared.
    /// - No layer has an empty name.
    /// - No two layers share a name.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::InvalidNet(
                "network definition contains no layers".into(),
            ));
        }

        let mut seen = HashSet::new();
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.name.is_empty() {
                return Err(ModelError::InvalidLayer {
                    layer: format!("#{i}"),
                    detail: "empty layer name".into(),
                });
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(ModelError::InvalidLayer {
                    layer: layer.name.clone(),
                    detail: "duplicate layer name".into(),
                });
            }
            if layer.inputs.contains(&layer.name) {
                tracing::warn!(
                    "layer '{}' lists itself as an input; the self-edge is ignored",
                    layer.name,
                );
            }
        }

        Ok(())
    }

    /// Number of layers declared as in-place (output names an input).
    pub fn inplace_layer_count(&self) -> usize {
        self.layers.iter().filter(|l| l.is_inplace()).count()
    }
}
