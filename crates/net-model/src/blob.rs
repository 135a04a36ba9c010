// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Decoded weight blobs.

use std::fmt;

/// A trained f32 array and its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    /// Tensor name in the weight file (e.g., `"conv1.0"`).
    pub name: String,
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl Blob {
    pub fn new(name: impl Into<String>, shape: Vec<usize>, data: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            shape,
            data,
        }
    }

    /// Decodes little-endian f32 bytes as stored in SafeTensors.
    pub(crate) fn from_le_bytes(name: impl Into<String>, shape: Vec<usize>, bytes: &[u8]) -> Self {
        let data = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::new(name, shape, data)
    }

    /// Number of stored values.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shape as `[d0,d1,...]`.
    pub fn shape_string(&self) -> String {
        let dims: Vec<String> = self.shape.iter().map(|d| d.to_string()).collect();
        format!("[{}]", dims.join(","))
    }

    /// Raw little-endian f32 bytes, the on-disk layout of extracted blobs.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes()).collect()
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.shape_string(), self.num_elements())
    }
}
