// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Trained weight blobs from SafeTensors files.
//!
//! Blobs of a layer are stored as `<layer>.0`, `<layer>.1`, ... and are
//! returned in index order, stopping at the first missing index. The file
//! is memory-mapped; only the header is parsed on open, and tensor data is
//! decoded when a layer's blobs are requested.

use crate::{Blob, ModelError};
use safetensors::{Dtype, SafeTensors};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Name of the tensor preferred by [`WeightStore::mean_blob`].
const MEAN_TENSOR: &str = "mean";

enum Backing {
    Mapped(memmap2::Mmap),
    Owned(Vec<u8>),
}

impl Backing {
    fn bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Owned(buf) => buf.as_slice(),
        }
    }
}

/// Read-only view over a SafeTensors weight file.
pub struct WeightStore {
    path: PathBuf,
    backing: Backing,
    names: HashSet<String>,
}

impl WeightStore {
    /// Memory-maps `path` and parses its SafeTensors header.
    pub fn open(path: &Path) -> Result<Self, ModelError> {
        let file = std::fs::File::open(path)?;

        let mmap = unsafe { memmap2::Mmap::map(&file) }
            .map_err(|e| ModelError::SafeTensorsError(format!("mmap failed: {e}")))?;

        tracing::info!(
            "weights: mmap'd {} ({:.2} MB)",
            path.display(),
            mmap.len() as f64 / (1024.0 * 1024.0),
        );
        Self::with_backing(path.to_path_buf(), Backing::Mapped(mmap))
    }

    /// Wraps an in-memory SafeTensors buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ModelError> {
        Self::with_backing(PathBuf::from("<memory>"), Backing::Owned(bytes))
    }

    fn with_backing(path: PathBuf, backing: Backing) -> Result<Self, ModelError> {
        let names = parse(backing.bytes())?
            .names()
            .into_iter()
            .cloned()
            .collect();
        Ok(Self {
            path,
            backing,
            names,
        })
    }

    /// Number of tensors in the file.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Layer names that own at least one `<layer>.<index>` tensor, sorted.
    ///
    /// Tensors whose name has no numeric suffix (a mean tensor, say) are
    /// not attributed to any layer.
    pub fn layer_names(&self) -> Vec<String> {
        let layers: BTreeSet<&str> = self
            .names
            .iter()
            .filter_map(|name| name.rsplit_once('.'))
            .filter(|(layer, index)| !layer.is_empty() && index.parse::<usize>().is_ok())
            .map(|(layer, _)| layer)
            .collect();
        layers.into_iter().map(str::to_string).collect()
    }

    /// Decodes the blobs of `layer` in index order.
    ///
    /// Layers without weights yield an empty list.
    pub fn layer_blobs(&self, layer: &str) -> Result<Vec<Blob>, ModelError> {
        let tensors = parse(self.backing.bytes())?;
        let mut blobs = Vec::new();

        for index in 0.. {
            let name = format!("{layer}.{index}");
            if !self.names.contains(&name) {
                break;
            }
            blobs.push(decode(&tensors, &name)?);
        }

        Ok(blobs)
    }

    /// Returns the mean blob of a mean file.
    ///
    /// A tensor named `mean` is preferred; otherwise the file must hold
    /// exactly one tensor.
    pub fn mean_blob(&self) -> Result<Blob, ModelError> {
        let tensors = parse(self.backing.bytes())?;

        if self.names.contains(MEAN_TENSOR) {
            return decode(&tensors, MEAN_TENSOR);
        }

        let mut names = self.names.iter();
        match (names.next(), names.next()) {
            (Some(only), None) => decode(&tensors, only),
            _ => Err(ModelError::SafeTensorsError(format!(
                "'{}' must contain a '{MEAN_TENSOR}' tensor or exactly one tensor, found {}",
                self.path.display(),
                self.names.len(),
            ))),
        }
    }
}

impl std::fmt::Debug for WeightStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightStore")
            .field("path", &self.path)
            .field("tensors", &self.names.len())
            .finish()
    }
}

fn parse(bytes: &[u8]) -> Result<SafeTensors<'_>, ModelError> {
    SafeTensors::deserialize(bytes)
        .map_err(|e| ModelError::SafeTensorsError(format!("SafeTensors parse error: {e}")))
}

fn decode(tensors: &SafeTensors<'_>, name: &str) -> Result<Blob, ModelError> {
    let view = tensors
        .tensor(name)
        .map_err(|e| ModelError::SafeTensorsError(format!("tensor '{name}': {e}")))?;

    if view.dtype() != Dtype::F32 {
        return Err(ModelError::UnsupportedDtype {
            name: name.to_string(),
            dtype: format!("{:?}", view.dtype()),
        });
    }

    Ok(Blob::from_le_bytes(name, view.shape().to_vec(), view.data()))
}
