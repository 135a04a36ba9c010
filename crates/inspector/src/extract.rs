// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Blob extraction to raw binary files.
//!
//! Each blob is written as packed little-endian f32 values with no header,
//! to `<output_dir>/<blob name>.bin` (`conv1.0.bin`, `conv1.1.bin`, ...).

use crate::InspectError;
use net_model::Blob;
use std::path::{Path, PathBuf};

/// Writes weight blobs into an output directory.
#[derive(Debug, Clone)]
pub struct BlobExtractor {
    output_dir: PathBuf,
}

impl BlobExtractor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Target path for a blob.
    pub fn blob_path(&self, blob: &Blob) -> PathBuf {
        self.output_dir.join(format!("{}.bin", blob.name))
    }

    /// Writes `blob` to its target path.
    ///
    /// Empty blobs are skipped and yield `None`.
    pub fn extract(&self, blob: &Blob) -> Result<Option<PathBuf>, InspectError> {
        let path = self.blob_path(blob);
        write_blob(&path, blob).map(|written| written.then_some(path))
    }

    /// Writes the mean blob next to its source file as `<mean file>.bin`.
    pub fn extract_mean(mean_path: &Path, blob: &Blob) -> Result<Option<PathBuf>, InspectError> {
        let mut name = mean_path.as_os_str().to_os_string();
        name.push(".bin");
        let path = PathBuf::from(name);
        write_blob(&path, blob).map(|written| written.then_some(path))
    }
}

fn write_blob(path: &Path, blob: &Blob) -> Result<bool, InspectError> {
    if blob.is_empty() {
        tracing::debug!("skipping empty blob '{}'", blob.name);
        return Ok(false);
    }

    std::fs::write(path, blob.to_le_bytes()).map_err(|source| InspectError::ExtractError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("extracted {} → {}", blob, path.display());
    Ok(true)
}
