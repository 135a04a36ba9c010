// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Inspection configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! net_path = "./models/lenet/net.json"
//! weights_path = "./models/lenet/weights.safetensors"
//! mean_path = "./models/lenet/mean.safetensors"
//! output_dir = "./out"
//! dot_file = "graph_nn.dot"
//! extract_blobs = true
//! ```

use crate::InspectError;
use std::path::{Path, PathBuf};

/// Configuration for an inspection run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InspectConfig {
    /// Network definition (JSON).
    pub net_path: PathBuf,
    /// Trained weights (SafeTensors). The weight report is skipped without it.
    #[serde(default)]
    pub weights_path: Option<PathBuf>,
    /// Mean blob (SafeTensors), extracted next to itself as `<file>.bin`.
    #[serde(default)]
    pub mean_path: Option<PathBuf>,
    /// Directory for extracted blobs and the DOT script.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// DOT script file name, relative to `output_dir` unless absolute.
    #[serde(default = "default_dot_file")]
    pub dot_file: PathBuf,
    /// Whether weight blobs are written to disk.
    #[serde(default = "default_true")]
    pub extract_blobs: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_dot_file() -> PathBuf {
    PathBuf::from("graph_nn.dot")
}

fn default_true() -> bool {
    true
}

impl InspectConfig {
    /// Creates a configuration for `net_path` with defaults for everything else.
    pub fn for_net(net_path: impl Into<PathBuf>) -> Self {
        Self {
            net_path: net_path.into(),
            ..Default::default()
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, InspectError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            InspectError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, InspectError> {
        toml::from_str(toml_str)
            .map_err(|e| InspectError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, InspectError> {
        toml::to_string_pretty(self)
            .map_err(|e| InspectError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Resolved path of the DOT script.
    pub fn dot_path(&self) -> PathBuf {
        self.output_dir.join(&self.dot_file)
    }

    /// Checks that the configured inputs exist.
    pub fn validate(&self) -> Result<(), InspectError> {
        let inputs = std::iter::once(&self.net_path)
            .chain(self.weights_path.iter())
            .chain(self.mean_path.iter());
        for path in inputs {
            if !path.is_file() {
                return Err(InspectError::ConfigError(format!(
                    "input file '{}' does not exist",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            net_path: PathBuf::from("net.json"),
            weights_path: None,
            mean_path: None,
            output_dir: default_output_dir(),
            dot_file: default_dot_file(),
            extract_blobs: true,
        }
    }
}
