// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! End-to-end inspection run.

use crate::{report_structure, report_weights, BlobExtractor, InspectConfig, InspectError};
use layer_graph::NetGraph;
use net_model::{NetDefinition, WeightStore};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

/// Outcome of an inspection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectSummary {
    pub layers: usize,
    pub nodes: usize,
    pub edges: usize,
    pub inplace_nodes: usize,
    /// Weight and mean blob files written.
    pub blobs_written: usize,
    /// Weight-file layers missing from the definition.
    pub undeclared_weight_layers: usize,
    pub dot_path: PathBuf,
}

impl fmt::Display for InspectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} layers → {} nodes, {} edges, {} in-place; {} blobs written; graph at {}",
            self.layers,
            self.nodes,
            self.edges,
            self.inplace_nodes,
            self.blobs_written,
            self.dot_path.display(),
        )?;
        if self.undeclared_weight_layers > 0 {
            write!(
                f,
                "; {} weight layers not in the definition",
                self.undeclared_weight_layers
            )?;
        }
        Ok(())
    }
}

/// Runs the reports, blob extraction and graph export for one model.
#[derive(Debug, Clone)]
pub struct Inspector {
    config: InspectConfig,
}

impl Inspector {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline, writing both reports to `out`.
    ///
    /// # Steps
    /// 1. Load and validate the network definition.
    /// 2. With weights configured: weight report plus blob extraction.
    /// 3. Structure report, building the layer graph.
    /// 4. DOT export.
    /// 5. With a mean file configured: mean blob extraction.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<InspectSummary, InspectError> {
        let cfg = &self.config;

        let net = NetDefinition::from_file(&cfg.net_path)?;
        net.validate()?;
        tracing::info!(
            "loaded '{}' from {} ({} layers)",
            net.name,
            cfg.net_path.display(),
            net.layers.len(),
        );

        let extractor = cfg
            .extract_blobs
            .then(|| BlobExtractor::new(&cfg.output_dir));
        std::fs::create_dir_all(&cfg.output_dir).map_err(|source| InspectError::ExtractError {
            path: cfg.output_dir.clone(),
            source,
        })?;

        let mut blobs_written = 0;
        let mut undeclared_weight_layers = 0;

        if let Some(weights_path) = &cfg.weights_path {
            let store = WeightStore::open(weights_path)?;
            writeln!(out, "from: {}\n", weights_path.display())?;
            let report = report_weights(&net, &store, extractor.as_ref(), out)?;
            blobs_written += report.blobs_written;
            undeclared_weight_layers = report.undeclared_layers;
            write!(out, "\n\n")?;
        }

        writeln!(out, "from: {}\n", cfg.net_path.display())?;
        let mut graph = NetGraph::new();
        report_structure(&net, &mut graph, out)?;

        let dot_path = cfg.dot_path();
        graph.generate_dot_script(&dot_path)?;

        if let Some(mean_path) = &cfg.mean_path {
            let mean = WeightStore::open(mean_path)?.mean_blob()?;
            if BlobExtractor::extract_mean(mean_path, &mean)?.is_some() {
                blobs_written += 1;
            }
        }

        let summary = InspectSummary {
            layers: net.layers.len(),
            nodes: graph.len(),
            edges: graph.edge_count(),
            inplace_nodes: graph.inplace_count(),
            blobs_written,
            undeclared_weight_layers,
            dot_path,
        };
        tracing::info!("{summary}");
        Ok(summary)
    }
}
