// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Textual reports over a network definition.
//!
//! Weight report, one line per layer:
//! ```text
//! Layer 01: conv1 [20,1,5,5] 'conv1.0.bin' (500) [20] 'conv1.1.bin' (20)
//! ```
//!
//! Structure report, the connections of a layer followed by its header:
//! ```text
//! data -> conv1, conv1 -> conv1,
//! Layer 01: conv1 'Convolution'  {params: o=20, k=5, s=1}
//! ```

use crate::{BlobExtractor, InspectError};
use layer_graph::NetGraph;
use net_model::{LayerRecord, NetDefinition, WeightStore};
use std::collections::HashSet;
use std::io::Write;

/// Outcome of [`report_weights`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightReport {
    /// Blob files written.
    pub blobs_written: usize,
    /// Weight-file layers with no record in the definition.
    pub undeclared_layers: usize,
}

/// Prints the blobs of every layer and extracts them when an extractor is given.
///
/// Declared layers come first, in definition order. Layers that only exist
/// in the weight file follow in name order, numbered on from the last
/// declared layer.
pub fn report_weights<W: Write>(
    net: &NetDefinition,
    store: &WeightStore,
    extractor: Option<&BlobExtractor>,
    out: &mut W,
) -> Result<WeightReport, InspectError> {
    let mut report = WeightReport::default();

    for (l, layer) in net.layers.iter().enumerate() {
        report.blobs_written += report_layer(l, &layer.name, store, extractor, out)?;
    }

    let declared: HashSet<&str> = net.layers.iter().map(|l| l.name.as_str()).collect();
    let undeclared = store
        .layer_names()
        .into_iter()
        .filter(|name| !declared.contains(name.as_str()));
    for (l, name) in (net.layers.len()..).zip(undeclared) {
        tracing::warn!("weights hold layer '{name}' missing from '{}'", net.name);
        report.blobs_written += report_layer(l, &name, store, extractor, out)?;
        report.undeclared_layers += 1;
    }

    Ok(report)
}

fn report_layer<W: Write>(
    l: usize,
    name: &str,
    store: &WeightStore,
    extractor: Option<&BlobExtractor>,
    out: &mut W,
) -> Result<usize, InspectError> {
    let mut written = 0;
    write!(out, "Layer {l:02}: {name} ")?;

    for blob in store.layer_blobs(name)? {
        write!(out, "{} ", blob.shape_string())?;
        if blob.is_empty() {
            continue;
        }
        match extractor.map(|x| x.extract(&blob)).transpose()?.flatten() {
            Some(path) => {
                let file = path.file_name().map(|f| f.to_string_lossy().into_owned());
                write!(
                    out,
                    "'{}' ({}) ",
                    file.unwrap_or_default(),
                    blob.num_elements()
                )?;
                written += 1;
            }
            None => write!(out, "({}) ", blob.num_elements())?,
        }
    }

    writeln!(out)?;
    Ok(written)
}

/// Feeds every layer into `graph` and prints its connections.
///
/// Each layer is declared first, then connected from each of its inputs
/// and to each of its outputs, in declaration order.
pub fn report_structure<W: Write>(
    net: &NetDefinition,
    graph: &mut NetGraph,
    out: &mut W,
) -> Result<(), InspectError> {
    for (l, layer) in net.layers.iter().enumerate() {
        add_layer(graph, layer);

        for input in &layer.inputs {
            write!(out, "{input} -> {}, ", layer.name)?;
        }
        for output in &layer.outputs {
            write!(out, "{} -> {output}, ", layer.name)?;
        }
        if !layer.inputs.is_empty() || !layer.outputs.is_empty() {
            writeln!(out)?;
        }

        write!(out, "Layer {l:02}: {} '{}' ", layer.name, layer.layer_type)?;
        if let Some(conv) = &layer.convolution_param {
            write!(
                out,
                " {{params: o={}, k={}, s={}}} ",
                conv.num_output,
                conv.kernel(),
                conv.stride()
            )?;
        }
        writeln!(out)?;
    }

    tracing::info!("graph built from '{}': {}", net.name, graph.summary());
    Ok(())
}

/// Builds the layer graph without printing anything.
pub fn build_graph(net: &NetDefinition) -> NetGraph {
    let mut graph = NetGraph::new();
    for layer in &net.layers {
        add_layer(&mut graph, layer);
    }
    graph
}

fn add_layer(graph: &mut NetGraph, layer: &LayerRecord) {
    graph.add_node(&layer.name, &layer.layer_type);
    for input in &layer.inputs {
        graph.connect(input, &layer.name);
    }
    for output in &layer.outputs {
        graph.connect(&layer.name, output);
    }
}
