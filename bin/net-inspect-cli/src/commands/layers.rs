// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `net-inspect layers` command: per-layer table of kinds and connections.

use super::truncate;
use anyhow::Context;
use inspector::InspectConfig;
use net_model::NetDefinition;

pub fn execute(config: InspectConfig) -> anyhow::Result<()> {
    let net = NetDefinition::from_file(&config.net_path).with_context(|| {
        format!("failed to load network from '{}'", config.net_path.display())
    })?;
    net.validate()?;
    let graph = inspector::build_graph(&net);

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              net-inspect · Layer Table              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Network: {}", net.name);
    println!("  Layers:  {} ({} in-place)", net.layers.len(), net.inplace_layer_count());
    println!("  Graph:   {}", graph.summary());
    println!();

    println!(
        "  {:<4} {:<24} {:<14} {:<24} {:<24} {:>8}",
        "Idx", "Name", "Type", "Inputs", "Outputs", "In-place",
    );
    println!("  {}", "-".repeat(103));

    for (i, layer) in net.layers.iter().enumerate() {
        let in_place = graph
            .node(&layer.name)
            .map(|n| n.is_inplace())
            .unwrap_or(false);
        println!(
            "  {:<4} {:<24} {:<14} {:<24} {:<24} {:>8}",
            i,
            truncate(&layer.name, 24),
            truncate(&layer.layer_type, 14),
            truncate(&layer.inputs.join(","), 24),
            truncate(&layer.outputs.join(","), 24),
            if in_place { "yes" } else { "" },
        );
    }

    let placeholders: Vec<_> = graph
        .nodes()
        .filter(|(_, n)| net.layers.iter().all(|l| l.name != n.name()))
        .map(|(_, n)| n.name())
        .collect();
    if !placeholders.is_empty() {
        println!();
        println!("  Undeclared tensors: {}", placeholders.join(", "));
    }
    println!();
    Ok(())
}
