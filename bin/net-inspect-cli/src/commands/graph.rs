// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `net-inspect graph` command: write the layer graph as a DOT script.

use anyhow::Context;
use inspector::InspectConfig;
use net_model::NetDefinition;

pub fn execute(config: InspectConfig) -> anyhow::Result<()> {
    let net = NetDefinition::from_file(&config.net_path).with_context(|| {
        format!("failed to load network from '{}'", config.net_path.display())
    })?;
    net.validate()?;

    let graph = inspector::build_graph(&net);
    let dot_path = config.dot_path();
    graph.generate_dot_script(&dot_path)?;

    println!("  Network:  {}", net.name);
    println!("  Layers:   {}", net.layers.len());
    println!("  Graph:    {}", graph.summary());
    println!("  Written:  {}", dot_path.display());
    Ok(())
}
