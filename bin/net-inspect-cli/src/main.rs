// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # net-inspect
//!
//! Command-line model inspector: layer dependency report, weight blob
//! extraction, and Graphviz export of the layer graph.
//!
//! ## Usage
//! ```bash
//! # Full inspection: weight report, structure report, blobs, DOT script
//! net-inspect run --net ./lenet/net.json --weights ./lenet/weights.safetensors \
//!     --mean ./lenet/mean.safetensors --output-dir ./out
//!
//! # Graph only
//! net-inspect graph --net ./lenet/net.json --dot lenet.dot
//!
//! # Layer table
//! net-inspect layers --net ./lenet/net.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "net-inspect",
    about = "Inspect layered network models: dependency report and graph export",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weight and structure reports, extract blobs, write the graph.
    Run {
        /// Network definition (JSON).
        #[arg(short, long)]
        net: Option<PathBuf>,

        /// Trained weights (SafeTensors).
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Mean blob (SafeTensors), extracted to `<file>.bin`.
        #[arg(short, long)]
        mean: Option<PathBuf>,

        /// Directory for extracted blobs and the DOT script.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// DOT script file name.
        #[arg(short, long)]
        dot: Option<PathBuf>,

        /// Report blobs without writing them to disk.
        #[arg(long)]
        no_extract: bool,
    },

    /// Build the layer graph and write it as a DOT script.
    Graph {
        /// Network definition (JSON).
        #[arg(short, long)]
        net: Option<PathBuf>,

        /// Output DOT file.
        #[arg(short, long)]
        dot: Option<PathBuf>,
    },

    /// Print a table of layers with their connections.
    Layers {
        /// Network definition (JSON).
        #[arg(short, long)]
        net: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let base = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            net,
            weights,
            mean,
            output_dir,
            dot,
            no_extract,
        } => {
            let mut config = commands::with_net(base, net)?;
            if weights.is_some() {
                config.weights_path = weights;
            }
            if mean.is_some() {
                config.mean_path = mean;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(dot) = dot {
                config.dot_file = dot;
            }
            if no_extract {
                config.extract_blobs = false;
            }
            commands::run::execute(config)
        }
        Commands::Graph { net, dot } => {
            let mut config = commands::with_net(base, net)?;
            if let Some(dot) = dot {
                config.dot_file = dot;
            }
            commands::graph::execute(config)
        }
        Commands::Layers { net } => commands::layers::execute(commands::with_net(base, net)?),
    }
}
