// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `net-inspect run` command: the full inspection pipeline.
//!
//! Prints the weight report (when weights are given) and the structure
//! report to stdout, extracts blobs, and writes the DOT script.

use inspector::{InspectConfig, Inspector};

pub fn execute(config: InspectConfig) -> anyhow::Result<()> {
    config.validate()?;
    tracing::debug!("{config:?}");

    let summary = {
        let mut out = std::io::stdout().lock();
        Inspector::new(config).run(&mut out)?
    };

    println!();
    println!("  {summary}");
    Ok(())
}
