// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod graph;
pub mod layers;
pub mod run;

use anyhow::Context;
use inspector::InspectConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the TOML config, if one was given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<InspectConfig>> {
    path.map(|p| {
        InspectConfig::from_file(p)
            .with_context(|| format!("failed to load config '{}'", p.display()))
    })
    .transpose()
}

/// Resolves the network path from the CLI flag or the config file.
pub fn with_net(base: Option<InspectConfig>, net: Option<PathBuf>) -> anyhow::Result<InspectConfig> {
    match (base, net) {
        (Some(mut config), Some(net)) => {
            config.net_path = net;
            Ok(config)
        }
        (Some(config), None) => Ok(config),
        (None, Some(net)) => Ok(InspectConfig::for_net(net)),
        (None, None) => anyhow::bail!("no network definition given; pass --net or --config"),
    }
}

/// Truncates a string to `max_len` with ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_net_flag_overrides_config() {
        let base = InspectConfig::for_net("from_config.json");
        let c = with_net(Some(base), Some("flag.json".into())).unwrap();
        assert_eq!(c.net_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_with_net_requires_source() {
        assert!(with_net(None, None).is_err());
        let c = with_net(None, Some("net.json".into())).unwrap();
        assert_eq!(c, InspectConfig::for_net("net.json"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("conv1", 10), "conv1");
        assert_eq!(truncate("a_very_long_layer_name", 10), "a_very_...");
    }
}
