// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Graphviz DOT export.
//!
//! In-place nodes are never drawn as vertices. A layer that overwrites its
//! input buffer shows up as an annotation on the label of the node it
//! writes over:
//!
//! ```text
//!     conv1 [label=<<B>conv1</B><BR/>: relu1<BR align="left"/>
//! >]
//! ```

use crate::{GraphError, NetGraph};
use std::ffi::{OsStr, OsString};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const HEADER: &str = "digraph G{\n\n\
\tgraph[bgcolor = white,fontname=Courier,fontsize=8.0,labeljust=l,nojustify=true]\n\
\tnode[shape = box fillcolor = cyan style = \"filled\" fontcolor = black]\n\
\tedge[color = black]\n";

const FOOTER: &str = "}\n";

impl NetGraph {
    /// Renders the graph as DOT text.
    ///
    /// Nodes are emitted in insertion order; each non-in-place node gets
    /// one edge line per non-in-place sink followed by its label line.
    pub fn to_dot(&self) -> String {
        let mut out = String::from(HEADER);

        for (_, node) in self.nodes() {
            if node.is_inplace() {
                continue;
            }

            let mut label = format!("<B>{}</B><BR/>", node.name());
            for &sink_id in node.sinks() {
                let Some(sink) = self.get(sink_id) else {
                    continue;
                };
                if sink.is_inplace() {
                    let _ = write!(label, ": {}<BR align=\"left\"/>", sink.name());
                } else {
                    let _ = writeln!(out, "\t{}->{}", node.name(), sink.name());
                }
            }
            label.push('\n');

            let _ = writeln!(out, "\t{} [label=<{}>]", node.name(), label);
        }

        out.push_str(FOOTER);
        out
    }

    /// Writes the DOT script to `path`.
    ///
    /// The text goes to a temporary sibling first and is renamed over the
    /// destination, so a failed write leaves no partial file behind.
    pub fn generate_dot_script(&self, path: &Path) -> Result<(), GraphError> {
        let dot = self.to_dot();
        let tmp = temp_sibling(path);

        if let Err(source) = std::fs::write(&tmp, dot.as_bytes()) {
            let _ = std::fs::remove_file(&tmp);
            return Err(GraphError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        if let Err(source) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(GraphError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        tracing::info!("wrote {} ({})", path.display(), self.summary());
        Ok(())
    }
}

/// Hidden per-process sibling: `.<file>.<pid>.tmp`.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("graph.dot")));
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_lines(dot: &str) -> Vec<&str> {
        dot.lines().filter(|l| l.contains("->")).collect()
    }

    fn label_lines(dot: &str) -> Vec<&str> {
        dot.lines().filter(|l| l.contains("[label=<")).collect()
    }

    #[test]
    fn test_empty_graph() {
        let dot = NetGraph::new().to_dot();
        assert!(dot.starts_with("digraph G{\n\n\tgraph[bgcolor = white"));
        assert!(dot.ends_with("\tedge[color = black]\n}\n"));
    }

    #[test]
    fn test_conv_relu_scenario() {
        let mut g = NetGraph::new();
        g.add_node("conv1", "Convolution");
        g.add_node("relu1", "ReLU");
        g.connect("conv1", "relu1");

        let dot = g.to_dot();
        assert_eq!(edge_lines(&dot), ["\tconv1->relu1"]);
        assert_eq!(label_lines(&dot).len(), 2);
        assert!(!dot.contains(": "));
    }

    #[test]
    fn test_exact_output() {
        let mut g = NetGraph::new();
        g.add_node("conv1", "Convolution");
        g.add_node("relu1", "ReLU");
        g.connect("conv1", "relu1");

        let expected = "digraph G{\n\n\
\tgraph[bgcolor = white,fontname=Courier,fontsize=8.0,labeljust=l,nojustify=true]\n\
\tnode[shape = box fillcolor = cyan style = \"filled\" fontcolor = black]\n\
\tedge[color = black]\n\
\tconv1->relu1\n\
\tconv1 [label=<<B>conv1</B><BR/>\n>]\n\
\trelu1 [label=<<B>relu1</B><BR/>\n>]\n\
}\n";
        assert_eq!(g.to_dot(), expected);
    }

    #[test]
    fn test_inplace_node_becomes_annotation() {
        let mut g = NetGraph::new();
        g.connect("a", "b");
        g.connect("b", "a");

        let dot = g.to_dot();
        assert!(edge_lines(&dot).is_empty());
        assert_eq!(label_lines(&dot), ["\ta [label=<<B>a</B><BR/>: b<BR align=\"left\"/>"]);
        assert!(!dot.contains("\tb [label"));
    }

    #[test]
    fn test_edge_count_excludes_inplace_pairs() {
        let mut g = NetGraph::new();
        g.connect("data", "conv1");
        g.connect("conv1", "relu1");
        g.connect("relu1", "conv1");
        g.connect("conv1", "pool1");
        g.connect("pool1", "fc");

        // Pairs with neither side in-place: data->conv1, conv1->pool1, pool1->fc.
        let expected: usize = g
            .nodes()
            .filter(|(_, n)| !n.is_inplace())
            .map(|(_, n)| {
                n.sinks()
                    .iter()
                    .filter(|&&s| !g.get(s).unwrap().is_inplace())
                    .count()
            })
            .sum();
        let dot = g.to_dot();
        assert_eq!(expected, 3);
        assert_eq!(edge_lines(&dot).len(), expected);
        assert_eq!(label_lines(&dot).len(), g.len() - g.inplace_count());
    }

    #[test]
    fn test_sink_declaration_order() {
        let mut g = NetGraph::new();
        g.connect("split", "z");
        g.connect("split", "a");
        g.connect("split", "m");
        let dot = g.to_dot();
        assert_eq!(edge_lines(&dot), ["\tsplit->z", "\tsplit->a", "\tsplit->m"]);
    }

    #[test]
    fn test_generate_dot_script_writes_file() {
        let dir = std::env::temp_dir().join(format!("layer-graph-dot-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("graph_nn.dot");

        let mut g = NetGraph::new();
        g.connect("data", "conv1");
        g.generate_dot_script(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), g.to_dot());
        assert!(!temp_sibling(&path).exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_temp_sibling_name() {
        let tmp = temp_sibling(Path::new("/out/graph_nn.dot"));
        assert_eq!(
            tmp,
            PathBuf::from(format!("/out/.graph_nn.dot.{}.tmp", std::process::id()))
        );
    }

    #[test]
    fn test_generate_dot_script_keeps_user_tmp_file() {
        let dir = std::env::temp_dir().join(format!("layer-graph-usertmp-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("graph_nn.dot");
        let user_file = dir.join("graph_nn.dot.tmp");
        std::fs::write(&user_file, "keep me").unwrap();

        NetGraph::new().generate_dot_script(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&user_file).unwrap(), "keep me");
        assert!(path.is_file());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generate_dot_script_unwritable() {
        let path = std::env::temp_dir()
            .join("layer-graph-no-such-dir")
            .join("nested")
            .join("graph.dot");
        let err = NetGraph::new().generate_dot_script(&path).unwrap_err();
        assert!(matches!(err, GraphError::Write { .. }));
        assert!(!path.exists());
    }
}
