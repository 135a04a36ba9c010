// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for graph construction and DOT rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use layer_graph::NetGraph;

/// Builds a chain of conv/relu blocks where every ReLU writes in place.
fn build_chain(blocks: usize) -> NetGraph {
    let mut g = NetGraph::new();
    g.add_node("data", "Data");
    let mut prev = "data".to_string();
    for b in 0..blocks {
        let conv = format!("conv{b}");
        let relu = format!("relu{b}");
        g.add_node(&conv, "Convolution");
        g.connect(&prev, &conv);
        g.add_node(&relu, "ReLU");
        g.connect(&conv, &relu);
        g.connect(&relu, &conv);
        prev = conv;
    }
    g
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_chain_256", |b| b.iter(|| build_chain(black_box(256))));
}

fn bench_render(c: &mut Criterion) {
    let graph = build_chain(256);
    c.bench_function("to_dot_256", |b| b.iter(|| black_box(&graph).to_dot()));
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
