// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # net-model
//!
//! Loading of layered network descriptions and their trained weights.
//!
//! - [`NetDefinition`]: the network structure: an ordered list of
//!   [`LayerRecord`]s, each with a name, a type string, and the names of
//!   the tensors it reads (`inputs`) and writes (`outputs`).
//! - [`WeightStore`]: trained blobs from a SafeTensors file, addressed
//!   per layer as `<layer>.<index>`.
//! - [`Blob`]: one decoded f32 weight array with its shape.
//!
//! # Supported Format
//! - `net.json`: the network definition (Caffe's `bottom`/`top`
//!   spellings are accepted for `inputs`/`outputs`).
//! - `weights.safetensors`: blobs named `conv1.0`, `conv1.1`, ...
//!
//! # Example
//! ```no_run
//! use net_model::{NetDefinition, WeightStore};
//! use std::path::Path;
//!
//! let net = NetDefinition::from_file(Path::new("./models/lenet/net.json")).unwrap();
//! let store = WeightStore::open(Path::new("./models/lenet/weights.safetensors")).unwrap();
//! for layer in &net.layers {
//!     let blobs = store.layer_blobs(&layer.name).unwrap();
//!     println!("{}: {} blobs", layer.name, blobs.len());
//! }
//! ```

mod blob;
mod error;
mod net;
mod weights;

pub use blob::Blob;
pub use error::ModelError;
pub use net::{ConvolutionParam, LayerRecord, NetDefinition};
pub use weights::WeightStore;
