// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pack-planner
//!
//! Layout planning for a tiled memory container: given a block's slot
//! offset, width, and alignment, decide how many blocks fit where.
//!
//! Two families of plans are produced:
//!
//! - **Uniform-stride runs** ([`widest_uniform_run`]) — how many
//!   same-size blocks can sit next to each other at one fixed row pitch.
//!   Used both for generic 2D batches and for the per-plane halves of an
//!   NV12 surface.
//! - **Pair co-packing** ([`pack_pairs`]) — interleaving the 8-bit luma
//!   and 16-bit chroma blocks of NV12 pairs inside one shared area.
//!
//! # Strategies
//!
//! Co-packing tries a fixed roster of strategies, cheapest area first:
//!
//! | Strategy | Shape | Max pairs |
//! |---|---|---|
//! | [`Progressive`] | `AAAAaaaaBBbbCc` | 21 |
//! | [`Mirrored`] | `cCbbBBaaaaAAAA` | 21 |
//! | [`Diagonal`] | `aAbcBdeCfgDhEFGH` | 8 |
//! | [`Butterfly`] | `AAbbaaBB` | 20 |
//! | [`WidePair`] | `aA` / `Aa` | 1 |
//!
//! plus a table of [`presets`] for parameter classes the closed-form
//! strategies handle poorly. All strategies implement [`PairStrategy`],
//! so the selection loop ([`pack_pairs`]) is written once.
//!
//! Everything here is pure integer work over slot units: no allocation
//! failures, no I/O, no shared state. Infeasible layouts come back as
//! empty packings or zero-count candidates, never as errors.
//!
//! # Example
//! ```
//! use pack_planner::{pack_pairs, PairRequest};
//!
//! let req = PairRequest { offset: 0, width: 8, align: 8, luma_band: 64, chroma_band: 64 };
//! let cand = pack_pairs(&req, 4);
//! assert_eq!(cand.count, 4);
//! let packing = cand.packing.unwrap();
//! packing.validate(req.width).unwrap();
//! ```

mod error;
mod pack;
pub mod presets;
mod scan;
mod select;
mod separate;
pub mod strategy;

pub use error::PackError;
pub use pack::{Candidate, PackedPair, Packing};
pub use scan::{widest_uniform_run, PackRun};
pub use select::{efficiency, pack_pairs};
pub use separate::plan_separate;
pub use strategy::butterfly::Butterfly;
pub use strategy::diagonal::Diagonal;
pub use strategy::mirrored::Mirrored;
pub use strategy::progressive::Progressive;
pub use strategy::wide::WidePair;
pub use strategy::{PairRequest, PairStrategy};
