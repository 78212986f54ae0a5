// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # reservation
//!
//! Reservation orchestration for the tiled memory container: validates
//! caller requests, asks the pack planner for candidate layouts, and
//! drives the winning candidate through the allocator — rolling back
//! cleanly when a commit only half succeeds.
//!
//! # Key Components
//!
//! - [`TilerBackend`] — the collaborator trait wrapping everything the
//!   core does not do itself: geometry, request normalization, the
//!   actual 2D/NV12 area commits, releases, and group bookkeeping.
//! - [`StagedAreas`] — a scoped rollback guard. Areas laid through it
//!   are released automatically unless explicitly committed to a group;
//!   an NV12 pair either lands both planes or neither.
//! - [`ReserveEngine`] — the orchestrator with the three entry points:
//!   [`reserve_nv12`](ReserveEngine::reserve_nv12),
//!   [`reserve_blocks`](ReserveEngine::reserve_blocks), and
//!   [`unreserve_blocks`](ReserveEngine::unreserve_blocks).
//! - [`ReserveStats`] — cumulative reservation metrics.
//! - [`SimTiler`] — a reference in-memory backend for tests and the CLI.
//!
//! # Ownership Model
//!
//! ```text
//! ReserveEngine::reserve_nv12()
//!       │
//!       ▼
//!   StagedAreas  ◄─── owns Vec<AreaHandle>, borrows the backend
//!       │
//!       ├─ commit(group)  ──► group's permanent reserved list
//!       │
//!       └─ drop()         ──► TilerBackend::release()
//! ```
//!
//! Entry points never fail: an invalid request is a logged no-op and a
//! commit shortfall simply returns fewer blocks than asked. The worst
//! case is "reserved fewer than requested" — an expected, observable
//! outcome (the return value and [`ReserveStats`] both show it).

mod backend;
mod config;
mod engine;
mod error;
pub mod sim;
mod staging;
mod stats;

pub use backend::{AreaHandle, ClientId, GroupHandle, GroupId, TilerBackend};
pub use config::SurfaceConfig;
pub use engine::{BlockRequest, Nv12Request, ReserveEngine};
pub use error::{ConfigError, LayoutError};
pub use sim::SimTiler;
pub use staging::StagedAreas;
pub use stats::ReserveStats;
