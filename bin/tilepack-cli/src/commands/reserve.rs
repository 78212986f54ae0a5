// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tilepack reserve` — simulate an NV12 reservation end to end.

use reservation::{ClientId, GroupId, Nv12Request, ReserveEngine, SimTiler, SurfaceConfig};

/// Runs one NV12 reservation against a fresh in-memory container and
/// reports what the engine committed.
pub fn execute(
    config: &SurfaceConfig,
    count: u32,
    width: u32,
    height: u32,
    align: u32,
    offset: u32,
    copack: bool,
) -> anyhow::Result<()> {
    let extents = config.extents();
    tracing::info!(
        "simulating on a {}×{} slot container",
        extents.width,
        extents.height
    );

    let mut engine = ReserveEngine::new(SimTiler::from_config(config));
    let request = Nv12Request {
        count,
        width,
        height,
        align,
        offset,
        group: GroupId(1),
        copack,
    };
    let reserved = engine.reserve_nv12(ClientId(1), &request);

    println!("reserved {reserved}/{count} pair(s)");
    println!("{}", engine.stats().summary());
    let backend = engine.backend();
    println!(
        "container: {}/{} slots used across {} area(s)",
        backend.used_slots(),
        extents.slots(),
        backend.live_areas(),
    );

    if reserved < count {
        println!("note: shortfalls are expected outcomes, not errors — \
                  earlier areas stay reserved");
    }
    Ok(())
}
