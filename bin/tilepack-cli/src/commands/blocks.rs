// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tilepack blocks` — simulate a generic 2D block reservation.

use reservation::{BlockRequest, ClientId, GroupId, ReserveEngine, SimTiler, SurfaceConfig};
use tiler_geom::PixelFormat;

/// Runs one same-format block reservation against a fresh in-memory
/// container and reports what the engine committed.
pub fn execute(
    config: &SurfaceConfig,
    count: u32,
    format: &str,
    width: u32,
    height: u32,
    align: u32,
    offset: u32,
) -> anyhow::Result<()> {
    let format: PixelFormat = format.parse()?;
    let extents = config.extents();
    tracing::info!(
        "simulating on a {}×{} slot container",
        extents.width,
        extents.height
    );

    let mut engine = ReserveEngine::new(SimTiler::from_config(config));
    let request = BlockRequest {
        count,
        format,
        width,
        height,
        align,
        offset,
        group: GroupId(1),
    };
    let reserved = engine.reserve_blocks(ClientId(1), &request);

    println!("reserved {reserved}/{count} {format} block(s)");
    println!("{}", engine.stats().summary());
    let backend = engine.backend();
    println!(
        "container: {}/{} slots used across {} area(s)",
        backend.used_slots(),
        extents.slots(),
        backend.live_areas(),
    );
    Ok(())
}
