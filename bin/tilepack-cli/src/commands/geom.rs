// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tilepack geom` — print the slot geometry table.

use reservation::{SimTiler, SurfaceConfig, TilerBackend};
use tiler_geom::{band_for, PixelFormat};

/// Prints slot width, bytes per pixel, and band for every format.
pub fn execute(config: &SurfaceConfig) -> anyhow::Result<()> {
    let tiler = SimTiler::from_config(config);
    let extents = config.extents();

    println!("container: {} × {} slots", extents.width, extents.height);
    println!("format  slot px  B/px  band slots");
    for format in PixelFormat::ALL {
        let g = tiler.geometry(format);
        println!(
            "{:<7} {:>7} {:>5} {:>11}",
            format.to_string(),
            g.slot_width,
            g.bytes_per_pixel,
            band_for(g),
        );
    }
    Ok(())
}
