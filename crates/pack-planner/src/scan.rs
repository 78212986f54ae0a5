// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Uniform-stride run scanning.
//!
//! A 2D hardware area hosts several same-size blocks only if one row
//! pitch works for all of them: for every block in the run, the stride
//! implied by that block's extent must equal the stride of a single
//! block, `align(offset + width, band)`. The scan walks candidate counts
//! upward while that holds and keeps the densest prefix.

use tiler_geom::align_up;

/// Result of a uniform-stride scan: the chosen run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackRun {
    /// Number of blocks in the run.
    pub count: u16,
    /// Width of the area holding the run, in slots.
    pub area: u16,
    /// Packing density of the run, in 1/1024ths of the area width.
    pub efficiency: u32,
}

/// Finds the densest run of blocks placed at `offset, offset + pitch,
/// offset + 2·pitch, …` that a single fixed-stride area can host.
///
/// * `offset` — start offset of the first block, in slots.
/// * `width` — block width in slots (`> 0`).
/// * `pitch` — repeat distance: the block width rounded up to its
///   alignment.
/// * `band` — slots per page row; strides round up to this.
/// * `limit` — upper bound on the run length.
/// * `container_width` — every block must end inside this.
///
/// The run kept is the one maximizing `count · width / area`, not simply
/// the longest: once the area grows past a band boundary, a longer run
/// can waste more than it adds. Returns `None` when not even a single
/// block fits, so callers keep whatever bound they had.
pub fn widest_uniform_run(
    offset: u16,
    width: u16,
    pitch: u16,
    band: u16,
    limit: u16,
    container_width: u16,
) -> Option<PackRun> {
    // Arithmetic runs in u32: near the top of the u16 range the aligned
    // area of a block past the container end would wrap.
    let (offset, width, pitch, band) =
        (u32::from(offset), u32::from(width), u32::from(pitch), u32::from(band));
    let align32 = |v: u32| v.div_ceil(band) * band;

    let stride = align32(offset + width);
    let mut area = stride;
    let mut best: Option<PackRun> = None;
    let mut m: u32 = 0;

    while m < u32::from(limit)
        && offset + m * pitch + width <= u32::from(container_width)
        && stride == align32(area - offset - m * pitch)
        && area <= u32::from(u16::MAX)
    {
        m += 1;
        let eff = m * width * 1024 / area;
        if best.map_or(true, |b| eff > b.efficiency) {
            best = Some(PackRun { count: m as u16, area: area as u16, efficiency: eff });
        }
        area = align32(offset + m * pitch + width);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_single_block() {
        // One 8-wide block at offset 0, band 64: area is one band.
        let run = widest_uniform_run(0, 8, 8, 64, 1, 256).unwrap();
        assert_eq!(run.count, 1);
        assert_eq!(run.area, 64);
        assert_eq!(run.efficiency, 8 * 1024 / 64);
    }

    #[test]
    fn test_full_band() {
        // 8 blocks of width 8 fill one 64-slot band exactly.
        let run = widest_uniform_run(0, 8, 8, 64, 8, 256).unwrap();
        assert_eq!(run.count, 8);
        assert_eq!(run.area, 64);
        assert_eq!(run.efficiency, 1024);
    }

    #[test]
    fn test_limit_caps_run() {
        let run = widest_uniform_run(0, 8, 8, 64, 3, 256).unwrap();
        assert_eq!(run.count, 3);
    }

    #[test]
    fn test_container_caps_run() {
        // Container of 64 slots: blocks at 0, 16, 32, 48 fit, a fifth
        // would end at 80.
        let run = widest_uniform_run(0, 16, 16, 64, 10, 64).unwrap();
        assert_eq!(run.count, 4);
        assert_eq!(run.area, 64);
    }

    #[test]
    fn test_does_not_fit() {
        // Even one block is wider than the container.
        assert!(widest_uniform_run(0, 80, 80, 64, 4, 64).is_none());
    }

    #[test]
    fn test_stride_break_stops_scan() {
        // Width 24 at pitch 24, band 64: the third block ends at 72 and
        // would need a 128-wide area whose stride no longer matches.
        let run = widest_uniform_run(0, 24, 24, 64, 3, 256).unwrap();
        assert_eq!(run.count, 2);
        assert_eq!(run.area, 64);
    }

    #[test]
    fn test_density_beats_length() {
        // Width 20 at pitch 32, band 64: two blocks fit one band
        // (density 640/1024); a third pushes the area to 128 with
        // density only 480/1024 even though its stride still matches.
        let run = widest_uniform_run(0, 20, 32, 64, 3, 512).unwrap();
        assert_eq!(run.count, 2);
        assert_eq!(run.area, 64);
        assert_eq!(run.efficiency, 2 * 20 * 1024 / 64);
    }

    #[test]
    fn test_uniform_stride_invariant() {
        // For every block in the claimed run, the stride implied by that
        // block's extent equals the single-block stride.
        let mut rng = StdRng::seed_from_u64(0x7e5);
        for _ in 0..1000 {
            let band = [4u16, 8, 16, 32, 64][rng.gen_range(0..5)];
            let align = [1u16, 2, 4, 8][rng.gen_range(0..4)];
            let width: u16 = rng.gen_range(1..=48);
            let offset = rng.gen_range(0..align);
            let pitch = tiler_geom::align_up(width, align);
            let container: u16 = rng.gen_range(32..=512);

            let Some(run) = widest_uniform_run(offset, width, pitch, band, 16, container) else {
                continue;
            };
            let stride = tiler_geom::align_up(offset + width, band);
            for m in 0..run.count {
                let end = offset + m * pitch + width;
                assert!(
                    end <= container,
                    "block {m}/{} ends at {end}, outside container {container}",
                    run.count,
                );
                let block_area = tiler_geom::align_up(end, band);
                assert_eq!(
                    stride,
                    tiler_geom::align_up(block_area - offset - m * pitch, band),
                    "block {m}/{} breaks the uniform stride", run.count,
                );
            }
        }
    }
}
