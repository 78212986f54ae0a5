// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Separate-area planning for NV12 pairs.
//!
//! Instead of sharing one area, the 8-bit plane and the half-resolution
//! 16-bit plane each get their own uniform-stride run. A commit needs
//! equal counts on both planes, so the luma scan's count bounds the
//! chroma scan.

use crate::pack::Candidate;
use crate::scan::widest_uniform_run;
use crate::strategy::PairRequest;
use tiler_geom::align_up;

/// Plans matching per-plane runs for up to `n` NV12 pairs.
///
/// The area reported is three times the last successful scan's area: one
/// full luma area plus the quarter-sized chroma area, folded into a
/// single figure the ranking step can compare against co-packed
/// candidates. When neither plane fits a single block, the count passes
/// through unchanged with a zero area — such a candidate ranks below
/// everything and the subsequent commit attempt fails cleanly.
pub fn plan_separate(req: &PairRequest, n: u16, container_width: u16) -> Candidate {
    let PairRequest { offset, width, align, luma_band, chroma_band } = *req;
    let pitch = align_up(width, align);

    let mut count = n;
    let mut area = 0;
    if let Some(run) = widest_uniform_run(offset, width, pitch, luma_band, count, container_width)
    {
        count = run.count;
        area = run.area;
    }
    if let Some(run) = widest_uniform_run(
        offset / 2,
        (width + 1) / 2,
        pitch / 2,
        chroma_band,
        count,
        container_width,
    ) {
        count = run.count;
        area = run.area;
    }

    Candidate { count, area: area.saturating_mul(3), packing: None }
}
