// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Butterfly pair packing: `AAbbaaBB`.
//!
//! Pairs grow inward from both ends of the area at once: a luma near the
//! start with its chroma past the midline, and a mirrored pair against
//! the end with its chroma at half its own offset. The feasible pair
//! count comes from a closed form over the area span and pitch, not from
//! a search.

use crate::strategy::{PairRequest, PairStrategy};
use crate::{PackedPair, Packing};
use tiler_geom::align_up;

/// Most pairs two inward-growing flanks can hold.
pub(crate) const MAX_BUTTERFLY: u16 = 20;

/// Alternating pairs from both ends of the area.
#[derive(Debug, Clone, Copy, Default)]
pub struct Butterfly;

impl Butterfly {
    pub fn new() -> Self {
        Self
    }
}

impl PairStrategy for Butterfly {
    fn name(&self) -> &'static str {
        "butterfly"
    }

    fn capacity(&self) -> u16 {
        MAX_BUTTERFLY
    }

    fn pack(&self, req: &PairRequest, n: u16) -> Packing {
        let PairRequest { offset, width, align, luma_band: area, .. } = *req;
        let mut packing = Packing::empty(area);

        let e = i32::from(align_up(width, align));
        let o = i32::from(offset);
        let w = i32::from(width);
        let ar = i32::from(area);
        // End of the last possible block, looking backward from the area.
        let o2 = ar - i32::from((align - (offset + width) % align) % align);

        // Both flanks advance together; the tighter of the two spans
        // bounds how many steps fit before they would meet.
        let span = (o2 - 2 * o).min(2 * o2 - o - ar);
        let m = (span / 3 - w) / e + 1;

        let mut i = 0;
        while i < m && packing.len() < n {
            let front = o + i * e;
            packing.pairs.push(PackedPair {
                luma: front as u16,
                chroma: ((front + ar) >> 1) as u16,
            });
            if packing.len() < n {
                let back = o2 - i * e - w;
                if back < 0 {
                    break;
                }
                packing.pairs.push(PackedPair {
                    luma: back as u16,
                    chroma: (back >> 1) as u16,
                });
            }
            i += 1;
        }
        packing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(offset: u16, width: u16, align: u16) -> PairRequest {
        PairRequest { offset, width, align, luma_band: 64, chroma_band: 64 }
    }

    #[test]
    fn test_flank_pairs() {
        // o=0, w=8, a=8, area 64: o2 = 64, span = min(64, 64) = 64,
        // m = (64/3 - 8)/8 + 1 = (21 - 8)/8 + 1 = 2.
        let p = Butterfly.pack(&req(0, 8, 8), 4);
        assert_eq!(p.len(), 4);
        // Front pairs at 0 and 8, chromas past the midline; back pairs
        // against the end.
        assert_eq!(p.pairs[0], PackedPair { luma: 0, chroma: 32 });
        assert_eq!(p.pairs[1], PackedPair { luma: 56, chroma: 28 });
        assert_eq!(p.pairs[2], PackedPair { luma: 8, chroma: 36 });
        assert_eq!(p.pairs[3], PackedPair { luma: 48, chroma: 24 });
        p.validate(8).unwrap();
    }

    #[test]
    fn test_odd_count() {
        // An odd request ends on a front pair; the count must match the
        // pairs actually placed.
        let p = Butterfly.pack(&req(0, 8, 8), 3);
        assert_eq!(p.len(), 3);
        assert_eq!(p.pairs.len(), 3);
        p.validate(8).unwrap();
    }

    #[test]
    fn test_single_pair() {
        let p = Butterfly.pack(&req(0, 8, 8), 1);
        assert_eq!(p.len(), 1);
        assert_eq!(p.pairs[0], PackedPair { luma: 0, chroma: 32 });
    }

    #[test]
    fn test_near_area_wide_block() {
        // w=60 leaves one flank step: a front pair and a back pair
        // tucked against the end of the area.
        let p = Butterfly.pack(&req(0, 60, 4), 2);
        assert_eq!(p.len(), 2);
        p.validate(60).unwrap();
    }

    #[test]
    fn test_oversized_block_rejected_downstream() {
        // A band-wide block at an odd offset produces a front placement
        // that escapes the area; containment validation (applied by the
        // selector) is what rules the layout out.
        let p = Butterfly.pack(&req(1, 64, 2), 2);
        assert!(p.validate(64).is_err());
    }

    #[test]
    fn test_containment_sweep() {
        for o in 0..4u16 {
            for w in 1..=16u16 {
                let p = Butterfly.pack(&req(o, w, 4), 20);
                p.validate(w).unwrap_or_else(|e| panic!("o={o} w={w}: {e}"));
            }
        }
    }
}
