// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Diagonal pair packing: `aAbcBdeCfgDhEFGH`.
//!
//! Lumas repeat at the alignment stride with each chroma at exactly half
//! its luma's offset. Valid only when four offset comparisons prove that
//! no half-resolution copy can overlap a luma block; when they fail the
//! strategy places nothing rather than guess.

use crate::strategy::{PairRequest, PairStrategy};
use crate::{PackedPair, Packing};

/// Most pairs the alignment stride fits in one area.
pub(crate) const MAX_DIAGONAL: u16 = 8;

/// Fixed-stride packing with chromas at half offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagonal;

impl Diagonal {
    pub fn new() -> Self {
        Self
    }
}

impl PairStrategy for Diagonal {
    fn name(&self) -> &'static str {
        "diagonal"
    }

    fn capacity(&self) -> u16 {
        MAX_DIAGONAL
    }

    fn pack(&self, req: &PairRequest, n: u16) -> Packing {
        let PairRequest { offset, width: w, align: a, luma_band: area, .. } = *req;
        let mut packing = Packing::empty(area);

        let e = (offset + w) % a; // end offset
        let o1 = (offset >> 1) % a; // half offset
        let e1 = ((offset + w + 1) >> 1) % a; // half end offset
        let o2 = o1 + (a >> 2); // 2nd half offset
        let e2 = e1 + (a >> 2); // 2nd half end offset

        // A chroma run must sit clear of the luma run: the width cannot
        // wrap the alignment, the half block must end before the luma
        // starts, and the 2nd half must fall entirely before or after it.
        if w < a && offset < e && e1 <= offset && (e2 <= offset || o2 >= e) {
            let mut o = offset;
            while o + w <= area && packing.len() < n {
                packing.pairs.push(PackedPair { luma: o, chroma: o >> 1 });
                o += a;
            }
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
    fn test_feasible_layout() {
        // o=8, w=4, a=16: e=12, e1=6≤8, o1=4, o2=8, e2=10 ≥ o=8? e2<=o
        // fails (10>8) but o2>=e fails too (8<12) → infeasible. Use a
        // combination that passes: o=12, w=2, a=16 → e=14, e1=7≤12,
        // o1=6, o2=10, e2=11: e2<=12 ✓.
        let p = Diagonal.pack(&req(12, 2, 16), 4);
        assert_eq!(p.len(), 4);
        // Lumas at 12, 28, 44, 60; chromas at half.
        let lumas: Vec<u16> = p.pairs.iter().map(|x| x.luma).collect();
        assert_eq!(lumas, vec![12, 28, 44, 60]);
        for pair in &p.pairs {
            assert_eq!(pair.chroma, pair.luma >> 1);
        }
        p.validate(2).unwrap();
    }

    #[test]
    fn test_width_wrapping_alignment_rejected() {
        // w >= a: can't interleave chromas at the stride.
        let p = Diagonal.pack(&req(0, 8, 8), 4);
        assert!(p.is_empty());
    }

    #[test]
    fn test_zero_offset_rejected() {
        // o=0 means e=w%a and o<e... but the half-block test e1<=o can
        // never pass with w>0.
        let p = Diagonal.pack(&req(0, 4, 16), 4);
        assert!(p.is_empty());
    }

    #[test]
    fn test_count_limited_by_area() {
        // Stride 16 in a 64-slot area: at most 4 lumas; asking for 8
        // yields 4.
        let p = Diagonal.pack(&req(12, 2, 16), 8);
        assert_eq!(p.len(), 4);
    }
}
