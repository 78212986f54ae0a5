// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Mirrored progressive packing: `cCbbBBaaaaAAAA`.
//!
//! Runs [`Progressive`] from the alignment-mirrored offset, then
//! reflects every placement through the area. Structurally the same
//! layout, useful when the residual offset makes the forward variant
//! come up short.

use crate::strategy::progressive::{Progressive, MAX_PROGRESSIVE};
use crate::strategy::{PairRequest, PairStrategy};
use crate::{PackedPair, Packing};

/// [`Progressive`] reflected through the area midline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mirrored;

impl Mirrored {
    pub fn new() -> Self {
        Self
    }
}

impl PairStrategy for Mirrored {
    fn name(&self) -> &'static str {
        "mirrored"
    }

    fn capacity(&self) -> u16 {
        MAX_PROGRESSIVE
    }

    fn pack(&self, req: &PairRequest, n: u16) -> Packing {
        let PairRequest { offset: o, width: w, align: a, .. } = *req;
        // The mirror of an offset-o block grid starts where the last
        // block's end falls short of the alignment.
        let mirrored = PairRequest { offset: (a - (o + w) % a) % a, ..*req };
        let forward = Progressive.pack(&mirrored, n);

        let area = i32::from(forward.area);
        let half = i32::from((w + 1) >> 1);
        let w = i32::from(w);
        let mut packing = Packing::empty(forward.area);
        for pair in &forward.pairs {
            let luma = area - i32::from(pair.luma) - w;
            let chroma = area - i32::from(pair.chroma) - half;
            if luma < 0 || chroma < 0 {
                return Packing::empty(forward.area);
            }
            packing.pairs.push(PackedPair { luma: luma as u16, chroma: chroma as u16 });
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
    fn test_mirror_of_aligned_grid() {
        // o=0, w=8, a=8: the mirrored offset is also 0, so this is the
        // pure reflection of the progressive layout.
        let fwd = Progressive.pack(&req(0, 8, 8), 4);
        let rev = Mirrored.pack(&req(0, 8, 8), 4);
        assert_eq!(rev.len(), fwd.len());
        for (f, r) in fwd.pairs.iter().zip(&rev.pairs) {
            assert_eq!(r.luma, 64 - f.luma - 8);
            assert_eq!(r.chroma, 64 - f.chroma - 4);
        }
        rev.validate(8).unwrap();
    }

    #[test]
    fn test_same_count_as_forward_variant() {
        // Reflection never changes the number of pairs placed.
        for (o, w, a) in [(0u16, 8u16, 8u16), (2, 4, 4), (0, 12, 4), (1, 6, 2)] {
            let mirrored_o = (a - (o + w) % a) % a;
            let fwd = Progressive.pack(&req(mirrored_o, w, a), 12);
            let rev = Mirrored.pack(&req(o, w, a), 12);
            assert_eq!(rev.len(), fwd.len(), "o={o} w={w} a={a}");
        }
    }

    #[test]
    fn test_containment() {
        for (o, w, a) in [(0u16, 8u16, 8u16), (2, 4, 4), (3, 5, 4)] {
            let p = Mirrored.pack(&req(o, w, a), 16);
            p.validate(w).unwrap();
        }
    }

    #[test]
    fn test_infeasible_is_empty() {
        let p = Mirrored.pack(&req(0, 64, 64), 1);
        assert!(p.is_empty());
    }
}
