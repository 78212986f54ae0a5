// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Precomputed special-case packings.
//!
//! A few parameter classes pack better than any of the closed-form
//! strategies manage; their layouts were worked out by hand and are kept
//! here as constants. The table is ordered by increasing area, then by
//! decreasing pair count, so a traversal can stop as soon as an entry
//! cannot beat the best count found so far.

use crate::strategy::PairRequest;
use crate::{PackedPair, Packing};
use tiler_geom::align_up_i32;

/// One precomputed packing and the parameter class it serves.
#[derive(Debug, Clone, Copy)]
pub struct PresetPacking {
    /// Pairs in the full layout.
    pub count: u16,
    /// Luma offset the layout was derived for.
    pub offset: u16,
    /// Luma width the layout was derived for.
    pub width: u16,
    /// Alignment the layout was derived for.
    pub align: u16,
    /// Area width in slots.
    pub area: u16,
    /// The placements, in commit order.
    pub pairs: &'static [PackedPair],
}

/// The preset table, ordered by increasing area then decreasing count.
pub const PRESETS: &[PresetPacking] = &[
    PresetPacking {
        count: 9,
        offset: 2,
        width: 4,
        align: 4,
        area: 64,
        pairs: &[
            PackedPair { luma: 2, chroma: 33 },
            PackedPair { luma: 6, chroma: 35 },
            PackedPair { luma: 10, chroma: 37 },
            PackedPair { luma: 14, chroma: 39 },
            PackedPair { luma: 18, chroma: 41 },
            PackedPair { luma: 46, chroma: 23 },
            PackedPair { luma: 50, chroma: 25 },
            PackedPair { luma: 54, chroma: 27 },
            PackedPair { luma: 58, chroma: 29 },
        ],
    },
    PresetPacking {
        count: 3,
        offset: 0,
        width: 12,
        align: 4,
        area: 64,
        pairs: &[
            PackedPair { luma: 0, chroma: 32 },
            PackedPair { luma: 12, chroma: 38 },
            PackedPair { luma: 48, chroma: 24 },
        ],
    },
];

/// Looks for a preset that serves the request better than `best_so_far`.
///
/// An entry applies when its alignment is at least as strict as the
/// request's and the request's block, slid to the entry's phase, still
/// ends inside the entry's block. The first applicable entry wins and
/// contributes the first `min(count, n)` of its pairs; traversal stops
/// early once entries can no longer beat `best_so_far`.
pub fn best_preset(req: &PairRequest, n: u16, best_so_far: u16) -> Option<Packing> {
    for preset in PRESETS {
        if preset.count < best_so_far {
            // Sorted by decreasing count per area: nothing better follows.
            return None;
        }
        let slide = align_up_i32(i32::from(preset.offset) - i32::from(req.offset), req.align);
        let fits = preset.align >= req.align
            && i32::from(req.offset) + i32::from(req.width) + slide
                <= i32::from(preset.offset) + i32::from(preset.width);
        if fits {
            let take = preset.count.min(n) as usize;
            return Some(Packing {
                area: preset.area,
                pairs: preset.pairs[..take].to_vec(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(offset: u16, width: u16, align: u16) -> PairRequest {
        PairRequest { offset, width, align, luma_band: 64, chroma_band: 64 }
    }

    #[test]
    fn test_table_is_contained() {
        for preset in PRESETS {
            let p = Packing { area: preset.area, pairs: preset.pairs.to_vec() };
            assert_eq!(p.len(), preset.count);
            p.validate(preset.width).unwrap();
        }
    }

    #[test]
    fn test_exact_match() {
        // The nine-pair layout serves (o=2, w=4, a=4) directly.
        let p = best_preset(&req(2, 4, 4), 9, 0).unwrap();
        assert_eq!(p.len(), 9);
        assert_eq!(p.area, 64);
    }

    #[test]
    fn test_narrower_block_matches() {
        // A 3-wide block at the same phase still ends inside the 4-wide
        // layout: 2 + 3 + align(0, 4) = 5 <= 6.
        let p = best_preset(&req(2, 3, 4), 9, 0).unwrap();
        assert_eq!(p.len(), 9);
    }

    #[test]
    fn test_takes_only_requested() {
        let p = best_preset(&req(2, 4, 4), 5, 0).unwrap();
        assert_eq!(p.len(), 5);
        assert_eq!(p.pairs[4], PackedPair { luma: 18, chroma: 41 });
    }

    #[test]
    fn test_coarser_alignment_rejected() {
        // Request alignment 8 is stricter than the table's 4.
        assert!(best_preset(&req(2, 4, 8), 9, 0).is_none());
    }

    #[test]
    fn test_early_stop_on_better_best() {
        // With 10 pairs already found, no entry can improve.
        assert!(best_preset(&req(2, 4, 4), 12, 10).is_none());
    }

    #[test]
    fn test_second_entry_matches_wide_block() {
        // (o=0, w=12, a=4) skips the 4-wide entry and lands on the
        // 12-wide one.
        let p = best_preset(&req(0, 12, 4), 3, 0).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.pairs[0], PackedPair { luma: 0, chroma: 32 });
    }
}
