// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pair packings and layout candidates: the outputs of the planner.
//!
//! A [`Packing`] is the contract between the co-pack strategies and the
//! allocator's NV12 commit call: an ordered list of luma/chroma offset
//! pairs inside one shared area. A [`Candidate`] wraps a packing (or a
//! separate-area plan without one) with the count and area the ranking
//! step compares.

use crate::PackError;

/// Placement of one NV12 pair inside a shared area.
///
/// `luma` is the slot offset of the full-resolution 8-bit block;
/// `chroma` the offset of its half-width 16-bit companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PackedPair {
    /// Slot offset of the 8-bit block.
    pub luma: u16,
    /// Slot offset of the paired 16-bit block.
    pub chroma: u16,
}

/// An ordered sequence of pair placements inside one area.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Packing {
    /// Width of the shared area in slots.
    pub area: u16,
    /// Placements, in commit order.
    pub pairs: Vec<PackedPair>,
}

impl Packing {
    /// An empty (infeasible) packing for the given area.
    pub fn empty(area: u16) -> Self {
        Self { area, pairs: Vec::new() }
    }

    /// Number of pairs placed.
    pub fn len(&self) -> u16 {
        self.pairs.len() as u16
    }

    /// Returns `true` if no pairs were placed.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Checks the containment invariant for `width`-slot blocks.
    ///
    /// Every luma offset plus the block width must stay inside the area,
    /// and every chroma offset plus the half width likewise. Layouts
    /// violating this are never handed to the allocator.
    pub fn validate(&self, width: u16) -> Result<(), PackError> {
        let half = (width + 1) >> 1;
        for (index, pair) in self.pairs.iter().enumerate() {
            if pair.luma + width > self.area {
                return Err(PackError::LumaOutOfArea {
                    index,
                    offset: pair.luma,
                    width,
                    area: self.area,
                });
            }
            if pair.chroma + half > self.area {
                return Err(PackError::ChromaOutOfArea {
                    index,
                    offset: pair.chroma,
                    width: half,
                    area: self.area,
                });
            }
        }
        Ok(())
    }
}

/// A ranked layout candidate: what one planning pass achieved.
///
/// `packing` is present for co-packed layouts whose placement the
/// allocator must follow verbatim, and absent for separate-area plans
/// and for the wide-pair fallback (the allocator derives that placement
/// itself during the commit).
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Candidate {
    /// Number of blocks (or pairs) this candidate places.
    pub count: u16,
    /// Area footprint in slots backing the ranking.
    pub area: u16,
    /// Explicit pair placements, when the layout prescribes them.
    pub packing: Option<Packing>,
}

impl Candidate {
    /// A candidate that places nothing; ranks below everything.
    pub fn none() -> Self {
        Self::default()
    }
}
