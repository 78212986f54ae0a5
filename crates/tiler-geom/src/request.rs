// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Container extents and slot-normalized requests.

/// Dimensions of the tiled container surface, in slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extents {
    /// Container width in slots.
    pub width: u16,
    /// Container height in slots.
    pub height: u16,
}

impl Extents {
    /// Total number of slots on the surface.
    pub fn slots(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

/// A block request converted from pixels into slot units.
///
/// Produced by the allocator's normalization step; the planner treats
/// these values as opaque inputs and never recomputes them. All fields
/// are slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct NormalizedRequest {
    /// Block width in slots.
    pub width: u16,
    /// Block height in slots.
    pub height: u16,
    /// Slots per page row for the request's format.
    pub band: u16,
    /// Alignment in slots. Invariant: `offset < align`.
    pub align: u16,
    /// Start offset within the alignment window, in slots.
    pub offset: u16,
}
