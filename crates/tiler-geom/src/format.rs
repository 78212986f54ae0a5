// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pixel formats and per-format slot geometry.

use crate::GeomError;
use std::fmt;
use std::str::FromStr;

/// Size of one tiler page in bytes.
///
/// Alignment requests are bounded by the page, and the per-format band
/// (slots per page row) is derived from it — see [`band_for`].
pub const PAGE_BYTES: u32 = 4096;

/// Container pixel formats supported by the reservation planner.
///
/// NV12 surfaces pair a full-resolution [`Bit8`](PixelFormat::Bit8) luma
/// plane with a half-resolution [`Bit16`](PixelFormat::Bit16) chroma
/// plane; [`Bit32`](PixelFormat::Bit32) exists for generic 2D batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// 8 bits per pixel.
    Bit8,
    /// 16 bits per pixel.
    Bit16,
    /// 32 bits per pixel.
    Bit32,
}

impl PixelFormat {
    /// All supported formats, in increasing depth order.
    pub const ALL: [PixelFormat; 3] = [PixelFormat::Bit8, PixelFormat::Bit16, PixelFormat::Bit32];
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PixelFormat::Bit8 => "8bit",
            PixelFormat::Bit16 => "16bit",
            PixelFormat::Bit32 => "32bit",
        };
        f.write_str(s)
    }
}

impl FromStr for PixelFormat {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "8" | "8bit" => Ok(PixelFormat::Bit8),
            "16" | "16bit" => Ok(PixelFormat::Bit16),
            "32" | "32bit" => Ok(PixelFormat::Bit32),
            other => Err(GeomError::UnknownFormat(other.to_string())),
        }
    }
}

/// Per-format slot geometry, as reported by the allocator.
///
/// Immutable for the lifetime of a reservation engine: the planner reads
/// it once at construction to derive the bands it packs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotGeometry {
    /// Width of one slot in pixels.
    pub slot_width: u16,
    /// Bytes per pixel for this format.
    pub bytes_per_pixel: u16,
}

impl SlotGeometry {
    /// Width of one slot in bytes.
    pub fn slot_bytes(&self) -> u32 {
        u32::from(self.slot_width) * u32::from(self.bytes_per_pixel)
    }
}

/// Number of slots per page row ("band") for the given geometry.
///
/// The band is what stride rounding works against: a 2D area's row pitch
/// is its block extent rounded up to the band.
pub fn band_for(geom: SlotGeometry) -> u16 {
    (PAGE_BYTES / geom.slot_bytes()) as u16
}
