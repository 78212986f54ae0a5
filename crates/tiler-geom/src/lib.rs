// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tiler-geom
//!
//! Slot-unit geometry for a tiled memory surface.
//!
//! The tiling hardware addresses the container in *slots*: fixed-size
//! cells whose pixel width depends on the pixel format. Everything the
//! packing planner reasons about — offsets, widths, bands, strides — is
//! expressed in slots. This crate holds the shared vocabulary:
//!
//! - [`PixelFormat`] and [`SlotGeometry`] — per-format slot width and
//!   bytes per pixel, as reported by the allocator.
//! - [`PAGE_BYTES`] and [`band_for`] — the page size and the number of
//!   slots per page row ("band"), which governs stride rounding.
//! - [`align_up`] / [`align_up_i32`] / [`div_round_up`] — the integer
//!   arithmetic every layout formula is built from.
//! - [`Extents`] and [`NormalizedRequest`] — the container surface and a
//!   caller request converted into slot units.
//!
//! No allocation, no I/O: plain `Copy` value types and pure functions.

mod align;
mod error;
mod format;
mod request;

pub use align::{align_up, align_up_i32, div_round_up};
pub use error::GeomError;
pub use format::{band_for, PixelFormat, SlotGeometry, PAGE_BYTES};
pub use request::{Extents, NormalizedRequest};
