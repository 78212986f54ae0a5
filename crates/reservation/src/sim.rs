// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reference in-memory backend.
//!
//! [`SimTiler`] implements [`TilerBackend`] over a slot-area consumption
//! model: every committed area debits its `width × height` slot
//! footprint against the container, and releases credit it back. That is
//! enough for the CLI to demonstrate full reservation flows and for the
//! test suite to observe commits, rollbacks, and group bookkeeping
//! without hardware behind it.
//!
//! Geometry mirrors a common tiler: 8-bit slots are 64×32 px at 1 B/px,
//! 16-bit 32×32 at 2 B/px, 32-bit 32×32 at 4 B/px — so both NV12 planes
//! share a 64-slot band.

use crate::backend::{AreaHandle, ClientId, GroupHandle, GroupId, TilerBackend};
use crate::LayoutError;
use pack_planner::Packing;
use std::collections::HashMap;
use tiler_geom::{align_up, band_for, Extents, NormalizedRequest, PixelFormat, SlotGeometry};

/// Slot height in pixel rows, common to all formats here.
const SLOT_ROWS: u32 = 32;

#[derive(Debug)]
struct GroupState {
    client: ClientId,
    group: GroupId,
    refs: u32,
    reserved: Vec<AreaHandle>,
}

/// An in-memory tiler allocator with consumption-model accounting.
#[derive(Debug)]
pub struct SimTiler {
    extents: Extents,
    /// Live areas: handle → slot footprint.
    areas: HashMap<u64, u32>,
    used: u32,
    next_area: u64,
    released: u32,
    groups: Vec<GroupState>,
}

impl SimTiler {
    /// Creates a backend over an empty container of the given extents.
    pub fn new(extents: Extents) -> Self {
        Self {
            extents,
            areas: HashMap::new(),
            used: 0,
            next_area: 1,
            released: 0,
            groups: Vec::new(),
        }
    }

    /// Creates a backend from a surface configuration.
    pub fn from_config(config: &crate::SurfaceConfig) -> Self {
        Self::new(config.extents())
    }

    /// Slots currently committed.
    pub fn used_slots(&self) -> u32 {
        self.used
    }

    /// Number of live (committed, unreleased) areas.
    pub fn live_areas(&self) -> usize {
        self.areas.len()
    }

    /// Number of areas released so far.
    pub fn released_areas(&self) -> u32 {
        self.released
    }

    /// Number of areas on the group's permanent reserved list.
    pub fn reserved_count(&self, handle: GroupHandle) -> usize {
        self.groups
            .get(handle.0 as usize)
            .map_or(0, |g| g.reserved.len())
    }

    fn book_area(&mut self, slots: u32) -> Result<AreaHandle, LayoutError> {
        let capacity = self.extents.slots();
        if self.used + slots > capacity {
            return Err(LayoutError::OutOfSpace { needed: slots, available: capacity - self.used });
        }
        let handle = AreaHandle(self.next_area);
        self.next_area += 1;
        self.used += slots;
        self.areas.insert(handle.0, slots);
        Ok(handle)
    }

    fn group_alive(&self, handle: GroupHandle) -> Result<(), LayoutError> {
        match self.groups.get(handle.0 as usize) {
            Some(g) if g.refs > 0 => Ok(()),
            _ => Err(LayoutError::NoSuchGroup),
        }
    }
}

impl TilerBackend for SimTiler {
    fn container(&self) -> Extents {
        self.extents
    }

    fn geometry(&self, format: PixelFormat) -> SlotGeometry {
        match format {
            PixelFormat::Bit8 => SlotGeometry { slot_width: 64, bytes_per_pixel: 1 },
            PixelFormat::Bit16 => SlotGeometry { slot_width: 32, bytes_per_pixel: 2 },
            PixelFormat::Bit32 => SlotGeometry { slot_width: 32, bytes_per_pixel: 4 },
        }
    }

    fn normalize(
        &self,
        format: PixelFormat,
        width: u32,
        height: u32,
        align: u32,
        offset: u32,
    ) -> Option<NormalizedRequest> {
        if width == 0 || height == 0 {
            return None;
        }
        let geom = self.geometry(format);
        let slot_bytes = geom.slot_bytes();

        let w = width.div_ceil(u32::from(geom.slot_width));
        let h = height.div_ceil(SLOT_ROWS);
        if w > u32::from(u16::MAX) || h > u32::from(u16::MAX) {
            return None;
        }
        let a = (align / slot_bytes).max(1) as u16;
        let o = (offset / slot_bytes) as u16;
        if o >= a {
            return None;
        }
        Some(NormalizedRequest {
            width: w as u16,
            height: h as u16,
            band: band_for(geom),
            align: a,
            offset: o,
        })
    }

    fn get_group(&mut self, client: ClientId, group: GroupId) -> Option<GroupHandle> {
        if let Some(i) = self
            .groups
            .iter()
            .position(|g| g.client == client && g.group == group)
        {
            self.groups[i].refs += 1;
            return Some(GroupHandle(i as u32));
        }
        self.groups.push(GroupState { client, group, refs: 1, reserved: Vec::new() });
        Some(GroupHandle((self.groups.len() - 1) as u32))
    }

    fn release_group(&mut self, handle: GroupHandle) {
        if let Some(g) = self.groups.get_mut(handle.0 as usize) {
            g.refs = g.refs.saturating_sub(1);
        }
    }

    fn lay_2d(
        &mut self,
        _format: PixelFormat,
        count: u16,
        width: u16,
        height: u16,
        band: u16,
        align: u16,
        offset: u16,
        handle: GroupHandle,
        out: &mut Vec<AreaHandle>,
    ) -> Result<u16, LayoutError> {
        self.group_alive(handle)?;
        if count == 0 || width == 0 || height == 0 {
            return Err(LayoutError::Unsupported("degenerate area".to_string()));
        }
        let pitch = align_up(width, align.max(1));
        let span = u32::from(offset)
            + u32::from(count - 1) * u32::from(pitch)
            + u32::from(width);
        if span > u32::from(self.extents.width) {
            return Err(LayoutError::OutOfSpace {
                needed: span * u32::from(height),
                available: self.extents.slots() - self.used,
            });
        }
        let area_w = align_up(span as u16, band.max(1));
        if area_w > self.extents.width {
            return Err(LayoutError::OutOfSpace {
                needed: u32::from(area_w) * u32::from(height),
                available: self.extents.slots() - self.used,
            });
        }
        let slots = u32::from(area_w) * u32::from(height);
        let area = self.book_area(slots)?;
        out.push(area);
        Ok(count)
    }

    fn lay_nv12(
        &mut self,
        count: u16,
        area: u16,
        width: u16,
        height: u16,
        handle: GroupHandle,
        packing: Option<&Packing>,
    ) -> Result<u16, LayoutError> {
        self.group_alive(handle)?;
        if count == 0 || area == 0 || height == 0 {
            return Err(LayoutError::Unsupported("degenerate NV12 area".to_string()));
        }
        if let Some(p) = packing {
            if p.len() < count || p.validate(width).is_err() {
                return Err(LayoutError::Unsupported("packing does not cover the request".to_string()));
            }
        }
        if area > self.extents.width {
            return Err(LayoutError::OutOfSpace {
                needed: u32::from(area) * u32::from(height),
                available: self.extents.slots() - self.used,
            });
        }
        let slots = u32::from(area) * u32::from(height);
        let booked = self.book_area(slots)?;
        if let Some(g) = self.groups.get_mut(handle.0 as usize) {
            g.reserved.push(booked);
        }
        Ok(count)
    }

    fn release(&mut self, areas: Vec<AreaHandle>) {
        for area in areas {
            if let Some(slots) = self.areas.remove(&area.0) {
                self.used -= slots;
                self.released += 1;
            }
        }
    }

    fn add_reserved(&mut self, handle: GroupHandle, areas: Vec<AreaHandle>) {
        if let Some(g) = self.groups.get_mut(handle.0 as usize) {
            g.reserved.extend(areas);
        }
    }

    fn take_reserved(&mut self, handle: GroupHandle) -> Vec<AreaHandle> {
        self.groups
            .get_mut(handle.0 as usize)
            .map(|g| std::mem::take(&mut g.reserved))
            .unwrap_or_default()
    }
}
