// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The allocator collaborator trait and its opaque tokens.
//!
//! The orchestrator owns no memory itself: every slot carved out of the
//! container, and every group's permanent reserved list, lives behind
//! this trait. The backend is injected at engine construction time, so
//! geometry is known before any request is normalized.

use crate::LayoutError;
use pack_planner::Packing;
use tiler_geom::{Extents, NormalizedRequest, PixelFormat, SlotGeometry};

/// Opaque token for one committed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaHandle(pub u64);

/// Identifies the calling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u32);

/// Caller-chosen group identifier, scoped to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u32);

/// Handle to an acquired group context.
///
/// Valid from [`TilerBackend::get_group`] until the matching
/// [`TilerBackend::release_group`]; the reservations recorded under it
/// outlive the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(pub u32);

/// Everything the reservation core needs from the tiled-memory
/// allocator.
///
/// Callers must serialize reservation and unreservation per group id;
/// the core adds no locking of its own.
pub trait TilerBackend {
    /// Container surface dimensions in slots.
    fn container(&self) -> Extents;

    /// Per-format slot geometry. Immutable for the engine lifetime.
    fn geometry(&self, format: PixelFormat) -> SlotGeometry;

    /// Converts a pixel-domain request into slot units, or `None` for
    /// unsupported combinations. `align` and `offset` are bytes.
    fn normalize(
        &self,
        format: PixelFormat,
        width: u32,
        height: u32,
        align: u32,
        offset: u32,
    ) -> Option<NormalizedRequest>;

    /// Acquires the group context for `(client, group)`, creating it on
    /// first use. Returns `None` when the backend cannot provide one.
    fn get_group(&mut self, client: ClientId, group: GroupId) -> Option<GroupHandle>;

    /// Releases a group handle. The group's reserved areas persist.
    fn release_group(&mut self, handle: GroupHandle);

    /// Carves one 2D area holding `count` blocks of `width × height`
    /// slots at the given band/align/offset, appending the new handle to
    /// `out`. Returns the committed block count. On failure `out` must
    /// be left untouched.
    #[allow(clippy::too_many_arguments)]
    fn lay_2d(
        &mut self,
        format: PixelFormat,
        count: u16,
        width: u16,
        height: u16,
        band: u16,
        align: u16,
        offset: u16,
        handle: GroupHandle,
        out: &mut Vec<AreaHandle>,
    ) -> Result<u16, LayoutError>;

    /// Commits `count` co-packed NV12 pairs into one `area`-wide area,
    /// booking it under the group. `packing` prescribes the placements;
    /// `None` lets the backend derive the single wide-pair placement
    /// itself. Returns the committed pair count.
    fn lay_nv12(
        &mut self,
        count: u16,
        area: u16,
        width: u16,
        height: u16,
        handle: GroupHandle,
        packing: Option<&Packing>,
    ) -> Result<u16, LayoutError>;

    /// Releases a set of areas back to the container.
    fn release(&mut self, areas: Vec<AreaHandle>);

    /// Merges staged areas into the group's permanent reserved list.
    fn add_reserved(&mut self, handle: GroupHandle, areas: Vec<AreaHandle>);

    /// Removes and returns the group's permanent reserved list.
    fn take_reserved(&mut self, handle: GroupHandle) -> Vec<AreaHandle>;
}
