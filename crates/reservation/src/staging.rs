// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scoped rollback guard for multi-area commits.
//!
//! An NV12 separate-plane reservation lays two areas that must stand or
//! fall together. [`StagedAreas`] accumulates the handles of a commit in
//! flight; a call to [`commit`](StagedAreas::commit) merges them into the
//! group's permanent list, and any other exit — early return, a failed
//! second plane, a count mismatch — releases them when the guard drops.
//! No path leaves an orphaned half-pair behind.

use crate::backend::{AreaHandle, GroupHandle, TilerBackend};
use crate::LayoutError;
use tiler_geom::PixelFormat;

/// Accumulates areas for one commit attempt; releases on drop unless
/// committed.
pub struct StagedAreas<'a, B: TilerBackend> {
    backend: &'a mut B,
    areas: Vec<AreaHandle>,
}

impl<'a, B: TilerBackend> StagedAreas<'a, B> {
    /// Starts an empty staging scope over the backend.
    pub fn new(backend: &'a mut B) -> Self {
        Self { backend, areas: Vec::new() }
    }

    /// Lays a 2D area through the backend, staging its handle.
    #[allow(clippy::too_many_arguments)]
    pub fn lay_2d(
        &mut self,
        format: PixelFormat,
        count: u16,
        width: u16,
        height: u16,
        band: u16,
        align: u16,
        offset: u16,
        handle: GroupHandle,
    ) -> Result<u16, LayoutError> {
        self.backend
            .lay_2d(format, count, width, height, band, align, offset, handle, &mut self.areas)
    }

    /// Number of areas staged so far.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns `true` if nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Transfers every staged area into the group's permanent reserved
    /// list. Consumes the guard; nothing is released afterwards.
    pub fn commit(mut self, handle: GroupHandle) {
        let areas = std::mem::take(&mut self.areas);
        if !areas.is_empty() {
            self.backend.add_reserved(handle, areas);
        }
    }
}

impl<B: TilerBackend> Drop for StagedAreas<'_, B> {
    fn drop(&mut self) {
        let areas = std::mem::take(&mut self.areas);
        if !areas.is_empty() {
            tracing::debug!("rolling back {} staged area(s)", areas.len());
            self.backend.release(areas);
        }
    }
}
