// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The reservation orchestrator.
//!
//! ```text
//! reserve_nv12()
//!     │ validate → normalize → acquire group
//!     ▼
//! ┌─ loop while blocks outstanding ──────────────────────────┐
//! │  plan_separate()      pack_pairs()                       │
//! │        └────── efficiency() picks ──────┘                │
//! │  separate: StagedAreas → lay 8-bit → lay 16-bit          │
//! │            counts match? commit : roll back, try co-pack │
//! │  co-pack:  lay_nv12                                      │
//! │  no progress? stop — earlier commits persist             │
//! └──────────────────────────────────────────────────────────┘
//!     │ release group
//!     ▼
//!   blocks reserved (may be fewer than asked)
//! ```
//!
//! Invalid requests are logged no-ops, not errors: the return value is
//! simply the number of blocks reserved, zero included.

use crate::backend::{AreaHandle, ClientId, GroupId, TilerBackend};
use crate::staging::StagedAreas;
use crate::stats::ReserveStats;
use pack_planner::{efficiency, pack_pairs, plan_separate, Candidate, PairRequest};
use tiler_geom::{align_up, band_for, PixelFormat, PAGE_BYTES};

/// An NV12 reservation: `count` luma/chroma block pairs.
#[derive(Debug, Clone, Copy)]
pub struct Nv12Request {
    /// Number of buffer pairs wanted.
    pub count: u32,
    /// Luma plane width in pixels.
    pub width: u32,
    /// Luma plane height in pixels.
    pub height: u32,
    /// Start alignment in bytes. Invariant: `offset < align ≤ page`.
    pub align: u32,
    /// Start offset within the alignment window, in bytes. Must be even.
    pub offset: u32,
    /// Group the reservation belongs to.
    pub group: GroupId,
    /// Whether both planes may share one co-packed area.
    pub copack: bool,
}

/// A generic same-format 2D reservation: `count` equal blocks.
#[derive(Debug, Clone, Copy)]
pub struct BlockRequest {
    /// Number of blocks wanted.
    pub count: u32,
    /// Pixel format of every block.
    pub format: PixelFormat,
    /// Block width in pixels.
    pub width: u32,
    /// Block height in pixels.
    pub height: u32,
    /// Start alignment in bytes. Invariant: `offset < align ≤ page`.
    pub align: u32,
    /// Start offset within the alignment window, in bytes.
    pub offset: u32,
    /// Group the reservation belongs to.
    pub group: GroupId,
}

/// Drives the pack planner against a [`TilerBackend`].
///
/// The backend is injected at construction and its geometry read once:
/// the NV12 plane bands are fixed before any request is normalized.
///
/// # Example
/// ```
/// use reservation::{GroupId, Nv12Request, ReserveEngine, SimTiler, ClientId};
/// use tiler_geom::Extents;
///
/// let mut engine = ReserveEngine::new(SimTiler::new(Extents { width: 256, height: 128 }));
/// let reserved = engine.reserve_nv12(ClientId(1), &Nv12Request {
///     count: 4, width: 176, height: 144,
///     align: 256, offset: 128,
///     group: GroupId(1), copack: true,
/// });
/// assert_eq!(reserved, 4);
/// ```
pub struct ReserveEngine<B: TilerBackend> {
    backend: B,
    luma_band: u16,
    chroma_band: u16,
    stats: ReserveStats,
}

impl<B: TilerBackend> ReserveEngine<B> {
    /// Creates an engine over the given backend.
    pub fn new(backend: B) -> Self {
        let luma_band = band_for(backend.geometry(PixelFormat::Bit8));
        let chroma_band = band_for(backend.geometry(PixelFormat::Bit16));
        tracing::info!("reserve engine created: bands {luma_band}/{chroma_band} slots");
        Self { backend, luma_band, chroma_band, stats: ReserveStats::default() }
    }

    /// Read access to the backend (useful for introspection in tests).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// A snapshot of the cumulative reservation statistics.
    pub fn stats(&self) -> &ReserveStats {
        &self.stats
    }

    /// Consumes the engine, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Reserves up to `count` NV12 pairs for the request's group.
    ///
    /// Returns the number of pairs actually reserved. Malformed or
    /// unsupported requests reserve nothing; a commit shortfall keeps
    /// whatever earlier loop iterations managed.
    pub fn reserve_nv12(&mut self, client: ClientId, req: &Nv12Request) -> u32 {
        self.stats.record_nv12_request();
        let container = self.backend.container();

        // Widen the alignment to the coarser of the two plane slot
        // widths before normalization.
        let align = req
            .align
            .max(PAGE_BYTES / u32::from(self.luma_band.min(self.chroma_band)));

        if req.width == 0
            || req.height == 0
            || req.count == 0
            || req.offset >= req.align
            || req.offset & 1 != 0
            || req.align >= PAGE_BYTES
            || req.count > container.slots() / 2
        {
            tracing::debug!("rejecting malformed NV12 request: {req:?}");
            self.stats.record_rejected();
            return 0;
        }

        let Some(nr) =
            self.backend
                .normalize(PixelFormat::Bit8, req.width, req.height, align, req.offset)
        else {
            tracing::debug!("NV12 request not normalizable: {req:?}");
            self.stats.record_rejected();
            return 0;
        };

        let Some(group) = self.backend.get_group(client, req.group) else {
            return 0;
        };

        let pair_req = PairRequest {
            offset: nr.offset,
            width: nr.width,
            align: nr.align,
            luma_band: self.luma_band,
            chroma_band: self.chroma_band,
        };

        let mut done: u32 = 0;
        while done < req.count {
            let remaining = (req.count - done).min(u32::from(u16::MAX)) as u16;

            let separate = plan_separate(&pair_req, remaining, container.width);
            let together = if req.copack {
                pack_pairs(&pair_req, remaining)
            } else {
                Candidate::none()
            };

            // Strict comparison: a tie goes to co-packing.
            let separate_first = !req.copack
                || efficiency(separate.count, nr.width, separate.area, remaining)
                    > efficiency(together.count, nr.width, together.area, remaining);

            let mut committed: Option<u16> = None;
            if separate_first {
                // Stage both planes so a half-landed pair can be undone.
                // The 16-bit areas are laid only after the 8-bit ones
                // succeeded: a chroma area must match an already-placed
                // luma area, and an unmatched one is worthless.
                let mut staged = StagedAreas::new(&mut self.backend);
                let luma = staged.lay_2d(
                    PixelFormat::Bit8,
                    separate.count,
                    nr.width,
                    nr.height,
                    nr.band,
                    nr.align,
                    nr.offset,
                    group,
                );
                let outcome = match luma {
                    Ok(luma) => staged
                        .lay_2d(
                            PixelFormat::Bit16,
                            separate.count,
                            (nr.width + 1) / 2,
                            nr.height,
                            nr.band / 2,
                            nr.align / 2,
                            nr.offset / 2,
                            group,
                        )
                        .map(|chroma| (luma, chroma)),
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok((luma, chroma)) if luma == chroma => {
                        staged.commit(group);
                        self.stats.record_separate_commit(luma);
                        committed = Some(luma);
                    }
                    Ok((luma, chroma)) => {
                        tracing::debug!(
                            "plane counts diverged ({luma} vs {chroma}); rolling back"
                        );
                        self.stats.record_rollback();
                    }
                    Err(e) => {
                        tracing::debug!("separate commit failed: {e}; rolling back");
                        self.stats.record_rollback();
                    }
                }
            }

            // Separate packing skipped or rolled back: try co-packing.
            if committed.is_none() && req.copack && together.count > 0 {
                match self.backend.lay_nv12(
                    together.count,
                    together.area,
                    nr.width,
                    nr.height,
                    group,
                    together.packing.as_ref(),
                ) {
                    Ok(count) => {
                        self.stats.record_copack_commit(count);
                        committed = Some(count);
                    }
                    Err(e) => tracing::debug!("co-pack commit failed: {e}"),
                }
            }

            match committed {
                Some(count) if count > 0 => done += u32::from(count),
                _ => break,
            }
        }

        self.backend.release_group(group);
        tracing::info!("NV12 reservation: {done}/{} pair(s)", req.count);
        done
    }

    /// Reserves up to `count` same-format 2D blocks for the request's
    /// group.
    ///
    /// Meant for batches the default allocation handles poorly: blocks
    /// narrower than half a page are rejected outright, since the
    /// standard allocator already places those without waste.
    pub fn reserve_blocks(&mut self, client: ClientId, req: &BlockRequest) -> u32 {
        self.stats.record_block_request();

        if req.width == 0
            || req.height == 0
            || req.count == 0
            || req.align > PAGE_BYTES
            || req.offset >= req.align
        {
            tracing::debug!("rejecting malformed block request: {req:?}");
            self.stats.record_rejected();
            return 0;
        }

        let geom = self.backend.geometry(req.format);
        let row_bytes = req.width.saturating_mul(u32::from(geom.bytes_per_pixel));
        if row_bytes.saturating_mul(2) <= PAGE_BYTES {
            tracing::debug!("block narrower than half a page; default allocation suffices");
            self.stats.record_rejected();
            return 0;
        }

        let Some(nr) =
            self.backend
                .normalize(req.format, req.width, req.height, req.align, req.offset)
        else {
            tracing::debug!("block request not normalizable: {req:?}");
            self.stats.record_rejected();
            return 0;
        };

        let Some(group) = self.backend.get_group(client, req.group) else {
            return 0;
        };

        let container = self.backend.container();
        let pitch = align_up(nr.width, nr.align);

        let mut done: u32 = 0;
        while done < req.count {
            // Blocks to attempt in one area, bounded by the container
            // width and the stride scan at the caller's raw offset.
            let mut n_try = (req.count - done).min(u32::from(container.width)) as u16;
            if let Some(run) = pack_planner::widest_uniform_run(
                req.offset as u16,
                nr.width,
                pitch,
                nr.band,
                n_try,
                container.width,
            ) {
                n_try = run.count;
            }

            let mut committed: Option<u16> = None;
            while n_try > 1 {
                let mut staged: Vec<AreaHandle> = Vec::new();
                match self.backend.lay_2d(
                    req.format,
                    n_try,
                    nr.width,
                    nr.height,
                    nr.band,
                    nr.align,
                    nr.offset,
                    group,
                    &mut staged,
                ) {
                    Ok(count) => {
                        self.backend.add_reserved(group, staged);
                        self.stats.record_block_commit(count);
                        committed = Some(count);
                        break;
                    }
                    Err(e) => {
                        tracing::debug!("area of {n_try} blocks failed: {e}; shrinking");
                        n_try -= 1;
                    }
                }
            }

            match committed {
                Some(count) if count > 0 => done += u32::from(count),
                _ => break,
            }
        }
        // Blocks reserved in earlier areas are kept even on shortfall.

        self.backend.release_group(group);
        tracing::info!("block reservation: {done}/{} block(s)", req.count);
        done
    }

    /// Releases every area previously reserved for `group`.
    ///
    /// Releasing a group with nothing reserved is a no-op, so a second
    /// call is harmless.
    pub fn unreserve_blocks(&mut self, client: ClientId, group: GroupId) {
        let Some(handle) = self.backend.get_group(client, group) else {
            return;
        };
        let areas = self.backend.take_reserved(handle);
        if !areas.is_empty() {
            tracing::info!("unreserving {} area(s) for group {}", areas.len(), group.0);
            self.stats.record_unreserved(areas.len());
        }
        self.backend.release(areas);
        self.backend.release_group(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimTiler;
    use tiler_geom::Extents;

    fn engine() -> ReserveEngine<SimTiler> {
        ReserveEngine::new(SimTiler::new(Extents { width: 256, height: 128 }))
    }

    fn nv12(count: u32) -> Nv12Request {
        Nv12Request {
            count,
            width: 176,
            height: 144,
            align: 256,
            offset: 128,
            group: GroupId(1),
            copack: true,
        }
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut e = engine();
        assert_eq!(e.reserve_nv12(ClientId(1), &Nv12Request { width: 0, ..nv12(4) }), 0);
        assert_eq!(e.reserve_nv12(ClientId(1), &Nv12Request { height: 0, ..nv12(4) }), 0);
        assert_eq!(e.reserve_nv12(ClientId(1), &nv12(0)), 0);
        assert_eq!(e.stats().rejected_requests, 3);
        assert_eq!(e.backend().used_slots(), 0);
    }

    #[test]
    fn test_rejects_offset_out_of_alignment() {
        let mut e = engine();
        let bad = Nv12Request { offset: 256, ..nv12(4) };
        assert_eq!(e.reserve_nv12(ClientId(1), &bad), 0);
    }

    #[test]
    fn test_rejects_odd_offset() {
        let mut e = engine();
        let bad = Nv12Request { offset: 33, ..nv12(4) };
        assert_eq!(e.reserve_nv12(ClientId(1), &bad), 0);
    }

    #[test]
    fn test_rejects_page_alignment() {
        let mut e = engine();
        let bad = Nv12Request { align: 4096, offset: 128, ..nv12(4) };
        assert_eq!(e.reserve_nv12(ClientId(1), &bad), 0);
    }

    #[test]
    fn test_rejects_absurd_count() {
        let mut e = engine();
        // Container is 256×128 = 32768 slots; more than half is absurd.
        assert_eq!(e.reserve_nv12(ClientId(1), &nv12(20000)), 0);
    }

    #[test]
    fn test_small_nv12_request_fully_served() {
        let mut e = engine();
        let reserved = e.reserve_nv12(ClientId(1), &nv12(4));
        assert_eq!(reserved, 4);
        assert!(e.backend().used_slots() > 0);
        assert_eq!(e.stats().blocks_reserved, 4);
    }

    #[test]
    fn test_blocks_rejects_narrow_width() {
        let mut e = engine();
        // 1024 px × 1 B × 2 = 2048 ≤ 4096: the default allocator wins.
        let req = BlockRequest {
            count: 4,
            format: PixelFormat::Bit8,
            width: 1024,
            height: 64,
            align: 4096,
            offset: 0,
            group: GroupId(1),
        };
        assert_eq!(e.reserve_blocks(ClientId(1), &req), 0);
        assert_eq!(e.stats().rejected_requests, 1);
    }

    #[test]
    fn test_blocks_reserved_and_unreserved() {
        let mut e = engine();
        // 6144 px = 96 slots: one and a half bands, so a pair of blocks
        // at a 96-slot pitch shares a 192-slot area at full density and
        // the scan returns runs of two.
        let req = BlockRequest {
            count: 4,
            format: PixelFormat::Bit8,
            width: 6144,
            height: 64,
            align: 512,
            offset: 0,
            group: GroupId(2),
        };
        let reserved = e.reserve_blocks(ClientId(1), &req);
        assert_eq!(reserved, 4);
        assert!(e.backend().used_slots() > 0);

        e.unreserve_blocks(ClientId(1), GroupId(2));
        assert_eq!(e.backend().used_slots(), 0);

        // Second unreserve is a no-op.
        e.unreserve_blocks(ClientId(1), GroupId(2));
        assert_eq!(e.backend().used_slots(), 0);
    }
}
