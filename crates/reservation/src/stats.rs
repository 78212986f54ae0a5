// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Cumulative reservation metrics.
//!
//! [`ReserveStats`] records what the orchestrator did across a session:
//! how many requests arrived, how they were satisfied, and how often a
//! half-committed attempt had to be rolled back. The engine updates the
//! stats; callers read a snapshot for profiling or CLI reporting.

/// Counters accumulated by a [`crate::ReserveEngine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReserveStats {
    /// NV12 reservation requests received.
    pub nv12_requests: u64,
    /// Generic 2D reservation requests received.
    pub block_requests: u64,
    /// Requests rejected by validation or normalization (silent no-ops).
    pub rejected_requests: u64,
    /// Blocks actually reserved, across all requests.
    pub blocks_reserved: u64,
    /// Separate-plane commits that landed both planes.
    pub separate_commits: u64,
    /// Co-packed area commits.
    pub copack_commits: u64,
    /// Separate-path attempts rolled back (failure or count mismatch).
    pub rollbacks: u64,
    /// Areas handed back by `unreserve_blocks`.
    pub areas_unreserved: u64,
}

impl ReserveStats {
    pub(crate) fn record_nv12_request(&mut self) {
        self.nv12_requests += 1;
    }

    pub(crate) fn record_block_request(&mut self) {
        self.block_requests += 1;
    }

    pub(crate) fn record_rejected(&mut self) {
        self.rejected_requests += 1;
    }

    pub(crate) fn record_separate_commit(&mut self, blocks: u16) {
        self.separate_commits += 1;
        self.blocks_reserved += u64::from(blocks);
    }

    pub(crate) fn record_copack_commit(&mut self, blocks: u16) {
        self.copack_commits += 1;
        self.blocks_reserved += u64::from(blocks);
    }

    pub(crate) fn record_block_commit(&mut self, blocks: u16) {
        self.blocks_reserved += u64::from(blocks);
    }

    pub(crate) fn record_rollback(&mut self) {
        self.rollbacks += 1;
    }

    pub(crate) fn record_unreserved(&mut self, areas: usize) {
        self.areas_unreserved += areas as u64;
    }

    /// Returns a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} blocks reserved over {} request(s) \
             ({} separate / {} co-packed commits, {} rollback(s), {} rejected)",
            self.blocks_reserved,
            self.nv12_requests + self.block_requests,
            self.separate_commits,
            self.copack_commits,
            self.rollbacks,
            self.rejected_requests,
        )
    }
}
