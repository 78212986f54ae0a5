// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Candidate selection: the co-pack strategy roster and the efficiency
//! ranking that arbitrates between co-packed and separate-area plans.

use crate::pack::Candidate;
use crate::presets;
use crate::strategy::{PairRequest, PairStrategy};
use crate::{Butterfly, Diagonal, Mirrored, Packing, Progressive, WidePair};

/// Strategy roster in priority order: smallest area footprint first.
/// The order doubles as the tie-break — the first strategy to reach a
/// count keeps it.
static ROSTER: [&(dyn PairStrategy + Sync); 4] =
    [&Progressive, &Mirrored, &Diagonal, &Butterfly];

/// Finds the best co-packed layout for up to `n` NV12 pairs.
///
/// Tries the roster in priority order, stopping early once a strategy
/// places the full request; more pairs always wins, first-found wins
/// ties. A request the roster cannot fully satisfy consults the preset
/// table; a request nothing places at all falls back to [`WidePair`],
/// whose answer is carried as count and area only — the allocator
/// re-derives that single placement during the commit, so
/// `Candidate::packing` stays `None` for it.
///
/// Every packing is containment-checked before it can win; a violating
/// layout is treated as infeasible rather than handed on.
pub fn pack_pairs(req: &PairRequest, n: u16) -> Candidate {
    let mut best: Option<(Packing, &'static str)> = None;
    let mut best_count = 0;

    for strategy in ROSTER {
        if best_count >= n {
            break;
        }
        let packing = strategy.pack(req, n.min(strategy.capacity()));
        if let Err(reason) = packing.validate(req.width) {
            tracing::debug!("{} produced an invalid layout: {reason}", strategy.name());
            continue;
        }
        if packing.len() > best_count {
            best_count = packing.len();
            best = Some((packing, strategy.name()));
        }
    }

    if best_count < n {
        if let Some(packing) = presets::best_preset(req, n, best_count) {
            best_count = packing.len();
            best = Some((packing, "preset"));
        }
    }

    if best_count == 0 {
        let packing = WidePair.pack(req, n.min(WidePair.capacity()));
        if !packing.is_empty() && packing.validate(req.width).is_ok() {
            tracing::debug!("falling back to wide-pair feasibility, area {}", packing.area);
            return Candidate { count: packing.len(), area: packing.area, packing: None };
        }
        return Candidate::none();
    }

    let (packing, name) = best.expect("non-zero count implies a packing");
    tracing::debug!("co-pack via {name}: {} pairs in area {}", best_count, packing.area);
    Candidate { count: best_count, area: packing.area, packing: Some(packing) }
}

/// Ranking value for a candidate layout.
///
/// Dominated by how many more areas of this kind it would take to reach
/// the `n_need` outstanding blocks — fewer areas is better — with the
/// pixel density of one area as the secondary reward. Candidates that
/// place nothing, or whose area is unknown, rank below everything.
pub fn efficiency(count: u16, width: u16, area: u16, n_need: u16) -> i64 {
    if count == 0 || area == 0 {
        return i64::MIN;
    }
    let (count, width, area) = (i64::from(count), i64::from(width), i64::from(area));
    let n_need = i64::from(n_need);
    let areas_needed = (n_need + count - 1) / count;
    0x1000_0000 - areas_needed * area * 32 + 1024 * count * ((width * 3 + 1) >> 1) / area
}
