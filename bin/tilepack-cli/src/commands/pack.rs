// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tilepack pack` — plan a co-packing and print the layout.

use pack_planner::{pack_pairs, plan_separate, PairRequest};

/// Plans both candidate kinds for the given slot parameters and prints
/// them, including a one-line slot map of the co-packed area.
pub fn execute(offset: u16, width: u16, align: u16, count: u16) -> anyhow::Result<()> {
    anyhow::ensure!(width > 0, "width must be positive");
    anyhow::ensure!(width <= 4096, "width must fit the slot domain (≤ 4096)");
    anyhow::ensure!(align > 0 && align <= 64, "alignment must be within the 64-slot band");
    anyhow::ensure!(offset < align, "offset must be below the alignment");

    let req = PairRequest { offset, width, align, luma_band: 64, chroma_band: 64 };

    let together = pack_pairs(&req, count);
    println!(
        "co-packed: {}/{count} pair(s) in a {}-slot area",
        together.count, together.area
    );
    if let Some(packing) = &together.packing {
        println!("{}", render_area(packing, width));
        for (i, pair) in packing.pairs.iter().enumerate() {
            println!("  pair {i:2}: luma @ {:3}  chroma @ {:3}", pair.luma, pair.chroma);
        }
    } else if together.count > 0 {
        println!("  (single wide pair; the allocator derives its placement)");
    }

    let separate = plan_separate(&req, count, u16::MAX);
    println!(
        "separate:  {}/{count} pair(s), combined area estimate {} slots",
        separate.count, separate.area
    );

    Ok(())
}

/// Renders the area as one character per slot: luma blocks as letters,
/// chroma halves as the matching lower-case letters.
fn render_area(packing: &pack_planner::Packing, width: u16) -> String {
    let mut slots = vec!['.'; packing.area as usize];
    let half = (width + 1) >> 1;
    for (i, pair) in packing.pairs.iter().enumerate() {
        let luma_tag = (b'A' + (i % 26) as u8) as char;
        let chroma_tag = luma_tag.to_ascii_lowercase();
        for s in pair.luma..pair.luma + width {
            slots[s as usize] = luma_tag;
        }
        for s in pair.chroma..pair.chroma + half {
            slots[s as usize] = chroma_tag;
        }
    }
    slots.into_iter().collect()
}
