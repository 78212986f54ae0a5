// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the co-pack selector and the uniform-stride scan.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pack_planner::{pack_pairs, widest_uniform_run, PairRequest};

fn bench_uniform_run(c: &mut Criterion) {
    c.bench_function("widest_uniform_run", |b| {
        b.iter(|| {
            widest_uniform_run(
                black_box(2),
                black_box(12),
                black_box(16),
                black_box(64),
                black_box(16),
                black_box(256),
            )
        })
    });
}

fn bench_pack_pairs(c: &mut Criterion) {
    let qcif = PairRequest { offset: 2, width: 4, align: 4, luma_band: 64, chroma_band: 64 };
    c.bench_function("pack_pairs_qcif", |b| {
        b.iter(|| pack_pairs(black_box(&qcif), black_box(9)))
    });

    let wide = PairRequest { offset: 1, width: 64, align: 2, luma_band: 64, chroma_band: 64 };
    c.bench_function("pack_pairs_wide", |b| {
        b.iter(|| pack_pairs(black_box(&wide), black_box(1)))
    });
}

criterion_group!(benches, bench_uniform_run, bench_pack_pairs);
criterion_main!(benches);
