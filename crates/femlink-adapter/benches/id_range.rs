// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmarks for ID list token decoding and encoding.
//!
//! Run with: cargo bench -p femlink-adapter

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use femlink_adapter::id_range;

/// Boundary-style token: alternating single IDs and short runs
fn mixed_token(groups: u32) -> String {
    (0..groups)
        .map(|i| {
            let base = i * 10 + 1;
            if i % 2 == 0 {
                base.to_string()
            } else {
                format!("{}-{}", base, base + 4)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, token) in [
        ("single", "42".to_string()),
        ("range", "1-500".to_string()),
        ("list", (1..=200).map(|i| (i * 3).to_string()).collect::<Vec<_>>().join(",")),
        ("mixed", mixed_token(200)),
    ] {
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| id_range::decode(black_box(&token)));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let contiguous: Vec<u32> = (1..=1000).collect();
    let sparse: Vec<u32> = (1..=1000).map(|i| i * 2).collect();
    let mixed = id_range::decode(&mixed_token(200)).unwrap_or_default();

    for (name, ids) in [("contiguous", &contiguous), ("sparse", &sparse), ("mixed", &mixed)] {
        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| id_range::encode(black_box(ids)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
