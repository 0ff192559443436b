// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dacviz_trace::{DataPoint, closest_pair_trace, karatsuba};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn next_digit(&mut self) -> char {
        char::from(b'0' + (self.next_u64() % 10) as u8)
    }
}

fn gen_random_points(count: usize, extent: f64) -> Vec<DataPoint> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    DataPoint::from_coords((0..count).map(|_| (rng.next_f64() * extent, rng.next_f64() * extent)))
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<DataPoint> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    let mut coords = Vec::with_capacity(n_clusters * per_cluster);
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            coords.push((cx + dx, cy + dy));
        }
    }
    DataPoint::from_coords(coords)
}

fn gen_digits(len: usize, seed: u64) -> String {
    let mut rng = Rng::new(seed);
    (0..len).map(|_| rng.next_digit()).collect()
}

fn bench_closest_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair_trace");
    for n in [16, 128, 1024] {
        let pts = gen_random_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("uniform", n), &pts, |b, pts| {
            b.iter(|| black_box(closest_pair_trace(pts)));
        });
    }
    let clustered = gen_clustered_points(16, 64, 20.0);
    group.bench_function("clustered_1024", |b| {
        b.iter(|| black_box(closest_pair_trace(&clustered)));
    });
    group.finish();
}

fn bench_karatsuba(c: &mut Criterion) {
    let mut group = c.benchmark_group("karatsuba");
    for len in [8, 64, 256] {
        let x = gen_digits(len, 0xBADC_F00D_1234_5678);
        let y = gen_digits(len, 0xFACE_FEED_CAFE_BABE);
        group.bench_with_input(BenchmarkId::new("equal", len), &(x, y), |b, (x, y)| {
            b.iter(|| black_box(karatsuba(x, y)));
        });
    }
    let long = gen_digits(200, 0x0123_4567_89AB_CDEF);
    let short = gen_digits(7, 0x0FED_CBA9_8765_4321);
    group.bench_function("unequal_200x7", |b| {
        b.iter(|| black_box(karatsuba(&long, &short)));
    });
    group.finish();
}

criterion_group!(benches, bench_closest_pair, bench_karatsuba);
criterion_main!(benches);
