// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dacviz_canvas::{CanvasConfig, DisplayList};
use dacviz_player::{Animator, CanvasSurface, PairPresenter, Recorder};
use dacviz_trace::{DataPoint, closest_pair_trace};

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
}

fn gen_random_points(count: usize) -> Vec<DataPoint> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    DataPoint::from_coords((0..count).map(|_| (rng.next_f64() * 500.0, rng.next_f64() * 300.0)))
}

fn bench_mapping(c: &mut Criterion) {
    let config = CanvasConfig::default();
    let pts = gen_random_points(1024);
    c.bench_function("mapping_1024", |b| {
        b.iter(|| black_box(config.mapping(&pts)));
    });
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_256");
    let config = CanvasConfig::default();
    let pts = gen_random_points(256);
    let run = closest_pair_trace(&pts);
    let mapping = config.mapping(&pts);
    let painter = config.painter(&mapping);
    let animator = Animator::new();

    group.bench_function("present_only", |b| {
        b.iter_batched(
            Recorder::default,
            |mut rec| {
                let out = animator.animate(
                    &run.trace,
                    Duration::ZERO,
                    &mut PairPresenter::new(&mapping),
                    &mut rec,
                );
                black_box((out, rec.lines.len()))
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("present_and_paint", |b| {
        b.iter_batched(
            || CanvasSurface::new(&painter, DisplayList::new(config.size)),
            |mut surface| {
                let out = animator.animate(
                    &run.trace,
                    Duration::ZERO,
                    &mut PairPresenter::new(&mapping),
                    &mut surface,
                );
                black_box((out, surface.canvas().frames()))
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_mapping, bench_replay);
criterion_main!(benches);
