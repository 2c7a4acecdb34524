// Copyright 2026 the Sitegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sitegrid_geometry::{BoundingBox, BoxBounded};
use sitegrid_index::UniformGridIndex;

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

const EXTENT: BoundingBox = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0);

fn gen_random_boxes(count: usize, max_w: f64, max_h: f64) -> Vec<BoundingBox> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let w = 1.0 + rng.next_f64() * (max_w - 1.0);
        let h = 1.0 + rng.next_f64() * (max_h - 1.0);
        let x0 = rng.next_f64() * (EXTENT.width() - w);
        let y0 = rng.next_f64() * (EXTENT.depth() - h);
        out.push(BoundingBox::new(x0, y0, x0 + w, y0 + h));
    }
    out
}

fn gen_probe_points(count: usize) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0x5EED_0F_5A11);
    for _ in 0..count {
        out.push((
            rng.next_f64() * EXTENT.width(),
            rng.next_f64() * EXTENT.depth(),
        ));
    }
    out
}

fn linear_scan<'a>(objects: &'a [BoundingBox], x: f64, y: f64) -> Vec<&'a BoundingBox> {
    objects
        .iter()
        .filter(|o| o.bounding_box().contains_point(x, y))
        .collect()
}

fn bench_point_queries(c: &mut Criterion) {
    let probes = gen_probe_points(1024);
    for &n in &[1_000usize, 10_000, 100_000] {
        let objects = gen_random_boxes(n, 20.0, 20.0);
        let mut index = UniformGridIndex::new(n, EXTENT).unwrap();
        index.assign_objects_to_cells(&objects).unwrap();

        let mut group = c.benchmark_group(format!("point_query/{n}"));
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function("grid", |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(x, y) in &probes {
                    hits += index.find_objects_at(black_box(x), black_box(y)).len();
                }
                hits
            });
        });
        group.bench_function("linear_scan", |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(x, y) in &probes {
                    hits += linear_scan(&objects, black_box(x), black_box(y)).len();
                }
                hits
            });
        });
        group.finish();
    }
}

fn bench_assignment(c: &mut Criterion) {
    for &n in &[10_000usize, 100_000] {
        let objects = gen_random_boxes(n, 20.0, 20.0);
        let mut group = c.benchmark_group(format!("assign/{n}"));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function("grid", |b| {
            b.iter(|| {
                let mut index = UniformGridIndex::new(n, EXTENT).unwrap();
                index.assign_objects_to_cells(black_box(&objects)).unwrap();
                index.object_count()
            });
        });
        group.finish();
    }
}

criterion_group!(benches, bench_point_queries, bench_assignment);
criterion_main!(benches);
