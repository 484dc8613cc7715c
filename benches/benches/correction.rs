// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use panzoom_view::{ConstraintEngine, Constraints, Placement, ScaleSpec, Transform};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn requests(count: usize, seed: u64) -> Vec<Transform> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            Transform::new(
                rng.next_f64() * 4_000.0 - 3_000.0,
                rng.next_f64() * 4_000.0 - 3_000.0,
                rng.next_f64() * 6.0,
            )
        })
        .collect()
}

fn engine(placement: Placement) -> ConstraintEngine {
    let mut engine = ConstraintEngine::new(Constraints {
        min_scale: ScaleSpec::Auto,
        max_scale: 4.0,
        placement,
        ..Constraints::default()
    });
    engine.set_dimensions(Size::new(800.0, 600.0), Size::new(1920.0, 1080.0));
    engine
}

fn bench_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_view");
    let batch = requests(1_024, 0x9A2_0000_0000_0001);

    for (name, placement) in [("center", Placement::Center), ("top_left", Placement::TopLeft)] {
        let engine = engine(placement);
        group.bench_function(format!("correct_1024({name})"), |b| {
            b.iter(|| {
                let mut corrected = 0_usize;
                for t in &batch {
                    if engine.correct(black_box(t), 0.05).is_some() {
                        corrected += 1;
                    }
                }
                black_box(corrected);
            });
        });
    }

    let engine = engine(Placement::Center);
    group.bench_function("zoom_1024", |b| {
        b.iter(|| {
            let mut t = Transform::new(0.0, 0.0, 1.0);
            for i in 0..1_024 {
                let factor = if i % 2 == 0 { 1.1 } else { 0.95 };
                t = engine.zoom(&t, t.scale * factor, Point::new(400.0, 300.0), 0.0);
            }
            black_box(t);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_correction);
criterion_main!(benches);
