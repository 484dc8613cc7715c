// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panzoom_transition::{Animator, DEFAULT_SPEED, Frame};
use panzoom_view::Transform;

fn run_to_completion(from: Transform, to: Transform, speed: f64) -> (Transform, u32) {
    let mut animator = Animator::new();
    let Some(handle) = animator.start(&from, to, speed) else {
        return (from, 0);
    };
    let mut current = from;
    let mut frames = 0;
    loop {
        frames += 1;
        match animator.tick(handle, &current) {
            Frame::Continue(next) => current = next,
            Frame::Finished(last) => return (last, frames),
            Frame::Stale => return (current, frames),
        }
    }
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_transition");

    for speed in [DEFAULT_SPEED, 0.25, 0.5] {
        group.bench_function(format!("reset_from_zoomed(speed={speed})"), |b| {
            b.iter(|| {
                black_box(run_to_completion(
                    black_box(Transform::new(-1_200.0, -900.0, 4.0)),
                    Transform::new(0.0, 0.0, 1.0),
                    speed,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_animation);
criterion_main!(benches);
