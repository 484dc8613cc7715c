// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use panzoom::{MouseButton, Viewer, ViewerConfig};

fn ready_viewer() -> Viewer {
    let mut viewer = Viewer::new(ViewerConfig::new().with_min_scale(1.0).with_max_scale(4.0));
    viewer.on_dimensions_known(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    viewer.on_image_loaded();
    viewer
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_gesture");
    group.sample_size(50);

    group.bench_function("mouse_drag_512_moves", |b| {
        b.iter_batched(
            || {
                let mut viewer = ready_viewer();
                while viewer.zoom_in() {}
                viewer
            },
            |mut viewer| {
                let _ = viewer.mouse_down(MouseButton::Primary, Point::new(400.0, 300.0));
                for i in 0..512 {
                    let t = f64::from(i) * 0.05;
                    let p = Point::new(400.0 + 300.0 * t.sin(), 300.0 + 200.0 * t.cos());
                    black_box(viewer.mouse_move(true, p));
                }
                let _ = viewer.mouse_up(Point::new(400.0, 300.0), None);
                black_box(viewer);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pinch_512_changes", |b| {
        b.iter_batched(
            ready_viewer,
            |mut viewer| {
                let center = Point::new(400.0, 300.0);
                let _ = viewer.touch_start(&[center - (20.0, 0.0), center + (20.0, 0.0)]);
                for i in 0..512 {
                    let spread = 20.0 + 200.0 * (f64::from(i) * 0.02).sin().abs();
                    black_box(
                        viewer.touch_move(&[center - (spread, 0.0), center + (spread, 0.0)]),
                    );
                }
                let _ = viewer.touch_end(0, &[center], 0);
                black_box(viewer);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_512_steps", |b| {
        b.iter_batched(
            ready_viewer,
            |mut viewer| {
                for i in 0..512 {
                    let delta = if (i / 32) % 2 == 0 { -1.0 } else { 1.0 };
                    black_box(viewer.wheel(delta, Point::new(123.0, 456.0)));
                }
                black_box(viewer);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
