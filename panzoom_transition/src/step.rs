// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use panzoom_view::Transform;

/// Fraction of the remaining distance covered per frame by default.
pub const DEFAULT_SPEED: f64 = 0.1;

/// Offsets closer than this many pixels to their target jump to it.
pub const OFFSET_SNAP: f64 = 1.0;

/// Scales closer than this to their target jump to it.
pub const SCALE_SNAP: f64 = 0.001;

/// Returns `target` when `value` is strictly within `epsilon` of it, else `value`.
#[must_use]
pub fn snap_to_target(value: f64, target: f64, epsilon: f64) -> f64 {
    if (target - value).abs() < epsilon {
        target
    } else {
        value
    }
}

/// Advances `current` one frame towards `target`.
///
/// Each field covers `speed` of its remaining distance and snaps once it is
/// within [`OFFSET_SNAP`] (offsets) or [`SCALE_SNAP`] (scale). Since the
/// remaining distance shrinks geometrically and never changes sign for
/// `speed` in `(0, 1]`, repeated steps reach `target` exactly without
/// oscillating.
#[must_use]
pub fn step(current: &Transform, target: &Transform, speed: f64) -> Transform {
    let advance = |from: f64, to: f64, epsilon: f64| {
        snap_to_target(from + (to - from) * speed, to, epsilon)
    };
    Transform::new(
        advance(current.top, target.top, OFFSET_SNAP),
        advance(current.left, target.left, OFFSET_SNAP),
        advance(current.scale, target.scale, SCALE_SNAP),
    )
}

/// Clamps a requested speed into `(0, 1]`.
///
/// Non-finite or non-positive values fall back to [`DEFAULT_SPEED`].
#[must_use]
pub fn sanitize_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed.min(1.0)
    } else {
        DEFAULT_SPEED
    }
}

#[cfg(test)]
mod tests {
    use panzoom_view::Transform;

    use super::{DEFAULT_SPEED, sanitize_speed, snap_to_target, step};

    #[test]
    fn snap_is_strict() {
        assert_eq!(snap_to_target(9.5, 10.0, 1.0), 10.0);
        assert_eq!(snap_to_target(9.0, 10.0, 1.0), 9.0);
        assert_eq!(snap_to_target(10.9995, 11.0, 0.001), 11.0);
    }

    #[test]
    fn step_covers_fraction_of_remaining_distance() {
        let next = step(
            &Transform::new(0.0, 100.0, 1.0),
            &Transform::new(100.0, 0.0, 2.0),
            0.1,
        );
        assert!((next.top - 10.0).abs() < 1e-9);
        assert!((next.left - 90.0).abs() < 1e-9);
        assert!((next.scale - 1.1).abs() < 1e-9);
    }

    #[test]
    fn full_speed_lands_on_target() {
        let target = Transform::new(-40.0, 12.0, 3.0);
        assert_eq!(step(&Transform::IDENTITY, &target, 1.0), target);
    }

    #[test]
    fn repeated_steps_converge_monotonically() {
        let target = Transform::new(-50.0, -50.0, 2.0);
        let mut current = Transform::IDENTITY;
        let mut steps = 0;
        while current != target {
            let next = step(&current, &target, DEFAULT_SPEED);
            assert!(next.scale >= current.scale, "scale moved backwards");
            assert!(next.scale <= target.scale, "scale overshot");
            assert!(next.top <= current.top && next.top >= target.top);
            current = next;
            steps += 1;
            assert!(steps < 100, "did not terminate");
        }
    }

    #[test]
    fn speed_is_sanitized() {
        assert_eq!(sanitize_speed(0.25), 0.25);
        assert_eq!(sanitize_speed(4.0), 1.0);
        assert_eq!(sanitize_speed(0.0), DEFAULT_SPEED);
        assert_eq!(sanitize_speed(-1.0), DEFAULT_SPEED);
        assert_eq!(sanitize_speed(f64::NAN), DEFAULT_SPEED);
    }
}
