// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use panzoom_gesture::GesturePhase;
use panzoom_view::{Overflow, Transform};

/// Snapshot of a [`crate::Viewer`]'s state, for overlays and logging.
///
/// The `Display` impl renders the same four lines a debug overlay shows:
///
/// ```text
/// top: -50
/// left: 0
/// scale: 2
/// overflow: top, right, bottom
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerDebugInfo {
    /// Current transform, `None` until initialized.
    pub transform: Option<Transform>,
    /// Current per-edge overflow, `None` until measured.
    pub overflow: Option<Overflow>,
    /// Resolved minimum scale.
    pub min_scale: f64,
    /// Configured maximum scale.
    pub max_scale: f64,
    /// Whether gestures are currently accepted.
    pub ready: bool,
    /// Whether an animation is in flight.
    pub animating: bool,
    /// Gesture currently being tracked.
    pub phase: GesturePhase,
}

impl ViewerDebugInfo {
    /// Names of the edges past which the image currently extends.
    #[must_use]
    pub fn overflowing_edges(&self) -> impl Iterator<Item = &'static str> {
        let o = self.overflow.unwrap_or(Overflow::ZERO);
        [
            (o.top, "top"),
            (o.right, "right"),
            (o.bottom, "bottom"),
            (o.left, "left"),
        ]
        .into_iter()
        .filter(|(amount, _)| *amount > 0.0)
        .map(|(_, name)| name)
    }
}

impl fmt::Display for ViewerDebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(t) = self.transform else {
            return f.write_str("uninitialized");
        };
        writeln!(f, "top: {}", t.top)?;
        writeln!(f, "left: {}", t.left)?;
        writeln!(f, "scale: {}", t.scale)?;
        f.write_str("overflow: ")?;
        let mut any = false;
        for edge in self.overflowing_edges() {
            if any {
                f.write_str(", ")?;
            }
            f.write_str(edge)?;
            any = true;
        }
        if !any {
            f.write_str("none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use panzoom_gesture::GesturePhase;
    use panzoom_view::{Overflow, Transform};

    use super::ViewerDebugInfo;

    fn info(transform: Option<Transform>, overflow: Option<Overflow>) -> ViewerDebugInfo {
        ViewerDebugInfo {
            transform,
            overflow,
            min_scale: 1.0,
            max_scale: 4.0,
            ready: transform.is_some(),
            animating: false,
            phase: GesturePhase::Idle,
        }
    }

    #[test]
    fn lists_overflowing_edges() {
        let overflow = Overflow {
            top: 50.0,
            right: 25.0,
            bottom: 0.0,
            left: 0.0,
        };
        let text = info(Some(Transform::new(-50.0, 0.0, 2.0)), Some(overflow)).to_string();
        assert_eq!(text, "top: -50\nleft: 0\nscale: 2\noverflow: top, right");
    }

    #[test]
    fn no_overflow_reads_none() {
        let text = info(Some(Transform::IDENTITY), Some(Overflow::ZERO)).to_string();
        assert!(text.ends_with("overflow: none"), "{text}");
    }

    #[test]
    fn uninitialized_is_explicit() {
        assert_eq!(info(None, None).to_string(), "uninitialized");
    }
}
