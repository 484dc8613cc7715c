// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native pan permissions derived from overflow.
//!
//! Hosts decide how to suppress native scrolling (CSS `touch-action`, manual
//! `preventDefault`, or nothing). This module only computes which native pan
//! directions are free because the image cannot move that way.

use core::fmt;

use bitflags::bitflags;
use kurbo::Vec2;
use panzoom_view::Overflow;

/// Directions a pan gesture pushes towards, in pixels.
///
/// Each field names the edge of the image being revealed: dragging the finger
/// downwards reveals the top of the image and yields a positive `up`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanIntent {
    /// Movement revealing the top edge.
    pub up: f64,
    /// Movement revealing the bottom edge.
    pub down: f64,
    /// Movement revealing the left edge.
    pub left: f64,
    /// Movement revealing the right edge.
    pub right: f64,
}

impl PanIntent {
    /// Splits a pointer delta into directional components.
    #[must_use]
    pub fn from_delta(delta: Vec2) -> Self {
        Self {
            up: delta.y.max(0.0),
            down: (-delta.y).max(0.0),
            left: delta.x.max(0.0),
            right: (-delta.x).max(0.0),
        }
    }

    /// Horizontal magnitude.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Vertical magnitude.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.up + self.down
    }

    /// Returns `true` if the image can move in a direction this intent pushes.
    #[must_use]
    pub fn has_room_x(&self, overflow: &Overflow) -> bool {
        (self.left > 0.0 && overflow.left > 0.0) || (self.right > 0.0 && overflow.right > 0.0)
    }

    /// Vertical counterpart of [`PanIntent::has_room_x`].
    #[must_use]
    pub fn has_room_y(&self, overflow: &Overflow) -> bool {
        (self.up > 0.0 && overflow.top > 0.0) || (self.down > 0.0 && overflow.bottom > 0.0)
    }

    /// Decides whether a single-touch move should be withheld from the host's
    /// native scrolling.
    ///
    /// The browser keeps the event when the image has no room in either pushed
    /// direction, or when the gesture is dominated (more than twice) by an axis
    /// on which the image has no room.
    #[must_use]
    pub fn should_cancel_native(&self, overflow: &Overflow) -> bool {
        let room_x = self.has_room_x(overflow);
        let room_y = self.has_room_y(overflow);
        if !room_x && !room_y {
            return false;
        }
        let pan_x = self.horizontal();
        let pan_y = self.vertical();
        if pan_y > 2.0 * pan_x && !room_y {
            return false;
        }
        if pan_x > 2.0 * pan_y && !room_x {
            return false;
        }
        true
    }
}

bitflags! {
    /// Native pan directions the host may leave to the platform.
    ///
    /// A direction is free when the image has no overflow on the edge that
    /// direction would reveal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NativePan: u8 {
        /// Revealing the left side is free.
        const PAN_LEFT = 1 << 0;
        /// Revealing the right side is free.
        const PAN_RIGHT = 1 << 1;
        /// Revealing the top side is free.
        const PAN_UP = 1 << 2;
        /// Revealing the bottom side is free.
        const PAN_DOWN = 1 << 3;
        /// Both horizontal directions.
        const PAN_X = Self::PAN_LEFT.bits() | Self::PAN_RIGHT.bits();
        /// Both vertical directions.
        const PAN_Y = Self::PAN_UP.bits() | Self::PAN_DOWN.bits();
    }
}

impl NativePan {
    /// Computes the free native pan directions for `overflow`.
    ///
    /// `None` (no measurement yet) frees nothing.
    #[must_use]
    pub fn from_overflow(overflow: Option<&Overflow>) -> Self {
        let Some(o) = overflow else {
            return Self::empty();
        };
        let mut pan = Self::empty();
        pan.set(Self::PAN_LEFT, o.left <= 0.0);
        pan.set(Self::PAN_RIGHT, o.right <= 0.0);
        pan.set(Self::PAN_UP, o.top <= 0.0);
        pan.set(Self::PAN_DOWN, o.bottom <= 0.0);
        pan
    }

    fn x_keyword(self) -> Option<&'static str> {
        if self.contains(Self::PAN_X) {
            Some("pan-x")
        } else if self.contains(Self::PAN_LEFT) {
            Some("pan-left")
        } else if self.contains(Self::PAN_RIGHT) {
            Some("pan-right")
        } else {
            None
        }
    }

    fn y_keyword(self) -> Option<&'static str> {
        if self.contains(Self::PAN_Y) {
            Some("pan-y")
        } else if self.contains(Self::PAN_UP) {
            Some("pan-up")
        } else if self.contains(Self::PAN_DOWN) {
            Some("pan-down")
        } else {
            None
        }
    }
}

/// Renders a CSS `touch-action` value, e.g. `pan-x pan-up` or `none`.
///
/// Full axes collapse to `pan-x` / `pan-y` since browsers reject
/// `pan-left pan-right`.
impl fmt::Display for NativePan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.x_keyword(), self.y_keyword()) {
            (Some(x), Some(y)) => write!(f, "{x} {y}"),
            (Some(only), None) | (None, Some(only)) => f.write_str(only),
            (None, None) => f.write_str("none"),
        }
    }
}
