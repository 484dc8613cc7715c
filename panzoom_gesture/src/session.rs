// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture scratch state: pan anchor, pinch length and last pointer-up.
//!
//! ## Usage
//!
//! 1) Anchor a pan with [`GestureSession::begin_pan`] on pointer down.
//! 2) On each move, call [`GestureSession::pan_to`] to get the delta since the last position.
//! 3) When two touches land, call [`GestureSession::begin_pinch`]; on each change
//!    call [`GestureSession::pinch_to`] to get the scale ratio.
//! 4) Feed every pointer-up to [`GestureSession::register_pointer_up`] to detect double taps.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use panzoom_gesture::GestureSession;
//!
//! let mut session = GestureSession::default();
//! session.begin_pan(Point::new(10.0, 20.0));
//!
//! let delta = session.pan_to(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! session.begin_pinch(100.0);
//! assert!(session.pan_anchor().is_none());
//! assert_eq!(session.pinch_to(150.0, Point::new(0.0, 0.0)), 1.5);
//! ```

use kurbo::{Point, Vec2};

use crate::constants::{DOUBLE_TAP_SLOP, DOUBLE_TAP_THRESHOLD_MS};

/// The gesture a [`GestureSession`] is currently tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A single pointer is dragging the image.
    Panning,
    /// Two touches are pinching.
    Pinching,
}

/// A recorded pointer-up, used to recognize double taps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerUp {
    /// Host timestamp in milliseconds.
    pub timestamp: u64,
    /// Container-relative position, when the host reported one.
    pub position: Option<Point>,
}

/// Gesture-local state owned by a [`crate::GestureInterpreter`].
///
/// All fields are reset at gesture boundaries; nothing here outlives the
/// viewer it belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    last_pan_position: Option<Point>,
    last_pinch_length: Option<f64>,
    last_pinch_midpoint: Option<Point>,
    last_pointer_up: Option<PointerUp>,
    mouse_down: bool,
}

impl GestureSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gesture currently being tracked.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.last_pinch_length.is_some() {
            GesturePhase::Pinching
        } else if self.last_pan_position.is_some() {
            GesturePhase::Panning
        } else {
            GesturePhase::Idle
        }
    }

    /// Last recorded pan position.
    #[must_use]
    pub fn pan_anchor(&self) -> Option<Point> {
        self.last_pan_position
    }

    /// Last recorded distance between the two pinch touches.
    #[must_use]
    pub fn pinch_length(&self) -> Option<f64> {
        self.last_pinch_length
    }

    /// Last recorded pinch midpoint.
    #[must_use]
    pub fn pinch_midpoint(&self) -> Option<Point> {
        self.last_pinch_midpoint
    }

    /// Last recorded pointer-up.
    #[must_use]
    pub fn last_pointer_up(&self) -> Option<PointerUp> {
        self.last_pointer_up
    }

    /// Returns `true` while the primary mouse button is held on the image.
    #[must_use]
    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Records whether the primary mouse button is held.
    pub fn set_mouse_down(&mut self, down: bool) {
        self.mouse_down = down;
    }

    /// Anchors a pan at `position` and ends any pinch.
    pub fn begin_pan(&mut self, position: Point) {
        self.last_pan_position = Some(position);
        self.last_pinch_length = None;
        self.last_pinch_midpoint = None;
    }

    /// Moves the pan anchor to `position`, returning the delta since the last
    /// anchor.
    ///
    /// Without an anchor (for example right after one finger of a pinch was
    /// lifted) this only anchors and returns `None`, so the image does not jump.
    pub fn pan_to(&mut self, position: Point) -> Option<Vec2> {
        let delta = self.last_pan_position.map(|last| position - last);
        self.last_pan_position = Some(position);
        delta
    }

    /// Forgets the pan anchor.
    pub fn end_pan(&mut self) {
        self.last_pan_position = None;
    }

    /// Starts tracking a pinch with the given touch distance.
    ///
    /// Clears the pan anchor so that lifting one finger re-anchors the pan.
    pub fn begin_pinch(&mut self, length: f64) {
        self.last_pinch_length = Some(length);
        self.last_pinch_midpoint = None;
        self.last_pan_position = None;
    }

    /// Updates the pinch with a new touch distance and midpoint, returning the
    /// scale ratio relative to the previous distance.
    ///
    /// A change that arrives before any start (or after a zero-length start)
    /// yields `1.0`, so the scale is left unchanged.
    pub fn pinch_to(&mut self, length: f64, midpoint: Point) -> f64 {
        let ratio = match self.last_pinch_length {
            Some(last) if last > 0.0 && length.is_finite() => length / last,
            _ => 1.0,
        };
        self.last_pinch_length = Some(length);
        self.last_pinch_midpoint = Some(midpoint);
        ratio
    }

    /// Forgets the pinch state.
    pub fn end_pinch(&mut self) {
        self.last_pinch_length = None;
        self.last_pinch_midpoint = None;
    }

    /// Records a pointer-up and returns `true` if it completes a double tap.
    ///
    /// A double tap is a second pointer-up less than
    /// [`DOUBLE_TAP_THRESHOLD_MS`] after the first and within
    /// [`DOUBLE_TAP_SLOP`] of it (when both positions are known). A completed
    /// double tap is consumed, so a third tap starts a new sequence.
    pub fn register_pointer_up(&mut self, timestamp: u64, position: Option<Point>) -> bool {
        let is_double = self.last_pointer_up.is_some_and(|prev| {
            let in_time = timestamp >= prev.timestamp
                && timestamp - prev.timestamp < DOUBLE_TAP_THRESHOLD_MS;
            let in_place = match (prev.position, position) {
                (Some(a), Some(b)) => a.distance(b) <= DOUBLE_TAP_SLOP,
                _ => true,
            };
            in_time && in_place
        });
        self.last_pointer_up = if is_double {
            None
        } else {
            Some(PointerUp {
                timestamp,
                position,
            })
        };
        is_double
    }

    /// Resets every field, including the pointer-up history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
