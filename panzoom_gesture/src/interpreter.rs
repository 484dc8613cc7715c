// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use panzoom_view::geometry::{pinch_length, pinch_midpoint};
use panzoom_view::{ConstraintEngine, Transform};

use crate::constants::{
    BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, DOUBLE_TAP_ZOOM, OVERZOOM_TOLERANCE, WHEEL_ZOOM_IN,
    WHEEL_ZOOM_OUT,
};
use crate::intent::PanIntent;
use crate::session::GestureSession;

/// What a double tap or double click does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DoubleTapBehavior {
    /// Animate back to the initial transform.
    #[default]
    Reset,
    /// Zoom in around the tap point, or reset once close to the maximum scale.
    Zoom,
}

/// Mouse buttons the interpreter distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Usually the left button; starts a pan.
    Primary,
    /// Usually the wheel button; resets the view.
    Auxiliary,
    /// Any other button; ignored.
    Other,
}

/// How a requested transform should reach the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Replace the current transform right away.
    Immediate,
    /// Interpolate towards the target over several frames.
    Animated,
}

/// A change the interpreter asks its owner to make.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Request {
    /// Move to an already-constrained transform.
    Transform {
        /// Target transform.
        transform: Transform,
        /// How to get there.
        motion: Motion,
    },
    /// Return to the initial transform.
    Reset {
        /// How to get there.
        motion: Motion,
    },
}

/// Result of feeding one input event to a [`GestureInterpreter`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureOutcome {
    /// Transform change to apply, if any.
    pub request: Option<Request>,
    /// Direction of a pan move, for hosts that manage native scrolling.
    pub intent: Option<PanIntent>,
    /// Whether the host should cancel the native event (`preventDefault`).
    pub cancel_native: bool,
}

impl GestureOutcome {
    const NONE: Self = Self {
        request: None,
        intent: None,
        cancel_native: false,
    };

    fn with_request(request: Option<Request>) -> Self {
        Self {
            request,
            ..Self::NONE
        }
    }

    fn cancelling(mut self) -> Self {
        self.cancel_native = true;
        self
    }
}

/// Maps raw pointer, touch and wheel input to constraint-engine requests.
///
/// Every entry point takes the engine and the current transform, and returns a
/// [`GestureOutcome`]. The interpreter never mutates the transform itself, so
/// the owner stays the single writer and decides whether to animate.
///
/// Positions are container-relative; use
/// [`panzoom_view::geometry::relative_position`] to convert client coordinates.
/// When the engine is unmeasured, entry points that need geometry are inert.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    session: GestureSession,
    double_tap: DoubleTapBehavior,
}

impl GestureInterpreter {
    /// Creates an interpreter with the given double-tap behavior.
    #[must_use]
    pub fn new(double_tap: DoubleTapBehavior) -> Self {
        Self {
            session: GestureSession::new(),
            double_tap,
        }
    }

    /// Returns the gesture scratch state.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Returns the configured double-tap behavior.
    #[must_use]
    pub fn double_tap_behavior(&self) -> DoubleTapBehavior {
        self.double_tap
    }

    /// Changes the double-tap behavior.
    pub fn set_double_tap_behavior(&mut self, behavior: DoubleTapBehavior) {
        self.double_tap = behavior;
    }

    /// Forgets all gesture state.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Anchors a pan at `position` (mouse down or single touch).
    pub fn pointer_down(&mut self, position: Point) {
        self.session.begin_pan(position);
    }

    /// Pans by the movement since the last recorded position.
    ///
    /// Panning never overshoots (tolerance `0`). Without a recorded position
    /// this re-anchors and requests nothing.
    pub fn pan(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        position: Point,
    ) -> GestureOutcome {
        if !engine.is_measured() {
            return GestureOutcome::NONE;
        }
        let Some(delta) = self.session.pan_to(position) else {
            return GestureOutcome::NONE;
        };
        let transform = engine.constrain_transform(current.translated(delta), 0.0);
        GestureOutcome {
            request: changed(current, transform, Motion::Immediate),
            intent: Some(PanIntent::from_delta(delta)),
            cancel_native: false,
        }
    }

    /// Handles touches landing on the image.
    ///
    /// Two touches start a pinch; one touch starts a pan.
    pub fn touch_start(&mut self, touches: &[Point]) -> GestureOutcome {
        match touches {
            [a, b, ..] => {
                self.session.begin_pinch(pinch_length(*a, *b));
                GestureOutcome::NONE
            }
            [only] => {
                self.session.end_pinch();
                self.pointer_down(*only);
                // Suppress emulated mouse events.
                GestureOutcome::NONE.cancelling()
            }
            [] => GestureOutcome::NONE,
        }
    }

    /// Handles moving touches.
    ///
    /// Two touches zoom around their midpoint with [`OVERZOOM_TOLERANCE`];
    /// one touch pans. For a pan, `cancel_native` is set only when the image
    /// can actually move the way the finger pushes.
    pub fn touch_move(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        touches: &[Point],
    ) -> GestureOutcome {
        match touches {
            [a, b, ..] => self.pinch_change(engine, current, *a, *b).cancelling(),
            [only] => {
                let mut outcome = self.pan(engine, current, *only);
                if let (Some(intent), Some(overflow)) = (outcome.intent, engine.overflow(current))
                {
                    outcome.cancel_native = intent.should_cancel_native(&overflow);
                }
                outcome
            }
            [] => GestureOutcome::NONE,
        }
    }

    /// Zooms by the change in distance between two touches.
    pub fn pinch_change(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        a: Point,
        b: Point,
    ) -> GestureOutcome {
        if !engine.is_measured() {
            return GestureOutcome::NONE;
        }
        let midpoint = pinch_midpoint(a, b);
        let ratio = self.session.pinch_to(pinch_length(a, b), midpoint);
        let transform = engine.zoom(
            current,
            current.scale * ratio,
            midpoint,
            OVERZOOM_TOLERANCE,
        );
        GestureOutcome::with_request(changed(current, transform, Motion::Immediate))
    }

    /// Handles touches leaving the image.
    ///
    /// `remaining` is the number of touches still down, `lifted` the
    /// container-relative positions of the touches that just ended. When the
    /// last finger lifts, a single lifted touch is checked for a double tap.
    /// Any overshoot left by a pinch is animated back into bounds, even while
    /// other fingers stay down.
    pub fn touch_end(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        remaining: usize,
        lifted: &[Point],
        timestamp: u64,
    ) -> GestureOutcome {
        self.session.end_pinch();
        // The next move re-anchors the pan.
        self.session.end_pan();

        let mut outcome = GestureOutcome::NONE;
        if remaining == 0
            && let [position] = lifted
        {
            if self.session.register_pointer_up(timestamp, Some(*position)) {
                log::debug!("double tap at ({}, {})", position.x, position.y);
                outcome.request = self.double_tap_request(engine, current, Some(*position));
            }
            // Suppress emulated mouse events.
            outcome.cancel_native = true;
        }
        if outcome.request.is_none() {
            outcome.request = settle_request(engine, current);
        }
        outcome
    }

    /// Handles a mouse button going down on the image.
    ///
    /// The primary button anchors a pan; the auxiliary button resets the view.
    pub fn mouse_down(&mut self, button: MouseButton, position: Point) -> GestureOutcome {
        match button {
            MouseButton::Primary => {
                self.session.set_mouse_down(true);
                self.pointer_down(position);
                GestureOutcome::NONE
            }
            MouseButton::Auxiliary => {
                log::debug!("auxiliary button reset");
                GestureOutcome::with_request(Some(Request::Reset {
                    motion: Motion::Immediate,
                }))
            }
            MouseButton::Other => GestureOutcome::NONE,
        }
    }

    /// Handles mouse movement; pans only while a button is held.
    pub fn mouse_move(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        buttons_held: bool,
        position: Point,
    ) -> GestureOutcome {
        if !buttons_held || !self.session.is_mouse_down() {
            self.session.set_mouse_down(false);
            return GestureOutcome::NONE;
        }
        self.pan(engine, current, position)
    }

    /// Handles the mouse button being released at `position`.
    ///
    /// With a `timestamp`, releases of the primary button feed double-click
    /// detection the same way lifted touches do. Hosts that also forward
    /// platform double-click events to [`Self::double_click`] pass `None`.
    pub fn mouse_up(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        position: Point,
        timestamp: Option<u64>,
    ) -> GestureOutcome {
        let was_down = self.session.is_mouse_down();
        self.session.set_mouse_down(false);
        self.session.end_pan();

        if let Some(timestamp) = timestamp
            && was_down
            && self.session.register_pointer_up(timestamp, Some(position))
        {
            log::debug!("double click at ({}, {})", position.x, position.y);
            return GestureOutcome::with_request(self.double_tap_request(
                engine,
                current,
                Some(position),
            ));
        }
        GestureOutcome::NONE
    }

    /// Handles a double click (or a recognized double tap) at `position`.
    pub fn double_click(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        position: Option<Point>,
    ) -> GestureOutcome {
        GestureOutcome::with_request(self.double_tap_request(engine, current, position))
    }

    /// Handles a wheel step at `position`.
    ///
    /// Positive `delta_y` zooms out and negative zooms in, without overshoot.
    /// `cancel_native` is set only when the transform actually changed.
    pub fn wheel(
        &mut self,
        engine: &ConstraintEngine,
        current: &Transform,
        delta_y: f64,
        position: Point,
    ) -> GestureOutcome {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else if delta_y < 0.0 {
            WHEEL_ZOOM_IN
        } else {
            return GestureOutcome::NONE;
        };
        let request = zoom_request(engine, current, factor, Some(position), Motion::Immediate);
        let outcome = GestureOutcome::with_request(request);
        if request.is_some() {
            outcome.cancelling()
        } else {
            outcome
        }
    }

    /// Zooms in around `pivot`, or the container center, for a zoom button.
    #[must_use]
    pub fn zoom_in(
        &self,
        engine: &ConstraintEngine,
        current: &Transform,
        pivot: Option<Point>,
    ) -> Option<Request> {
        zoom_request(engine, current, BUTTON_ZOOM_IN, pivot, Motion::Immediate)
    }

    /// Zooms out around `pivot`, or the container center, for a zoom button.
    #[must_use]
    pub fn zoom_out(
        &self,
        engine: &ConstraintEngine,
        current: &Transform,
        pivot: Option<Point>,
    ) -> Option<Request> {
        zoom_request(engine, current, BUTTON_ZOOM_OUT, pivot, Motion::Immediate)
    }

    fn double_tap_request(
        &self,
        engine: &ConstraintEngine,
        current: &Transform,
        position: Option<Point>,
    ) -> Option<Request> {
        if !engine.is_measured() {
            return None;
        }
        let can_zoom = current.scale * (1.0 + OVERZOOM_TOLERANCE) < engine.max_scale();
        if self.double_tap == DoubleTapBehavior::Zoom && can_zoom {
            zoom_request(engine, current, DOUBLE_TAP_ZOOM, position, Motion::Animated)
        } else {
            Some(Request::Reset {
                motion: Motion::Animated,
            })
        }
    }
}

fn zoom_request(
    engine: &ConstraintEngine,
    current: &Transform,
    factor: f64,
    pivot: Option<Point>,
    motion: Motion,
) -> Option<Request> {
    let pivot = pivot.or_else(|| engine.container_center())?;
    if !engine.is_measured() {
        return None;
    }
    let transform = engine.zoom(current, current.scale * factor, pivot, 0.0);
    changed(current, transform, motion)
}

fn settle_request(engine: &ConstraintEngine, current: &Transform) -> Option<Request> {
    if !engine.is_measured() {
        return None;
    }
    engine
        .correct(current, 0.0)
        .map(|transform| Request::Transform {
            transform,
            motion: Motion::Animated,
        })
}

fn changed(current: &Transform, transform: Transform, motion: Motion) -> Option<Request> {
    if transform.approx_eq(current) {
        None
    } else {
        Some(Request::Transform { transform, motion })
    }
}
