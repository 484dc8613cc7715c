// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Size};
use panzoom_gesture::{
    GestureInterpreter, GestureOutcome, Motion, MouseButton, NativePan, PanIntent, Request,
};
use panzoom_transition::{AnimationHandle, Animator, Frame};
use panzoom_view::{ConfigError, ConstraintEngine, Overflow, Transform};

use crate::config::ViewerConfig;
use crate::debug::ViewerDebugInfo;

/// CSS transition applied to the image when [`ViewerConfig::animate`] is set.
pub const CSS_TRANSITION: &str = "all 0.15s ease-out";

/// What the host should do with the native event it just forwarded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[must_use]
pub struct InputResponse {
    /// Call `preventDefault` (or the platform equivalent).
    pub cancel_native: bool,
    /// Direction of a pan move, when the event panned.
    pub pan_intent: Option<PanIntent>,
}

impl From<GestureOutcome> for InputResponse {
    fn from(outcome: GestureOutcome) -> Self {
        Self {
            cancel_native: outcome.cancel_native,
            pan_intent: outcome.intent,
        }
    }
}

/// Enabled state of the zoom-out and zoom-in buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomButtons {
    /// `false` once the scale reached the minimum.
    pub zoom_out_enabled: bool,
    /// `false` once the scale reached the maximum.
    pub zoom_in_enabled: bool,
}

/// Outcome of [`Viewer::on_animation_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// A new transform was applied; schedule another frame.
    Continue,
    /// The target was reached; stop scheduling.
    Finished,
    /// The handle is no longer current; stop scheduling.
    Stale,
}

/// One image viewer: configuration, measurements, transform and gesture state.
///
/// The viewer is driven entirely by the host:
///
/// - Lifecycle: [`Viewer::on_image_loaded`], [`Viewer::on_dimensions_known`]
///   (on mount and every resize), [`Viewer::on_teardown`].
/// - Input: touch, mouse, wheel and double-click entry points, each returning
///   an [`InputResponse`]. Positions are container-relative.
/// - Animation: after any call, check [`Viewer::animation_handle`] and call
///   [`Viewer::on_animation_frame`] once per display refresh until it stops
///   returning [`FrameStatus::Continue`].
///
/// Until the image is loaded and both sizes are known, every entry point is
/// inert and [`Viewer::transform`] is `None`.
#[derive(Clone, Debug)]
pub struct Viewer {
    config: ViewerConfig,
    engine: ConstraintEngine,
    gestures: GestureInterpreter,
    animator: Animator,
    transform: Option<Transform>,
    image_loaded: bool,
    last_error: Option<ConfigError>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    /// Creates a viewer with `config`. Configuration problems are logged and
    /// kept in [`Viewer::last_error`].
    pub fn new(config: ViewerConfig) -> Self {
        let mut viewer = Self {
            config,
            engine: ConstraintEngine::new(config.constraints()),
            gestures: GestureInterpreter::new(config.double_tap_behavior),
            animator: Animator::new(),
            transform: None,
            image_loaded: false,
            last_error: None,
        };
        viewer.check_config();
        viewer
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replaces the configuration and re-validates the current transform.
    pub fn set_config(&mut self, config: ViewerConfig) {
        self.config = config;
        self.engine.set_constraints(config.constraints());
        self.gestures.set_double_tap_behavior(config.double_tap_behavior);
        self.check_config();
        self.reconcile();
    }

    /// Marks the image as loaded and reconciles with the known measurements.
    pub fn on_image_loaded(&mut self) {
        self.image_loaded = true;
        self.reconcile();
    }

    /// Records fresh container and image sizes.
    ///
    /// Unchanged sizes are a no-op once initialized. Otherwise the current
    /// transform is corrected for the new sizes, or the initial transform is
    /// applied if there is none yet.
    pub fn on_dimensions_known(&mut self, container: Size, image: Size) {
        let changed = self.engine.set_dimensions(container, image);
        if !changed && self.is_initialized() {
            return;
        }
        if changed {
            log::debug!(
                "dimensions changed: container {}x{}, image {}x{}",
                container.width,
                container.height,
                image.width,
                image.height
            );
        }
        self.reconcile();
    }

    /// Drops all state tied to the mounted image.
    pub fn on_teardown(&mut self) {
        log::debug!("viewer torn down");
        self.animator.cancel();
        self.gestures.reset();
        self.engine.clear_dimensions();
        self.transform = None;
        self.image_loaded = false;
    }

    /// Returns `true` once a transform exists for the current measurements.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.transform.is_some() && self.engine.is_measured()
    }

    /// Returns `true` when input is accepted: loaded, measured and initialized.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.image_loaded && self.is_initialized()
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.transform.filter(|_| self.engine.is_measured())
    }

    /// The current per-edge overflow.
    #[must_use]
    pub fn overflow(&self) -> Option<Overflow> {
        self.engine.overflow(&self.transform?)
    }

    /// Native pan directions the host may leave to the platform.
    #[must_use]
    pub fn native_pan(&self) -> NativePan {
        NativePan::from_overflow(self.overflow().as_ref())
    }

    /// The constraint engine, for hosts that need resolved bounds.
    #[must_use]
    pub fn engine(&self) -> &ConstraintEngine {
        &self.engine
    }

    /// The last configuration error, cleared once a valid initial transform
    /// is applied.
    #[must_use]
    pub fn last_error(&self) -> Option<&ConfigError> {
        self.last_error.as_ref()
    }

    /// Zoom button state, `None` when buttons are disabled or not ready.
    #[must_use]
    pub fn zoom_buttons(&self) -> Option<ZoomButtons> {
        if !self.config.zoom_buttons || !self.is_ready() {
            return None;
        }
        let scale = self.transform?.scale;
        Some(ZoomButtons {
            zoom_out_enabled: scale > self.engine.min_scale(),
            zoom_in_enabled: scale < self.engine.max_scale(),
        })
    }

    /// The transform as an affine map from image to container space.
    #[must_use]
    pub fn affine(&self) -> Option<Affine> {
        self.transform().map(|t| t.to_affine())
    }

    /// CSS `transform` value for the image, with `transform-origin: 0 0`.
    #[must_use]
    pub fn css_transform(&self) -> Option<String> {
        self.transform().map(|t| {
            format!(
                "translate3d({}px, {}px, 0) scale({})",
                t.left, t.top, t.scale
            )
        })
    }

    /// CSS `transition` value, when enabled.
    #[must_use]
    pub fn css_transition(&self) -> Option<&'static str> {
        self.config.animate.then_some(CSS_TRANSITION)
    }

    /// Snapshot of the viewer state.
    #[must_use]
    pub fn debug_info(&self) -> ViewerDebugInfo {
        ViewerDebugInfo {
            transform: self.transform(),
            overflow: self.overflow(),
            min_scale: self.engine.min_scale(),
            max_scale: self.engine.max_scale(),
            ready: self.is_ready(),
            animating: self.animator.is_animating(),
            phase: self.gestures.session().phase(),
        }
    }

    /// Handle of the animation in flight.
    #[must_use]
    pub fn animation_handle(&self) -> Option<AnimationHandle> {
        self.animator.handle()
    }

    /// Advances the animation identified by `handle` by one frame.
    pub fn on_animation_frame(&mut self, handle: AnimationHandle) -> FrameStatus {
        let Some(current) = self.transform else {
            self.animator.cancel();
            return FrameStatus::Stale;
        };
        match self.animator.tick(handle, &current) {
            Frame::Continue(next) => {
                self.transform = Some(next);
                FrameStatus::Continue
            }
            Frame::Finished(last) => {
                self.transform = Some(last);
                FrameStatus::Finished
            }
            Frame::Stale => FrameStatus::Stale,
        }
    }

    /// Touches landed on the image.
    pub fn touch_start(&mut self, touches: &[Point]) -> InputResponse {
        if !self.is_ready() {
            return InputResponse::default();
        }
        self.animator.cancel();
        self.gestures.touch_start(touches).into()
    }

    /// Touches moved; `touches` are all touches still down.
    pub fn touch_move(&mut self, touches: &[Point]) -> InputResponse {
        let Some(current) = self.ready_transform() else {
            return InputResponse::default();
        };
        let outcome = self.gestures.touch_move(&self.engine, &current, touches);
        self.dispatch(outcome)
    }

    /// Touches ended; `remaining` are still down, `lifted` just ended.
    pub fn touch_end(
        &mut self,
        remaining: usize,
        lifted: &[Point],
        timestamp: u64,
    ) -> InputResponse {
        let Some(current) = self.ready_transform() else {
            return InputResponse::default();
        };
        let outcome = self
            .gestures
            .touch_end(&self.engine, &current, remaining, lifted, timestamp);
        self.dispatch(outcome)
    }

    /// A mouse button went down on the image.
    pub fn mouse_down(&mut self, button: MouseButton, position: Point) -> InputResponse {
        if !self.is_ready() {
            return InputResponse::default();
        }
        self.animator.cancel();
        let outcome = self.gestures.mouse_down(button, position);
        self.dispatch(outcome)
    }

    /// The mouse moved over the image; `buttons_held` mirrors `event.buttons != 0`.
    pub fn mouse_move(&mut self, buttons_held: bool, position: Point) -> InputResponse {
        let Some(current) = self.ready_transform() else {
            return InputResponse::default();
        };
        let outcome = self
            .gestures
            .mouse_move(&self.engine, &current, buttons_held, position);
        self.dispatch(outcome)
    }

    /// The mouse button was released at `position`.
    ///
    /// Pass the event `timestamp` (in milliseconds) to detect double clicks
    /// from releases, or `None` when platform double-click events are
    /// forwarded to [`Self::double_click`] instead.
    pub fn mouse_up(&mut self, position: Point, timestamp: Option<u64>) -> InputResponse {
        let Some(current) = self.ready_transform() else {
            self.gestures.reset();
            return InputResponse::default();
        };
        let outcome = self
            .gestures
            .mouse_up(&self.engine, &current, position, timestamp);
        self.dispatch(outcome)
    }

    /// The image was double-clicked at `position`.
    pub fn double_click(&mut self, position: Option<Point>) -> InputResponse {
        let Some(current) = self.ready_transform() else {
            return InputResponse::default();
        };
        let outcome = self.gestures.double_click(&self.engine, &current, position);
        self.dispatch(outcome)
    }

    /// A wheel event over the image.
    pub fn wheel(&mut self, delta_y: f64, position: Point) -> InputResponse {
        let Some(current) = self.ready_transform() else {
            return InputResponse::default();
        };
        self.animator.cancel();
        let outcome = self.gestures.wheel(&self.engine, &current, delta_y, position);
        self.dispatch(outcome)
    }

    /// Zooms in one step around the container center.
    ///
    /// Returns `true` if the transform changed.
    pub fn zoom_in(&mut self) -> bool {
        let Some(current) = self.ready_transform() else {
            return false;
        };
        let request = self.gestures.zoom_in(&self.engine, &current, None);
        request.is_some_and(|r| self.apply(r))
    }

    /// Zooms out one step around the container center.
    ///
    /// Returns `true` if the transform changed.
    pub fn zoom_out(&mut self) -> bool {
        let Some(current) = self.ready_transform() else {
            return false;
        };
        let request = self.gestures.zoom_out(&self.engine, &current, None);
        request.is_some_and(|r| self.apply(r))
    }

    /// Returns to the initial transform immediately.
    ///
    /// Returns `true` if the transform changed.
    pub fn reset(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.apply_initial(Motion::Immediate)
    }

    fn ready_transform(&self) -> Option<Transform> {
        self.transform.filter(|_| self.is_ready())
    }

    fn dispatch(&mut self, outcome: GestureOutcome) -> InputResponse {
        if let Some(request) = outcome.request {
            self.apply(request);
        }
        outcome.into()
    }

    fn apply(&mut self, request: Request) -> bool {
        match request {
            Request::Transform { transform, motion } => self.apply_transform(transform, motion),
            Request::Reset { motion } => self.apply_initial(motion),
        }
    }

    fn apply_transform(&mut self, target: Transform, motion: Motion) -> bool {
        let Some(current) = self.transform else {
            self.transform = Some(target);
            return true;
        };
        match motion {
            Motion::Animated => self
                .animator
                .start(&current, target, self.config.animation_speed)
                .is_some(),
            Motion::Immediate => {
                self.animator.cancel();
                if current.approx_eq(&target) {
                    return false;
                }
                log::trace!(
                    "transform top={} left={} scale={}",
                    target.top,
                    target.left,
                    target.scale
                );
                self.transform = Some(target);
                true
            }
        }
    }

    fn apply_initial(&mut self, motion: Motion) -> bool {
        match self.engine.initial_transform() {
            Ok(Some(initial)) => {
                self.last_error = None;
                self.apply_transform(initial, motion)
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err);
                false
            }
        }
    }

    fn check_config(&mut self) {
        match self.config.validate() {
            Ok(warnings) => {
                for warning in warnings {
                    log::warn!("{warning}");
                }
                self.last_error = None;
            }
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err);
            }
        }
    }

    fn reconcile(&mut self) {
        if !self.image_loaded || !self.engine.is_measured() {
            return;
        }
        match self.transform {
            Some(current) => {
                if let Some(corrected) = self.engine.correct(&current, 0.0) {
                    log::debug!(
                        "re-validated transform top={} left={} scale={}",
                        corrected.top,
                        corrected.left,
                        corrected.scale
                    );
                    self.animator.cancel();
                    self.transform = Some(corrected);
                }
            }
            None => {
                self.apply_initial(Motion::Immediate);
            }
        }
    }
}
