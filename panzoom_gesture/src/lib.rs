// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Gesture: turn pointer, touch and wheel input into bounded transforms.
//!
//! This crate sits between a host's raw input events and the
//! [`panzoom_view::ConstraintEngine`]. It provides:
//!
//! - [`GestureSession`]: scratch state for the current gesture (pan anchor,
//!   pinch length, last pointer-up for double-tap recognition).
//! - [`GestureInterpreter`]: maps events to [`Request`]s that the owner applies
//!   immediately or animates.
//! - [`PanIntent`] and [`NativePan`]: helpers for hosts that must decide when
//!   to let the platform scroll instead of panning the image.
//!
//! The interpreter is host-agnostic. Positions are container-relative
//! [`kurbo::Point`]s and timestamps are milliseconds from any monotonic clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use panzoom_gesture::{GestureInterpreter, Request};
//! use panzoom_view::{ConstraintEngine, Constraints, ScaleSpec, Transform};
//!
//! let mut engine = ConstraintEngine::new(Constraints {
//!     min_scale: ScaleSpec::Fixed(1.0),
//!     max_scale: 4.0,
//!     ..Constraints::default()
//! });
//! engine.set_dimensions(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
//!
//! let mut gestures = GestureInterpreter::default();
//! let outcome = gestures.wheel(&engine, &Transform::IDENTITY, -1.0, Point::new(0.0, 0.0));
//! assert!(outcome.cancel_native);
//! match outcome.request {
//!     Some(Request::Transform { transform, .. }) => assert!(transform.scale > 1.0),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod constants;
mod intent;
mod interpreter;
mod session;

pub use intent::{NativePan, PanIntent};
pub use interpreter::{
    DoubleTapBehavior, GestureInterpreter, GestureOutcome, Motion, MouseButton, Request,
};
pub use session::{GesturePhase, GestureSession, PointerUp};
