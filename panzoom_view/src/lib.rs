// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom View: geometry and transform constraints for a zoomable image.
//!
//! This crate provides the headless core of an image viewer that lets users
//! pan and zoom an image inside a fixed container. It focuses on:
//! - The [`Transform`] triple `{top, left, scale}` describing image placement.
//! - Pure geometry helpers: pinch length/midpoint, autofit, per-edge [`Overflow`].
//! - A [`ConstraintEngine`] that bounds requested transforms to a scale range
//!   and keeps the image from being panned away from its container.
//!
//! It does **not** interpret input events or animate anything. Callers are
//! expected to:
//! - Measure the container and the image and feed both sizes to the engine.
//! - Turn pointer input into requested transforms (see `panzoom_gesture`).
//! - Apply or animate the corrected transforms (see `panzoom_transition`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use panzoom_view::{ConstraintEngine, Constraints, ScaleSpec, Transform};
//!
//! let mut engine = ConstraintEngine::new(Constraints {
//!     min_scale: ScaleSpec::Fixed(1.0),
//!     max_scale: 4.0,
//!     ..Constraints::default()
//! });
//! engine.set_dimensions(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
//!
//! // Zoom to 2x around the container center.
//! let zoomed = engine.zoom(&Transform::IDENTITY, 2.0, Point::new(50.0, 50.0), 0.0);
//! assert_eq!(zoomed, Transform::new(-50.0, -50.0, 2.0));
//!
//! // Panning past the edge is corrected back into bounds.
//! let corrected = engine.correct(&zoomed.translated((80.0, 0.0).into()), 0.0);
//! assert_eq!(corrected, Some(Transform::new(-50.0, 0.0, 2.0)));
//! ```
//!
//! ## Tolerance
//!
//! Every correction takes a `tolerance`, the fraction by which scale and pan
//! bounds may be exceeded. Active pinch gestures use a small positive value so
//! the user sees a slight overshoot; settled transforms are always corrected
//! with `0.0`.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod constraint;
mod error;
pub mod geometry;
mod modes;

pub use constraint::{ConstraintEngine, Constraints};
pub use error::{ConfigError, ConfigWarning};
pub use geometry::{Overflow, Transform};
pub use modes::{Placement, ScaleSpec};
