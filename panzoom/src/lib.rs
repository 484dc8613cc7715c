// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom: a headless pinch/zoom/pan image viewer.
//!
//! [`Viewer`] ties together the constraint engine from `panzoom_view`, the
//! gesture interpreter from `panzoom_gesture` and the animator from
//! `panzoom_transition` into one session object per displayed image.
//!
//! The host owns everything platform-specific: it measures the container and
//! the image, forwards input events with container-relative positions,
//! schedules animation frames and renders the image using
//! [`Viewer::css_transform`] or [`Viewer::affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use panzoom::{FrameStatus, Viewer, ViewerConfig};
//!
//! let config = ViewerConfig::new().with_min_scale(1.0).with_max_scale(4.0);
//! let mut viewer = Viewer::new(config);
//! viewer.on_dimensions_known(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
//! viewer.on_image_loaded();
//! assert!(viewer.is_ready());
//!
//! // Wheel towards the user zooms in around the cursor.
//! let response = viewer.wheel(-1.0, Point::new(0.0, 0.0));
//! assert!(response.cancel_native);
//! assert_eq!(
//!     viewer.css_transform().as_deref(),
//!     Some("translate3d(0px, 0px, 0) scale(1.1)")
//! );
//!
//! // A double click resets with an animation driven by the host's frame clock.
//! let _ = viewer.double_click(Some(Point::new(50.0, 50.0)));
//! let handle = viewer.animation_handle().unwrap();
//! while viewer.on_animation_frame(handle) == FrameStatus::Continue {}
//! assert_eq!(viewer.transform().unwrap().scale, 1.0);
//! ```
//!
//! ## Logging
//!
//! Configuration problems are reported through the [`log`] facade at `warn`
//! level and kept in [`Viewer::last_error`]. Lifecycle changes and animations
//! log at `debug`, individual transforms and frames at `trace`.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod debug;
mod viewer;

pub use config::ViewerConfig;
pub use debug::ViewerDebugInfo;
pub use viewer::{CSS_TRANSITION, FrameStatus, InputResponse, Viewer, ZoomButtons};

pub use panzoom_gesture::{DoubleTapBehavior, MouseButton, NativePan, PanIntent};
pub use panzoom_transition::AnimationHandle;
pub use panzoom_view::geometry::relative_position;
pub use panzoom_view::{ConfigError, ConfigWarning, Overflow, Placement, ScaleSpec, Transform};
