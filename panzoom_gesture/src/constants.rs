// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning constants shared by the gesture interpreter.

/// Fraction by which an active pinch may overshoot scale and pan bounds.
pub const OVERZOOM_TOLERANCE: f64 = 0.05;

/// Maximum time between two pointer-ups that still counts as a double tap.
pub const DOUBLE_TAP_THRESHOLD_MS: u64 = 250;

/// Maximum distance between two taps that still counts as a double tap.
pub const DOUBLE_TAP_SLOP: f64 = 30.0;

/// Scale multiplier for a double tap with zoom behavior.
pub const DOUBLE_TAP_ZOOM: f64 = 1.3;

/// Scale multiplier for one wheel step towards the user.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Scale multiplier for one wheel step away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Scale multiplier for the zoom-in button.
pub const BUTTON_ZOOM_IN: f64 = 1.1;

/// Scale multiplier for the zoom-out button.
pub const BUTTON_ZOOM_OUT: f64 = 0.9;
