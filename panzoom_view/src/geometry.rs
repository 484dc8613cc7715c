// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless point, size and transform helpers.
//!
//! All coordinates are container-relative pixels unless stated otherwise.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Number of decimal places compared by [`Transform::approx_eq`].
pub const EQUALITY_PRECISION: u32 = 5;

/// Placement of an image inside its container.
///
/// `top` and `left` are the pixel offsets of the image's top-left corner from
/// the container's top-left corner. `scale` multiplies the native image size
/// and is applied around the already-translated image origin, which matches
/// CSS `transform-origin: 0 0` with `translate(left, top) scale(scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Vertical offset of the image origin, in pixels.
    pub top: f64,
    /// Horizontal offset of the image origin, in pixels.
    pub left: f64,
    /// Uniform scale factor applied to the native image size.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Unscaled image anchored at the container origin.
    pub const IDENTITY: Self = Self {
        top: 0.0,
        left: 0.0,
        scale: 1.0,
    };

    /// Creates a transform from its three components.
    #[must_use]
    pub const fn new(top: f64, left: f64, scale: f64) -> Self {
        Self { top, left, scale }
    }

    /// Returns `true` when both transforms agree after rounding every field to
    /// [`EQUALITY_PRECISION`] decimal places.
    ///
    /// Animation and correction loops use this instead of `==` so that float
    /// drift cannot keep them alive forever.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        round_to(self.top, EQUALITY_PRECISION) == round_to(other.top, EQUALITY_PRECISION)
            && round_to(self.left, EQUALITY_PRECISION) == round_to(other.left, EQUALITY_PRECISION)
            && round_to(self.scale, EQUALITY_PRECISION)
                == round_to(other.scale, EQUALITY_PRECISION)
    }

    /// Returns the translation part as a vector `(left, top)`.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Returns a copy moved by `delta` in container space.
    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            top: self.top + delta.y,
            left: self.left + delta.x,
            scale: self.scale,
        }
    }

    /// Returns the size of `image` after applying this transform's scale.
    #[must_use]
    pub fn scaled_size(&self, image: Size) -> Size {
        image * self.scale
    }

    /// Maps a container-space point into native image coordinates.
    #[must_use]
    pub fn container_to_image(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.left) / self.scale,
            (pt.y - self.top) / self.scale,
        )
    }

    /// Returns the affine map from native image space into container space.
    ///
    /// This is a translation by `(left, top)` followed by a uniform scale about
    /// the image origin.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }
}

/// Per-edge amount by which a scaled image extends past its container.
///
/// Every field is non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overflow {
    /// Pixels hidden above the container's top edge.
    pub top: f64,
    /// Pixels hidden past the container's right edge.
    pub right: f64,
    /// Pixels hidden below the container's bottom edge.
    pub bottom: f64,
    /// Pixels hidden past the container's left edge.
    pub left: f64,
}

impl Overflow {
    /// No overflow on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Returns `true` when the image is fully visible.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }

    /// Returns `true` when the image overflows on the left or right edge.
    #[must_use]
    pub fn has_horizontal(&self) -> bool {
        self.left > 0.0 || self.right > 0.0
    }

    /// Returns `true` when the image overflows on the top or bottom edge.
    #[must_use]
    pub fn has_vertical(&self) -> bool {
        self.top > 0.0 || self.bottom > 0.0
    }
}

/// Converts a client-space point into coordinates relative to `element`.
///
/// `element` is the element's bounding box in client space. Returns `None`
/// when the element is not available (for example, not mounted yet).
#[must_use]
pub fn relative_position(client: Point, element: Option<Rect>) -> Option<Point> {
    let rect = element?;
    Some((client - rect.origin()).to_point())
}

/// Distance between two touch points.
#[must_use]
pub fn pinch_length(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Point halfway between two touch points.
#[must_use]
pub fn pinch_midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Clamps `value` into `[lower, upper]`.
///
/// Unlike [`f64::clamp`] this never panics: when `lower > upper` the upper
/// bound wins, and a NaN `value` collapses to `lower`.
#[must_use]
pub fn constrain(lower: f64, upper: f64, value: f64) -> f64 {
    upper.min(lower.max(value))
}

/// Rounds `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = (0..places).fold(1.0, |acc: f64, _| acc * 10.0);
    (value * factor).round() / factor
}

/// Largest scale not above `1.0` at which `image` fits entirely in `container`.
///
/// Returns `1.0` for an image with a non-positive extent on either axis, which
/// covers images that have not been laid out yet.
#[must_use]
pub fn autofit_scale(container: Size, image: Size) -> f64 {
    if !(image.width > 0.0 && image.height > 0.0) {
        return 1.0;
    }
    (container.width / image.width)
        .min(container.height / image.height)
        .min(1.0)
}

/// Container size minus the image size at `scale`, per axis.
///
/// Negative components mean the scaled image is larger than the container on
/// that axis.
#[must_use]
pub fn negative_space(scale: f64, image: Size, container: Size) -> Vec2 {
    Vec2::new(
        container.width - scale * image.width,
        container.height - scale * image.height,
    )
}

/// Computes how far the image extends past each container edge at `transform`.
#[must_use]
pub fn overflow(transform: &Transform, image: Size, container: Size) -> Overflow {
    let scaled = transform.scaled_size(image);
    Overflow {
        top: (-transform.top).max(0.0),
        right: (scaled.width - container.width + transform.left).max(0.0),
        bottom: (scaled.height - container.height + transform.top).max(0.0),
        left: (-transform.left).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_position_subtracts_element_origin() {
        let rect = Rect::new(20.0, 30.0, 220.0, 330.0);
        let p = relative_position(Point::new(25.0, 40.0), Some(rect));
        assert_eq!(p, Some(Point::new(5.0, 10.0)));
    }

    #[test]
    fn relative_position_without_element_is_none() {
        assert_eq!(relative_position(Point::new(1.0, 2.0), None), None);
    }

    #[test]
    fn pinch_length_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 40.0);
        assert!((pinch_length(a, b) - 50.0).abs() < 1e-12);
        assert_eq!(pinch_midpoint(a, b), Point::new(15.0, 20.0));
    }

    #[test]
    fn constrain_clamps_and_tolerates_inverted_bounds() {
        assert_eq!(constrain(0.0, 10.0, -5.0), 0.0);
        assert_eq!(constrain(0.0, 10.0, 15.0), 10.0);
        assert_eq!(constrain(0.0, 10.0, 7.5), 7.5);
        // Inverted bounds resolve to the upper bound instead of panicking.
        assert_eq!(constrain(10.0, 0.0, 5.0), 0.0);
        assert_eq!(constrain(1.0, 2.0, f64::NAN), 1.0);
    }

    #[test]
    fn approx_eq_ignores_drift_below_five_decimals() {
        let a = Transform::new(10.0, -20.0, 1.5);
        let b = Transform::new(10.000_001, -20.000_002, 1.500_000_4);
        assert!(a.approx_eq(&b));

        let c = Transform::new(10.0001, -20.0, 1.5);
        assert!(!a.approx_eq(&c));
    }

    #[test]
    fn autofit_uses_limiting_dimension() {
        let container = Size::new(250.0, 500.0);
        let image = Size::new(1000.0, 1000.0);
        assert!((autofit_scale(container, image) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn autofit_never_enlarges() {
        let container = Size::new(800.0, 600.0);
        let image = Size::new(100.0, 100.0);
        assert_eq!(autofit_scale(container, image), 1.0);
    }

    #[test]
    fn autofit_degenerate_image_is_one() {
        let container = Size::new(800.0, 600.0);
        assert_eq!(autofit_scale(container, Size::new(0.0, 100.0)), 1.0);
        assert_eq!(autofit_scale(container, Size::new(100.0, -1.0)), 1.0);
    }

    #[test]
    fn overflow_per_edge() {
        let container = Size::new(100.0, 100.0);
        let image = Size::new(100.0, 100.0);
        let t = Transform::new(-30.0, -50.0, 2.0);
        let o = overflow(&t, image, container);
        assert_eq!(o.top, 30.0);
        assert_eq!(o.left, 50.0);
        assert_eq!(o.right, 50.0);
        assert_eq!(o.bottom, 70.0);
        assert!(o.has_horizontal() && o.has_vertical());
    }

    #[test]
    fn centered_small_image_has_no_overflow() {
        let container = Size::new(400.0, 400.0);
        let image = Size::new(200.0, 100.0);
        let t = Transform::new(150.0, 100.0, 1.0);
        assert!(overflow(&t, image, container).is_zero());
    }

    #[test]
    fn affine_maps_image_origin_to_offset() {
        let t = Transform::new(10.0, 20.0, 2.0);
        let affine = t.to_affine();
        assert_eq!(affine * Point::ORIGIN, Point::new(20.0, 10.0));
        assert_eq!(affine * Point::new(5.0, 5.0), Point::new(30.0, 20.0));

        let back = t.container_to_image(Point::new(30.0, 20.0));
        assert!((back.x - 5.0).abs() < 1e-12);
        assert!((back.y - 5.0).abs() < 1e-12);
    }
}
