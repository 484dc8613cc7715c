// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::error::{ConfigError, ConfigWarning};
use crate::geometry::{self, Overflow, Transform, constrain};
use crate::modes::{Placement, ScaleSpec};

/// Static parameters that bound the transforms a [`ConstraintEngine`] accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// Scale applied by [`ConstraintEngine::initial_transform`].
    pub initial_scale: ScaleSpec,
    /// Lower scale bound.
    pub min_scale: ScaleSpec,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Placement on axes without overflow.
    pub placement: Placement,
    /// Initial vertical offset; only used with [`Placement::TopLeft`].
    pub initial_top: Option<f64>,
    /// Initial horizontal offset; only used with [`Placement::TopLeft`].
    pub initial_left: Option<f64>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            initial_scale: ScaleSpec::Auto,
            min_scale: ScaleSpec::Auto,
            max_scale: 1.0,
            placement: Placement::Center,
            initial_top: None,
            initial_left: None,
        }
    }
}

impl Constraints {
    /// Checks the parts of the configuration that do not depend on measurements.
    ///
    /// Autofit scales can only be checked once dimensions are known; see
    /// [`ConstraintEngine::initial_transform`].
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        let max = self.max_scale;
        if !is_valid_scale(max) {
            return Err(ConfigError::InvalidScale {
                name: "maxScale",
                value: max,
            });
        }
        if let Some(min) = self.min_scale.fixed() {
            if !is_valid_scale(min) {
                return Err(ConfigError::InvalidScale {
                    name: "minScale",
                    value: min,
                });
            }
            if min > max {
                return Err(ConfigError::MinScaleExceedsMaxScale { min, max });
            }
        }
        if let Some(initial) = self.initial_scale.fixed() {
            if !is_valid_scale(initial) {
                return Err(ConfigError::InvalidScale {
                    name: "initialScale",
                    value: initial,
                });
            }
            if let Some(min) = self.min_scale.fixed()
                && initial < min
            {
                return Err(ConfigError::InitialScaleOutOfBounds { initial, min, max });
            }
            if initial > max {
                let min = self.min_scale.fixed().unwrap_or(0.0);
                return Err(ConfigError::InitialScaleOutOfBounds { initial, min, max });
            }
        }

        let mut warnings = Vec::new();
        if self.placement == Placement::Center {
            if self.initial_top.is_some() {
                warnings.push(ConfigWarning::InitialTopIgnored);
            }
            if self.initial_left.is_some() {
                warnings.push(ConfigWarning::InitialLeftIgnored);
            }
        }
        Ok(warnings)
    }
}

/// Bounds requested transforms to the scale range and the image's overflow.
///
/// The engine owns the constraint parameters and the last measured container
/// and image sizes. All queries are pure functions of that state; resolved
/// values such as the autofit minimum scale are recomputed on demand.
///
/// Until both sizes are known and positive the engine is *unmeasured*: every
/// correction returns `None` and the initial transform is unavailable.
#[derive(Clone, Debug, Default)]
pub struct ConstraintEngine {
    constraints: Constraints,
    container: Option<Size>,
    image: Option<Size>,
}

impl ConstraintEngine {
    /// Creates an unmeasured engine with the given constraints.
    #[must_use]
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            container: None,
            image: None,
        }
    }

    /// Returns the constraint parameters.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Replaces the constraint parameters.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    /// Records the container and image sizes.
    ///
    /// Returns `true` if either size differs from the previous measurement.
    pub fn set_dimensions(&mut self, container: Size, image: Size) -> bool {
        let changed = self.container != Some(container) || self.image != Some(image);
        self.container = Some(container);
        self.image = Some(image);
        changed
    }

    /// Forgets both measurements.
    pub fn clear_dimensions(&mut self) {
        self.container = None;
        self.image = None;
    }

    /// Returns `(container, image)` when both are known and non-empty.
    #[must_use]
    pub fn measurements(&self) -> Option<(Size, Size)> {
        let container = self.container?;
        let image = self.image?;
        if is_positive_size(container) && is_positive_size(image) {
            Some((container, image))
        } else {
            None
        }
    }

    /// Returns `true` when both sizes are known and non-empty.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measurements().is_some()
    }

    /// Returns the measured container size, if any.
    #[must_use]
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// Returns the measured native image size, if any.
    #[must_use]
    pub fn image(&self) -> Option<Size> {
        self.image
    }

    /// Returns the center of the container, if measured.
    #[must_use]
    pub fn container_center(&self) -> Option<Point> {
        self.container.map(|c| Point::new(c.width / 2.0, c.height / 2.0))
    }

    /// Autofit scale for the current measurements (`1.0` when unmeasured).
    #[must_use]
    pub fn autofit_scale(&self) -> f64 {
        match (self.container, self.image) {
            (Some(container), Some(image)) => geometry::autofit_scale(container, image),
            _ => 1.0,
        }
    }

    /// Resolved minimum scale.
    ///
    /// [`ScaleSpec::Auto`] resolves to the current autofit scale. A literal
    /// that is not a finite, positive number falls back to `1.0`.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        match self.constraints.min_scale {
            ScaleSpec::Auto => self.autofit_scale(),
            ScaleSpec::Fixed(scale) if is_valid_scale(scale) => scale,
            ScaleSpec::Fixed(_) => 1.0,
        }
    }

    /// Configured maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.constraints.max_scale
    }

    /// Clamps `requested` into the scale range widened by `tolerance`.
    ///
    /// The range is `[min * (1 - tolerance), max * (1 + tolerance)]`.
    #[must_use]
    pub fn constrained_scale(&self, requested: f64, tolerance: f64) -> f64 {
        constrain(
            self.min_scale() * (1.0 - tolerance),
            self.max_scale() * (1.0 + tolerance),
            requested,
        )
    }

    /// Returns the nearest transform satisfying the constraints, or `None` if
    /// `requested` already satisfies them (or the engine is unmeasured).
    ///
    /// On an axis where the scaled image overflows the container by `o`
    /// pixels, the offset is clamped into `[-o * (1 + tolerance), o * tolerance]`.
    /// This lets an active gesture drag the image a fraction of its overflow
    /// past either edge. On an axis without overflow the offset is forced by
    /// the [`Placement`].
    #[must_use]
    pub fn correct(&self, requested: &Transform, tolerance: f64) -> Option<Transform> {
        let (container, image) = self.measurements()?;
        let scale = self.constrained_scale(requested.scale, tolerance);

        let space = geometry::negative_space(scale, image, container);
        let overflow_w = (-space.x).max(0.0);
        let overflow_h = (-space.y).max(0.0);

        let upper_factor = 1.0 + tolerance;
        let top = if overflow_h > 0.0 {
            constrain(
                -overflow_h * upper_factor,
                overflow_h * upper_factor - overflow_h,
                requested.top,
            )
        } else {
            match self.constraints.placement {
                Placement::Center => space.y / 2.0,
                Placement::TopLeft => self.constraints.initial_top.unwrap_or(0.0),
            }
        };
        let left = if overflow_w > 0.0 {
            constrain(
                -overflow_w * upper_factor,
                overflow_w * upper_factor - overflow_w,
                requested.left,
            )
        } else {
            match self.constraints.placement {
                Placement::Center => space.x / 2.0,
                Placement::TopLeft => self.constraints.initial_left.unwrap_or(0.0),
            }
        };

        let corrected = Transform::new(top, left, scale);
        if corrected.approx_eq(requested) {
            None
        } else {
            Some(corrected)
        }
    }

    /// Like [`ConstraintEngine::correct`], but returns `requested` itself when
    /// no correction is needed.
    #[must_use]
    pub fn constrain_transform(&self, requested: Transform, tolerance: f64) -> Transform {
        self.correct(&requested, tolerance).unwrap_or(requested)
    }

    /// Returns `true` if `transform` satisfies the constraints with zero
    /// tolerance.
    #[must_use]
    pub fn is_settled(&self, transform: &Transform) -> bool {
        self.correct(transform, 0.0).is_none()
    }

    /// Zooms `current` to `requested_scale` keeping `pivot` visually fixed.
    ///
    /// `pivot` is in container coordinates. The scale is bounded first, the
    /// offsets are shifted so the image point under the pivot stays under it,
    /// and the result is passed through [`ConstraintEngine::constrain_transform`].
    #[must_use]
    pub fn zoom(
        &self,
        current: &Transform,
        requested_scale: f64,
        pivot: Point,
        tolerance: f64,
    ) -> Transform {
        let image_relative_top = pivot.y - current.top;
        let image_relative_left = pivot.x - current.left;

        let next_scale = self.constrained_scale(requested_scale, tolerance);
        let ratio = if current.scale > 0.0 {
            (next_scale - current.scale) / current.scale
        } else {
            0.0
        };

        let next = Transform::new(
            current.top - image_relative_top * ratio,
            current.left - image_relative_left * ratio,
            next_scale,
        );
        self.constrain_transform(next, tolerance)
    }

    /// Computes the initial transform from the constraint parameters.
    ///
    /// Returns `Ok(None)` while unmeasured. Fails if the resolved scales are
    /// inconsistent, in which case no transform should be applied.
    pub fn initial_transform(&self) -> Result<Option<Transform>, ConfigError> {
        let Some((container, image)) = self.measurements() else {
            return Ok(None);
        };

        let autofit = geometry::autofit_scale(container, image);
        let initial = self.constraints.initial_scale.resolve(autofit);
        if !is_valid_scale(initial) {
            return Err(ConfigError::InvalidScale {
                name: "initialScale",
                value: initial,
            });
        }
        let max = self.max_scale();
        if !is_valid_scale(max) {
            return Err(ConfigError::InvalidScale {
                name: "maxScale",
                value: max,
            });
        }
        let min = self.min_scale();
        if min > max {
            return Err(ConfigError::MinScaleExceedsMaxScale { min, max });
        }
        if initial < min || initial > max {
            return Err(ConfigError::InitialScaleOutOfBounds { initial, min, max });
        }

        let (top, left) = match self.constraints.placement {
            Placement::Center => {
                let space = geometry::negative_space(initial, image, container);
                (space.y / 2.0, space.x / 2.0)
            }
            Placement::TopLeft => (
                self.constraints.initial_top.unwrap_or(0.0),
                self.constraints.initial_left.unwrap_or(0.0),
            ),
        };

        let transform = self.constrain_transform(Transform::new(top, left, initial), 0.0);
        log::debug!(
            "initial transform top={} left={} scale={}",
            transform.top,
            transform.left,
            transform.scale
        );
        Ok(Some(transform))
    }

    /// Overflow of `transform` against the current measurements.
    ///
    /// Returns `None` while unmeasured.
    #[must_use]
    pub fn overflow(&self, transform: &Transform) -> Option<Overflow> {
        let (container, image) = self.measurements()?;
        Some(geometry::overflow(transform, image, container))
    }
}

fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

fn is_positive_size(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
