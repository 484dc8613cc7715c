// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use panzoom_gesture::DoubleTapBehavior;
use panzoom_transition::DEFAULT_SPEED;
use panzoom_view::{ConfigError, ConfigWarning, Constraints, Placement, ScaleSpec};

/// Host-facing configuration of a [`crate::Viewer`].
///
/// Defaults: `initialScale = auto`, `minScale = auto`, `maxScale = 1`,
/// `position = center`, `doubleTapBehavior = reset`, zoom buttons shown,
/// no CSS transition, animation speed `0.1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ViewerConfig {
    /// Scale applied on initialization and reset.
    pub initial_scale: ScaleSpec,
    /// Lower scale bound.
    pub min_scale: ScaleSpec,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Placement on axes without overflow.
    pub position: Placement,
    /// Initial vertical offset, used with [`Placement::TopLeft`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub initial_top: Option<f64>,
    /// Initial horizontal offset, used with [`Placement::TopLeft`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub initial_left: Option<f64>,
    /// What a double tap or double click does.
    pub double_tap_behavior: DoubleTapBehavior,
    /// Whether zoom buttons are offered; see [`crate::Viewer::zoom_buttons`].
    pub zoom_buttons: bool,
    /// Whether the host should ease transform changes with a CSS transition.
    pub animate: bool,
    /// Fraction of the remaining distance covered per animation frame.
    pub animation_speed: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_scale: ScaleSpec::Auto,
            min_scale: ScaleSpec::Auto,
            max_scale: 1.0,
            position: Placement::Center,
            initial_top: None,
            initial_left: None,
            double_tap_behavior: DoubleTapBehavior::Reset,
            zoom_buttons: true,
            animate: false,
            animation_speed: DEFAULT_SPEED,
        }
    }
}

impl ViewerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial scale.
    #[must_use]
    pub fn with_initial_scale(mut self, scale: impl Into<ScaleSpec>) -> Self {
        self.initial_scale = scale.into();
        self
    }

    /// Sets the minimum scale.
    #[must_use]
    pub fn with_min_scale(mut self, scale: impl Into<ScaleSpec>) -> Self {
        self.min_scale = scale.into();
        self
    }

    /// Sets the maximum scale.
    #[must_use]
    pub fn with_max_scale(mut self, scale: f64) -> Self {
        self.max_scale = scale;
        self
    }

    /// Sets the placement mode.
    #[must_use]
    pub fn with_position(mut self, position: Placement) -> Self {
        self.position = position;
        self
    }

    /// Sets the initial vertical offset.
    #[must_use]
    pub fn with_initial_top(mut self, top: f64) -> Self {
        self.initial_top = Some(top);
        self
    }

    /// Sets the initial horizontal offset.
    #[must_use]
    pub fn with_initial_left(mut self, left: f64) -> Self {
        self.initial_left = Some(left);
        self
    }

    /// Sets the double-tap behavior.
    #[must_use]
    pub fn with_double_tap_behavior(mut self, behavior: DoubleTapBehavior) -> Self {
        self.double_tap_behavior = behavior;
        self
    }

    /// Shows or hides the zoom buttons.
    #[must_use]
    pub fn with_zoom_buttons(mut self, enabled: bool) -> Self {
        self.zoom_buttons = enabled;
        self
    }

    /// Enables or disables the CSS transition.
    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Sets the animation speed. Values outside `(0, 1]` are clamped when used.
    #[must_use]
    pub fn with_animation_speed(mut self, speed: f64) -> Self {
        self.animation_speed = speed;
        self
    }

    /// The constraint parameters handed to the engine.
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints {
            initial_scale: self.initial_scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            placement: self.position,
            initial_top: self.initial_top,
            initial_left: self.initial_left,
        }
    }

    /// Checks the literal parts of the configuration.
    ///
    /// Autofit scales are only checked once dimensions are known.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        self.constraints().validate()
    }
}

#[cfg(test)]
mod tests {
    use panzoom_gesture::DoubleTapBehavior;
    use panzoom_view::{ConfigError, ConfigWarning, Placement, ScaleSpec};

    use super::ViewerConfig;

    #[test]
    fn builders_set_fields() {
        let config = ViewerConfig::new()
            .with_initial_scale(1.5)
            .with_min_scale(1.0)
            .with_max_scale(3.0)
            .with_position(Placement::TopLeft)
            .with_initial_top(-10.0)
            .with_initial_left(-20.0)
            .with_double_tap_behavior(DoubleTapBehavior::Zoom)
            .with_zoom_buttons(false)
            .with_animate(true)
            .with_animation_speed(0.2);

        let constraints = config.constraints();
        assert_eq!(constraints.initial_scale, ScaleSpec::Fixed(1.5));
        assert_eq!(constraints.min_scale, ScaleSpec::Fixed(1.0));
        assert_eq!(constraints.max_scale, 3.0);
        assert_eq!(constraints.placement, Placement::TopLeft);
        assert_eq!(constraints.initial_top, Some(-10.0));
        assert_eq!(constraints.initial_left, Some(-20.0));
        assert!(!config.zoom_buttons);
        assert!(config.animate);
        assert_eq!(config.animation_speed, 0.2);
        assert!(config.validate().unwrap().is_empty());
    }

    #[test]
    fn validate_forwards_constraint_checks() {
        let config = ViewerConfig::new().with_min_scale(2.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinScaleExceedsMaxScale { min: 2.0, max: 1.0 })
        );

        let config = ViewerConfig::new().with_initial_left(4.0);
        assert_eq!(
            config.validate().unwrap(),
            [ConfigWarning::InitialLeftIgnored]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_host_attributes() {
        let config: ViewerConfig = serde_json::from_str(
            r#"{
                "initialScale": "auto",
                "minScale": 0.5,
                "maxScale": 4,
                "position": "topLeft",
                "initialTop": 12,
                "doubleTapBehavior": "zoom",
                "animate": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.initial_scale, ScaleSpec::Auto);
        assert_eq!(config.min_scale, ScaleSpec::Fixed(0.5));
        assert_eq!(config.max_scale, 4.0);
        assert_eq!(config.position, Placement::TopLeft);
        assert_eq!(config.initial_top, Some(12.0));
        assert_eq!(config.initial_left, None);
        assert_eq!(config.double_tap_behavior, DoubleTapBehavior::Zoom);
        assert!(config.zoom_buttons);
        assert!(config.animate);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn empty_object_is_default() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }
}
