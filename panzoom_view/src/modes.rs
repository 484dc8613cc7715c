// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A scale parameter that is either a literal factor or resolved by autofit.
///
/// This enum is used for both the initial scale and the minimum scale of a
/// [`crate::ConstraintEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ScaleRepr", into = "ScaleRepr")
)]
pub enum ScaleSpec {
    /// The largest scale not above `1.0` at which the whole image fits.
    ///
    /// Resolved against the current measurements every time it is read.
    #[default]
    Auto,
    /// A literal scale factor.
    Fixed(f64),
}

impl ScaleSpec {
    /// Resolves this spec given the current autofit scale.
    #[must_use]
    pub fn resolve(self, autofit: f64) -> f64 {
        match self {
            Self::Auto => autofit,
            Self::Fixed(scale) => scale,
        }
    }

    /// Returns the literal factor, if any.
    #[must_use]
    pub fn fixed(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Fixed(scale) => Some(scale),
        }
    }
}

impl From<f64> for ScaleSpec {
    fn from(scale: f64) -> Self {
        Self::Fixed(scale)
    }
}

/// How the image is placed on an axis where it does not overflow.
///
/// On an axis where the scaled image is larger than the container the offset
/// is free (within bounds) regardless of this mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Placement {
    /// Pin the image to the configured initial offset (default `0`).
    TopLeft,
    /// Center the image within the container.
    #[default]
    Center,
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ScaleRepr {
    Keyword(ScaleKeyword),
    Number(f64),
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
enum ScaleKeyword {
    #[serde(rename = "auto")]
    Auto,
}

#[cfg(feature = "serde")]
impl From<ScaleRepr> for ScaleSpec {
    fn from(repr: ScaleRepr) -> Self {
        match repr {
            ScaleRepr::Keyword(ScaleKeyword::Auto) => Self::Auto,
            ScaleRepr::Number(scale) => Self::Fixed(scale),
        }
    }
}

#[cfg(feature = "serde")]
impl From<ScaleSpec> for ScaleRepr {
    fn from(spec: ScaleSpec) -> Self {
        match spec {
            ScaleSpec::Auto => Self::Keyword(ScaleKeyword::Auto),
            ScaleSpec::Fixed(scale) => Self::Number(scale),
        }
    }
}
