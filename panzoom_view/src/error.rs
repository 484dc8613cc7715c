// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A constraint configuration that cannot produce a valid initial transform.
///
/// These are never fatal: the caller is expected to report them and leave the
/// transform uninitialized.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The resolved minimum scale is larger than the maximum scale.
    #[error("minScale ({min}) cannot exceed maxScale ({max})")]
    MinScaleExceedsMaxScale {
        /// Resolved minimum scale.
        min: f64,
        /// Configured maximum scale.
        max: f64,
    },
    /// The resolved initial scale lies outside `[min, max]`.
    #[error("initialScale ({initial}) must be between minScale ({min}) and maxScale ({max})")]
    InitialScaleOutOfBounds {
        /// Resolved initial scale.
        initial: f64,
        /// Resolved minimum scale.
        min: f64,
        /// Configured maximum scale.
        max: f64,
    },
    /// A literal scale is not a finite, positive number.
    #[error("{name} must be a finite, positive number (got {value})")]
    InvalidScale {
        /// Name of the offending parameter, as the host spells it.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// A configuration that is usable but contains ignored parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `initialTop` was supplied together with centered placement.
    InitialTopIgnored,
    /// `initialLeft` was supplied together with centered placement.
    InitialLeftIgnored,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InitialTopIgnored => "initialTop",
            Self::InitialLeftIgnored => "initialLeft",
        };
        write!(
            f,
            "{name} should not be supplied with position=center. It was ignored."
        )
    }
}
