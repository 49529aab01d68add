// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable configuration and the scale/translate bounds derived from it.
//!
//! Scale is bounded to `[initial_scale, max_scale]`. Translation is bounded
//! per axis by a limit that grows with the zoom ratio:
//! `limit = scale / initial_scale * threshold`. A translation overflows when
//! `|v| / (scale / initial_scale) > threshold`, and clamping snaps it to
//! exactly `±limit`.
//!
//! ```
//! use understory_zoomable::ZoomableConfig;
//!
//! let config = ZoomableConfig::new().with_threshold(100.0);
//! assert_eq!(config.max_scale(), 2.0);
//! assert_eq!(config.clamp_scale(9.0), 2.0);
//!
//! assert!(config.overflows(150.0, 1.0));
//! assert_eq!(config.clamp_translate(150.0, 1.0), 100.0);
//! // Zoomed in 2x, the same offset is within bounds.
//! assert_eq!(config.clamp_translate(150.0, 2.0), 150.0);
//! ```

use core::time::Duration;

/// Default translation threshold in page units.
pub const DEFAULT_THRESHOLD: f64 = 560.0;

/// Gesture and bounds configuration for a [`crate::Zoomable`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomableConfig {
    /// Resting scale and lower scale bound.
    pub initial_scale: f64,
    /// Upper scale bound; `None` means twice [`ZoomableConfig::initial_scale`].
    pub max_scale: Option<f64>,
    /// Largest translation, normalized by the zoom ratio, left alone on release.
    pub threshold: f64,
    /// Refuse to claim any gesture.
    pub disabled: bool,
    /// Skip the release correction and settle animation entirely.
    pub disable_release_action: bool,
    /// Timing and strength of release animations.
    pub release: ReleaseConfig,
}

impl ZoomableConfig {
    /// Default configuration: scale `1..=2`, threshold `560`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_scale: 1.0,
            max_scale: None,
            threshold: DEFAULT_THRESHOLD,
            disabled: false,
            disable_release_action: false,
            release: ReleaseConfig::new(),
        }
    }

    /// Sets the resting scale.
    #[must_use]
    pub const fn with_initial_scale(mut self, initial_scale: f64) -> Self {
        self.initial_scale = initial_scale;
        self
    }

    /// Sets an explicit maximum scale.
    #[must_use]
    pub const fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Sets the translation threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enables or disables gesture claiming.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Enables or disables the release correction/settle pass.
    #[must_use]
    pub const fn with_release_action_disabled(mut self, disabled: bool) -> Self {
        self.disable_release_action = disabled;
        self
    }

    /// Replaces the release animation settings.
    #[must_use]
    pub const fn with_release(mut self, release: ReleaseConfig) -> Self {
        self.release = release;
        self
    }

    /// Effective maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale.unwrap_or(self.initial_scale * 2.0)
    }

    /// Clamps `scale` into `[initial_scale, max_scale]`.
    ///
    /// On a configuration whose maximum lies below its initial scale the
    /// maximum wins; [`ZoomableConfig::validate`] rejects such configurations.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.initial_scale).min(self.max_scale())
    }

    /// Translation limit on each axis at `scale`.
    #[must_use]
    pub fn translate_limit(&self, scale: f64) -> f64 {
        self.zoom_ratio(scale) * self.threshold
    }

    /// Returns `true` when `value` lies beyond the translation limit at `scale`.
    #[must_use]
    pub fn overflows(&self, value: f64, scale: f64) -> bool {
        value.abs() / self.zoom_ratio(scale) > self.threshold
    }

    /// Snaps an overflowing translation onto the limit, keeping its sign.
    #[must_use]
    pub fn clamp_translate(&self, value: f64, scale: f64) -> f64 {
        if !self.overflows(value, scale) {
            return value;
        }
        let limit = self.translate_limit(scale);
        if value < 0.0 { -limit } else { limit }
    }

    /// Checks that every bound is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let initial = self.initial_scale;
        if !initial.is_finite() || initial <= 0.0 {
            return Err(ConfigError::InvalidInitialScale(initial));
        }
        let max = self.max_scale();
        if !max.is_finite() || max < initial {
            return Err(ConfigError::InvalidMaxScale { initial, max });
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        self.release.validate()
    }

    fn zoom_ratio(&self, scale: f64) -> f64 {
        scale / self.initial_scale
    }
}

impl Default for ZoomableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing and strength of the animations started when a pan is released.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReleaseConfig {
    /// Duration of the snap back onto the translation limit.
    pub correction_duration: Duration,
    /// Duration of the in-bounds settle nudge.
    pub settle_duration: Duration,
    /// Factor applied when the release drag points away from the center.
    pub overshoot: f64,
    /// Factor applied otherwise.
    pub undershoot: f64,
}

impl ReleaseConfig {
    /// 100 ms correction, 1 s settle, `1.1` / `0.9` nudge factors.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            correction_duration: Duration::from_millis(100),
            settle_duration: Duration::from_millis(1_000),
            overshoot: 1.1,
            undershoot: 0.9,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.overshoot.is_finite() || self.overshoot < 1.0 {
            return Err(ConfigError::InvalidOvershoot(self.overshoot));
        }
        if !self.undershoot.is_finite() || self.undershoot <= 0.0 || self.undershoot > 1.0 {
            return Err(ConfigError::InvalidUndershoot(self.undershoot));
        }
        Ok(())
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a [`ZoomableConfig`] cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The initial scale is not a positive finite number.
    #[error("initial scale must be finite and positive, got {0}")]
    InvalidInitialScale(f64),
    /// The maximum scale is not finite or is below the initial scale.
    #[error("max scale must be finite and at least the initial scale {initial}, got {max}")]
    InvalidMaxScale {
        /// Configured initial scale.
        initial: f64,
        /// Effective maximum scale.
        max: f64,
    },
    /// The threshold is negative or not finite.
    #[error("threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
    /// The overshoot factor is below one or not finite.
    #[error("release overshoot must be finite and at least 1, got {0}")]
    InvalidOvershoot(f64),
    /// The undershoot factor is outside `(0, 1]`.
    #[error("release undershoot must be in (0, 1], got {0}")]
    InvalidUndershoot(f64),
}
