// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Timing curve applied to the linear progress of a [`crate::Tween`].
///
/// All curves map `0.0 → 0.0` and `1.0 → 1.0`. Inputs outside `[0, 1]` are
/// clamped first, so callers can pass raw elapsed/duration ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Quadratic acceleration from rest.
    QuadIn,
    /// Quadratic deceleration to rest.
    QuadOut,
    /// Quadratic acceleration for the first half, deceleration for the second.
    #[default]
    QuadInOut,
    /// Cubic deceleration to rest.
    CubicOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        // NaN progress means a degenerate duration; treat it as finished.
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
