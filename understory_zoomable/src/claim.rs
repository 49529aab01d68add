// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicates deciding whether early movement should claim a gesture.
//!
//! The recognizer itself only refuses when disabled. Anything else, such as
//! ignoring tap-sized jitter so that children keep receiving taps on
//! platforms where a claimed gesture stops propagation, is supplied by the
//! event source as a [`ClaimFilter`].
//!
//! ```
//! use kurbo::Vec2;
//! use understory_zoomable::claim::{ClaimFilter, JitterFilter};
//!
//! let filter = JitterFilter::default();
//! assert!(!filter.allow(Vec2::new(2.0, -3.0)));
//! assert!(filter.allow(Vec2::new(0.0, 12.0)));
//!
//! // Closures work too.
//! let horizontal_only = |delta: Vec2| delta.x.abs() > delta.y.abs();
//! assert!(horizontal_only.allow(Vec2::new(10.0, 1.0)));
//! ```

use kurbo::Vec2;

/// Decides whether a move with cumulative `delta` since touch-down should be
/// claimed as a gesture.
pub trait ClaimFilter {
    /// Returns `true` to claim.
    fn allow(&self, delta: Vec2) -> bool;
}

impl<F: Fn(Vec2) -> bool> ClaimFilter for F {
    fn allow(&self, delta: Vec2) -> bool {
        self(delta)
    }
}

/// Claims every move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysClaim;

impl ClaimFilter for AlwaysClaim {
    fn allow(&self, _delta: Vec2) -> bool {
        true
    }
}

/// Refuses moves that stay strictly within `±tolerance` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JitterFilter {
    /// Half-width of the square treated as a tap rather than a gesture.
    pub tolerance: f64,
}

impl JitterFilter {
    /// Tolerance used when none is given.
    pub const DEFAULT_TOLERANCE: f64 = 5.0;

    /// Creates a filter with the given tolerance.
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for JitterFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}

impl ClaimFilter for JitterFilter {
    fn allow(&self, delta: Vec2) -> bool {
        let t = self.tolerance;
        let is_tap = delta.x > -t && delta.x < t && delta.y > -t && delta.y < t;
        !is_tap
    }
}
