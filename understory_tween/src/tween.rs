// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::Easing;

/// A single timed interpolation between two scalar values.
///
/// Timestamps are host-supplied milliseconds on any monotonic clock. A tween
/// holds no clock of its own; it is evaluated at whatever time the caller
/// asks about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Value at `start_ms` and earlier.
    pub from: f64,
    /// Value at `start_ms + duration` and later.
    pub to: f64,
    /// Host timestamp at which the tween begins.
    pub start_ms: u64,
    /// Time taken to travel from `from` to `to`.
    pub duration: Duration,
    /// Curve applied to linear progress.
    pub easing: Easing,
}

impl Tween {
    /// Creates a tween starting at `start_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: u64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    ///
    /// Zero-length tweens report `1.0` as soon as they start.
    #[must_use]
    pub fn progress_at(&self, now_ms: u64) -> f64 {
        if now_ms < self.start_ms {
            return 0.0;
        }
        let total_ms = self.duration.as_secs_f64() * 1000.0;
        if total_ms <= 0.0 {
            return 1.0;
        }
        let elapsed_ms = (now_ms - self.start_ms) as f64;
        (elapsed_ms / total_ms).min(1.0)
    }

    /// Interpolated value at `now_ms`.
    #[must_use]
    pub fn value_at(&self, now_ms: u64) -> f64 {
        let t = self.progress_at(now_ms);
        if t >= 1.0 {
            // Land exactly on the target rather than on `from + (to - from) * 1.0`.
            return self.to;
        }
        let eased = self.easing.apply(t);
        self.from + (self.to - self.from) * eased
    }

    /// Returns `true` once `now_ms` has reached the end of the tween.
    #[must_use]
    pub fn is_finished_at(&self, now_ms: u64) -> bool {
        self.progress_at(now_ms) >= 1.0
    }
}
