// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar values that can be written immediately or animated over time.
//!
//! ## Usage
//!
//! 1) Create an [`AnimatedValue`] with its initial value.
//! 2) Each frame, call [`AnimatedValue::advance_to`] with the host's clock.
//! 3) Read [`AnimatedValue::value`] whenever the current value is needed.
//! 4) Call [`AnimatedValue::set`] for immediate writes or
//!    [`AnimatedValue::animate_to`] to request an interpolation.
//!
//! A requested tween is queued and starts at the next
//! [`AnimatedValue::advance_to`], so hosts that stop ticking while idle still
//! see the full animation once frames resume.
//!
//! Any write supersedes an in-flight animation. Reads during an animation
//! return the interpolated value at the last advanced time, never the value
//! from before the animation started.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_tween::{AnimatedValue, Easing};
//!
//! let mut v = AnimatedValue::new(0.0);
//! v.animate_to(100.0, Duration::from_millis(100), Easing::Linear);
//!
//! // The first frame after the request starts the clock.
//! v.advance_to(1_000);
//! assert_eq!(v.value(), 0.0);
//!
//! v.advance_to(1_050);
//! assert_eq!(v.value(), 50.0);
//!
//! v.advance_to(1_100);
//! assert_eq!(v.value(), 100.0);
//! assert!(!v.is_animating());
//! ```

use core::time::Duration;

use crate::{Easing, Tween};

/// A scalar that is either at rest or travelling along a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    resting: f64,
    now_ms: u64,
    tween: Option<Tween>,
    queued: bool,
}

impl AnimatedValue {
    /// Creates a value at rest at time zero.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            resting: value,
            now_ms: 0,
            tween: None,
            queued: false,
        }
    }

    /// Current value at the last advanced time.
    #[must_use]
    pub fn value(&self) -> f64 {
        match &self.tween {
            Some(tween) if self.queued => tween.from,
            Some(tween) => tween.value_at(self.now_ms),
            None => self.resting,
        }
    }

    /// Value this one is heading toward; the current value when at rest.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.tween.map_or(self.resting, |tween| tween.to)
    }

    /// Last time passed to [`AnimatedValue::advance_to`].
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The in-flight tween, if any.
    ///
    /// A queued tween reports the last advanced time as its start until the
    /// next [`AnimatedValue::advance_to`] stamps it.
    #[must_use]
    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Returns `true` while a tween is queued or in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Returns `true` when a tween has been requested but no frame has
    /// started it yet.
    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.queued
    }

    /// Writes `value` immediately, cancelling any in-flight tween.
    pub fn set(&mut self, value: f64) {
        self.tween = None;
        self.queued = false;
        self.resting = value;
    }

    /// Requests an animation from the current value toward `target`.
    ///
    /// The tween starts at the next [`AnimatedValue::advance_to`]. A tween
    /// already in flight is replaced; the new one starts from wherever the old
    /// one had reached.
    pub fn animate_to(&mut self, target: f64, duration: Duration, easing: Easing) {
        let from = self.value();
        self.resting = from;
        if duration.is_zero() {
            self.set(target);
            return;
        }
        log::trace!("tween {from} -> {target} over {duration:?} queued");
        self.tween = Some(Tween::new(from, target, self.now_ms, duration, easing));
        self.queued = true;
    }

    /// Advances the clock to `now_ms`, starting a queued tween and settling a
    /// finished one.
    ///
    /// Time never moves backwards; earlier timestamps are ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        if self.queued {
            tween.start_ms = self.now_ms;
            self.queued = false;
        }
        if tween.is_finished_at(self.now_ms) {
            self.resting = tween.to;
            self.tween = None;
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
