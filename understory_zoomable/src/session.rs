// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture state owned by the recognizer between grant and release.

use kurbo::{Point, Size};

use crate::Transform;
use crate::geometry::{TouchCenter, distance, touch_center_to_local};

/// Pinch calibration: finger spread and anchor at the start of a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    /// Distance between the two touches when the pinch began.
    pub initial_distance: f64,
    /// Touch center when the pinch began, in page and content-local space.
    pub anchor: TouchCenter,
}

impl Pinch {
    /// Calibrates a pinch from the first two `touches` under `transform`.
    ///
    /// Returns `None` when the touches coincide, since no scale ratio can be
    /// measured against a zero spread.
    #[must_use]
    pub fn calibrate(touches: &[Point], layout: Size, transform: &Transform) -> Option<Self> {
        let initial_distance = distance(touches);
        if initial_distance <= 0.0 || !initial_distance.is_finite() {
            return None;
        }
        Some(Self {
            initial_distance,
            anchor: touch_center_to_local(touches, layout, transform),
        })
    }

    /// Ratio of the current spread to the spread at calibration.
    #[must_use]
    pub fn spread_ratio(&self, touches: &[Point]) -> f64 {
        distance(touches) / self.initial_distance
    }
}

/// State of one touch sequence, from grant to release.
///
/// The baseline is captured once at grant and never changes. The pinch
/// calibration is set at grant when two touches are down, or on the first
/// two-touch move otherwise, and stays set for the rest of the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    baseline: Transform,
    pinch: Option<Pinch>,
    zoomed: bool,
}

impl Session {
    /// Starts a session from the live transform at grant time.
    #[must_use]
    pub fn new(baseline: Transform, pinch: Option<Pinch>) -> Self {
        Self {
            baseline,
            pinch,
            zoomed: false,
        }
    }

    /// Transform captured at grant.
    #[must_use]
    pub fn baseline(&self) -> &Transform {
        &self.baseline
    }

    /// Pinch calibration, once one exists.
    #[must_use]
    pub fn pinch(&self) -> Option<&Pinch> {
        self.pinch.as_ref()
    }

    /// Returns `true` if any two-touch move happened during this session.
    #[must_use]
    pub fn is_zoom(&self) -> bool {
        self.zoomed
    }

    pub(crate) fn mark_zoom(&mut self) {
        self.zoomed = true;
    }

    pub(crate) fn set_pinch(&mut self, pinch: Option<Pinch>) {
        self.pinch = pinch;
    }
}
