// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release settling: what happens to the translation when a pan ends.
//!
//! If either translation axis lies beyond its limit, both axes animate quickly
//! toward a target where each overflowing axis sits exactly on its limit.
//! Otherwise both axes get a slow cosmetic nudge: an axis is pushed a little
//! further out when the release drag pointed away from the center on that
//! axis, and pulled a little back in otherwise.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_zoomable::settle::{SettleKind, plan};
//! use understory_zoomable::{Transform, ZoomableConfig};
//!
//! let config = ZoomableConfig::new().with_threshold(100.0);
//! let released = Transform::new(1.0, Vec2::new(150.0, 20.0));
//!
//! let settle = plan(&config, &released, Vec2::new(150.0, 0.0));
//! assert_eq!(settle.kind, SettleKind::Correct);
//! assert_eq!(settle.target, Vec2::new(100.0, 20.0));
//! ```

use core::time::Duration;

use kurbo::Vec2;

use crate::{AnimationRequest, Axis, Transform, ZoomableConfig};

/// Which release animation was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleKind {
    /// At least one axis overflowed and is snapped back onto its limit.
    Correct,
    /// Everything was in bounds; a small nudge marks the end of the gesture.
    Nudge,
}

/// Animated translation target chosen at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    /// Why the target was chosen.
    pub kind: SettleKind,
    /// Translation to animate toward.
    pub target: Vec2,
    /// Time to take on both axes.
    pub duration: Duration,
}

impl Settle {
    /// The two translation animations this settle asks for.
    #[must_use]
    pub fn requests(&self) -> [AnimationRequest; 2] {
        [
            AnimationRequest {
                axis: Axis::TranslateX,
                target: self.target.x,
                duration: self.duration,
            },
            AnimationRequest {
                axis: Axis::TranslateY,
                target: self.target.y,
                duration: self.duration,
            },
        ]
    }
}

/// Chooses the release animation for `transform`.
///
/// `release_delta` is the event source's cumulative drag since touch-down.
#[must_use]
pub fn plan(config: &ZoomableConfig, transform: &Transform, release_delta: Vec2) -> Settle {
    let scale = transform.scale;
    let t = transform.translate;
    let overflow_x = config.overflows(t.x, scale);
    let overflow_y = config.overflows(t.y, scale);

    if overflow_x || overflow_y {
        return Settle {
            kind: SettleKind::Correct,
            target: Vec2::new(
                config.clamp_translate(t.x, scale),
                config.clamp_translate(t.y, scale),
            ),
            duration: config.release.correction_duration,
        };
    }

    let release = &config.release;
    let nudge = |value: f64, drag: f64| {
        // Same sign, both non-zero: the drag was heading away from the center.
        if value * drag > 0.0 {
            value * release.overshoot
        } else {
            value * release.undershoot
        }
    };
    Settle {
        kind: SettleKind::Nudge,
        target: Vec2::new(nudge(t.x, release_delta.x), nudge(t.y, release_delta.y)),
        duration: release.settle_duration,
    }
}
