// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tween adapter: back the live transform with `understory_tween` values.
//!
//! [`AnimatedTransform`] keeps one [`AnimatedValue`] per [`Axis`]. The host
//! ticks it once per frame with [`Zoomable::advance_to`] and paints
//! [`Zoomable::transform`]. Release animations requested by the recognizer
//! start on the first tick after the release, however long the host stayed
//! idle before it.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoomable::adapters::tween::AnimatedTransform;
//! use understory_zoomable::{Transform, Zoomable, ZoomableConfig};
//!
//! let config = ZoomableConfig::new().with_threshold(100.0);
//! let store = AnimatedTransform::new(Transform::at_scale(1.0));
//! let mut zoomable = Zoomable::new(config, store).unwrap();
//! zoomable.set_layout(Size::new(400.0, 400.0));
//!
//! zoomable.on_grant(&[Point::new(0.0, 0.0)]);
//! zoomable.on_move(&[Point::new(150.0, 0.0)], Vec2::new(150.0, 0.0));
//! zoomable.on_release(Vec2::new(150.0, 0.0));
//!
//! // The correction runs over 100 ms from the next frame.
//! zoomable.advance_to(1_000);
//! assert_eq!(zoomable.transform().translate.x, 150.0);
//!
//! zoomable.advance_to(1_050);
//! let halfway = zoomable.transform().translate.x;
//! assert!(halfway < 150.0 && halfway > 100.0);
//!
//! zoomable.advance_to(1_100);
//! assert_eq!(zoomable.transform().translate.x, 100.0);
//! ```

use understory_tween::{AnimatedValue, Easing};

use crate::{AnimationRequest, Axis, Transform, TransformStore, Zoomable};

/// A [`TransformStore`] that animates axes with [`AnimatedValue`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedTransform {
    scale: AnimatedValue,
    translate_x: AnimatedValue,
    translate_y: AnimatedValue,
    easing: Easing,
}

impl AnimatedTransform {
    /// Creates a store at rest at `initial`, using the default easing.
    #[must_use]
    pub fn new(initial: Transform) -> Self {
        Self {
            scale: AnimatedValue::new(initial.scale),
            translate_x: AnimatedValue::new(initial.translate.x),
            translate_y: AnimatedValue::new(initial.translate.y),
            easing: Easing::default(),
        }
    }

    /// Uses `easing` for animations started from now on.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Easing applied to requested animations.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The animated value behind `axis`.
    #[must_use]
    pub fn value(&self, axis: Axis) -> &AnimatedValue {
        match axis {
            Axis::Scale => &self.scale,
            Axis::TranslateX => &self.translate_x,
            Axis::TranslateY => &self.translate_y,
        }
    }

    /// Advances every axis to the host timestamp `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        for axis in Axis::ALL {
            self.value_mut(axis).advance_to(now_ms);
        }
    }

    /// Returns `true` while any axis is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        Axis::ALL.into_iter().any(|axis| self.value(axis).is_animating())
    }

    /// Where the transform will rest once running animations finish.
    #[must_use]
    pub fn target(&self) -> Transform {
        let mut target = Transform::IDENTITY;
        for axis in Axis::ALL {
            target.set(axis, self.value(axis).target());
        }
        target
    }

    fn value_mut(&mut self, axis: Axis) -> &mut AnimatedValue {
        match axis {
            Axis::Scale => &mut self.scale,
            Axis::TranslateX => &mut self.translate_x,
            Axis::TranslateY => &mut self.translate_y,
        }
    }
}

impl Default for AnimatedTransform {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

impl Zoomable<AnimatedTransform> {
    /// Advances running transform animations to the host timestamp `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.store_mut().advance_to(now_ms);
    }

    /// Returns `true` while any transform axis is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.store().is_animating()
    }
}

impl TransformStore for AnimatedTransform {
    fn get(&self, axis: Axis) -> f64 {
        self.value(axis).value()
    }

    fn set(&mut self, axis: Axis, value: f64) {
        self.value_mut(axis).set(value);
    }

    fn animate(&mut self, request: AnimationRequest) {
        let easing = self.easing;
        self.value_mut(request.axis)
            .animate_to(request.target, request.duration, easing);
    }
}
