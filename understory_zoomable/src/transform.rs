// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Vec2};

/// Uniform scale plus translation applied to zoomable content.
///
/// Content-local point `p` is painted at page point `p * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in page units.
    pub translate: Vec2,
}

impl Transform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self::at_scale(1.0);

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// A transform at `scale` with no translation.
    #[must_use]
    pub const fn at_scale(scale: f64) -> Self {
        Self::new(scale, Vec2::ZERO)
    }

    /// Reads one axis.
    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Scale => self.scale,
            Axis::TranslateX => self.translate.x,
            Axis::TranslateY => self.translate.y,
        }
    }

    /// Writes one axis.
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Scale => self.scale = value,
            Axis::TranslateX => self.translate.x = value,
            Axis::TranslateY => self.translate.y = value,
        }
    }

    /// Maps a content-local point to page space.
    #[must_use]
    pub fn local_to_page(&self, local: Point) -> Point {
        (local.to_vec2() * self.scale + self.translate).to_point()
    }

    /// Maps a page point back into content-local space.
    #[must_use]
    pub fn page_to_local(&self, page: Point) -> Point {
        ((page.to_vec2() - self.translate) / self.scale).to_point()
    }

    /// The equivalent affine: translate after scaling about the content origin.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One independently stored and animated component of a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// [`Transform::scale`].
    Scale,
    /// Horizontal component of [`Transform::translate`].
    TranslateX,
    /// Vertical component of [`Transform::translate`].
    TranslateY,
}

impl Axis {
    /// Every axis, scale first.
    pub const ALL: [Self; 3] = [Self::Scale, Self::TranslateX, Self::TranslateY];
}

/// Fire-and-forget request to move one axis toward `target` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Axis to animate.
    pub axis: Axis,
    /// Value to arrive at.
    pub target: f64,
    /// Time to take getting there.
    pub duration: Duration,
}

/// Holder of the live transform values.
///
/// Stores sit between the recognizer and whatever paints the content. The
/// recognizer reads the live values through [`TransformStore::get`], writes
/// immediate updates through [`TransformStore::set`], and hands animated
/// transitions to [`TransformStore::animate`] without waiting on them.
///
/// Implementations must return the current value from `get` while an
/// animation is in flight, and a `set` on an axis must supersede any animation
/// running on that axis.
pub trait TransformStore {
    /// Current value of `axis`.
    fn get(&self, axis: Axis) -> f64;

    /// Writes `value` to `axis` immediately.
    fn set(&mut self, axis: Axis, value: f64);

    /// Starts moving an axis toward a target. Must not block.
    fn animate(&mut self, request: AnimationRequest);

    /// Snapshot of all three axes.
    fn transform(&self) -> Transform {
        Transform::new(
            self.get(Axis::Scale),
            Vec2::new(self.get(Axis::TranslateX), self.get(Axis::TranslateY)),
        )
    }
}

/// A [`TransformStore`] without an animation runtime.
///
/// Animation requests land on their target at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InstantTransform {
    transform: Transform,
}

impl InstantTransform {
    /// Creates a store holding `transform`.
    #[must_use]
    pub fn new(transform: Transform) -> Self {
        Self { transform }
    }
}

impl TransformStore for InstantTransform {
    fn get(&self, axis: Axis) -> f64 {
        self.transform.get(axis)
    }

    fn set(&mut self, axis: Axis, value: f64) {
        self.transform.set(axis, value);
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.transform.set(request.axis, request.target);
    }

    fn transform(&self) -> Transform {
        self.transform
    }
}
