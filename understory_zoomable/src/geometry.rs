// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-touch geometry: finger spread and the pinch center in page and
//! content-local coordinates.
//!
//! Both helpers read only the first two touches and panic when fewer are
//! supplied. The recognizer only calls them from its two-touch branches.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoomable::Transform;
//! use understory_zoomable::geometry::{distance, touch_center_to_local};
//!
//! let touches = [Point::new(100.0, 100.0), Point::new(100.0, 140.0)];
//! assert_eq!(distance(&touches), 40.0);
//!
//! let layout = Size::new(0.0, 0.0);
//! let zoomed = Transform::new(2.0, Vec2::new(20.0, 0.0));
//! let center = touch_center_to_local(&touches, layout, &zoomed);
//! assert_eq!(center.page, Point::new(100.0, 120.0));
//! assert_eq!(center.local, Point::new(40.0, 60.0));
//! ```

use kurbo::{Point, Size};

use crate::Transform;

/// A two-touch midpoint in page space and in content-local space.
///
/// Captured at the start of a pinch, this is the pinch anchor: `local` is the
/// content point that must stay under the fingers' midpoint while the scale
/// changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchCenter {
    /// Midpoint of the touches, offset by the container layout.
    pub page: Point,
    /// `page` with the transform undone: `(page - translate) / scale`.
    pub local: Point,
}

/// Euclidean distance between the first two touches.
///
/// # Panics
///
/// Panics if fewer than two touches are supplied.
#[must_use]
pub fn distance(touches: &[Point]) -> f64 {
    let [a, b] = first_two(touches);
    a.distance(b)
}

/// Midpoint of the first two touches, relative to the container, expressed
/// both in page space and in the content space of `transform`.
///
/// The container offset subtracted from the midpoint is the measured layout
/// `(width, height)`.
///
/// # Panics
///
/// Panics if fewer than two touches are supplied.
#[must_use]
pub fn touch_center_to_local(
    touches: &[Point],
    layout: Size,
    transform: &Transform,
) -> TouchCenter {
    let [a, b] = first_two(touches);
    let page = a.midpoint(b) - layout.to_vec2();
    TouchCenter {
        page,
        local: transform.page_to_local(page),
    }
}

fn first_two(touches: &[Point]) -> [Point; 2] {
    assert!(
        touches.len() >= 2,
        "two-touch geometry needs at least two touches, got {}",
        touches.len()
    );
    [touches[0], touches[1]]
}
