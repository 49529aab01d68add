// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoomable --heading-base-level=0

//! Understory Zoomable: touch gestures to a pan/zoom transform.
//!
//! This crate turns a stream of touch lifecycle events into a live uniform
//! scale + translation for a zoomable surface. It focuses on:
//! - One-finger panning from a per-session baseline.
//! - Two-finger pinch-to-zoom anchored at the pinch midpoint.
//! - Release correction: snapping an out-of-bounds pan back onto its limit,
//!   or a small settle nudge when in bounds.
//! - Bounded imperative control through [`Zoomable::set_values`].
//!
//! It does **not** own an event loop, a renderer, or an animation clock.
//! Callers are expected to:
//! - Deliver grant/move/release events, with touches in page coordinates and
//!   the event source's cumulative delta since grant.
//! - Decide whether to claim gestures, optionally through a
//!   [`claim::ClaimFilter`].
//! - Supply the container size with [`Zoomable::set_layout`] once measured.
//! - Paint [`Zoomable::transform`] every frame, advancing whatever
//!   [`TransformStore`] runs their animations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoomable::{ReleaseOutcome, Zoomable, ZoomableConfig};
//!
//! let config = ZoomableConfig::new().with_threshold(100.0);
//! let mut zoomable = Zoomable::with_config(config).unwrap();
//! zoomable.set_layout(Size::new(800.0, 600.0));
//!
//! // Pinch: fingers 50 apart spread to 100 apart doubles the scale.
//! zoomable.on_grant(&[Point::new(400.0, 300.0), Point::new(450.0, 300.0)]);
//! zoomable.on_move(&[Point::new(375.0, 300.0), Point::new(475.0, 300.0)], Vec2::ZERO);
//! assert_eq!(zoomable.transform().scale, 2.0);
//! assert_eq!(zoomable.on_release(Vec2::ZERO), ReleaseOutcome::Pinched);
//!
//! // Pan: past the limit at release, the translation is corrected.
//! zoomable.on_grant(&[Point::new(0.0, 0.0)]);
//! zoomable.on_move(&[Point::new(300.0, 0.0)], Vec2::new(300.0, 0.0));
//! let outcome = zoomable.on_release(Vec2::new(300.0, 0.0));
//! assert!(matches!(outcome, ReleaseOutcome::Corrected { .. }));
//! ```
//!
//! ## Design notes
//!
//! - Scale is clamped on every pinch update; translation is only bounded at
//!   release and in [`Zoomable::set_values`].
//! - All per-gesture state lives in a [`session::Session`] created at grant
//!   and dropped at release.
//! - Release animations are fire-and-forget [`AnimationRequest`]s handed to
//!   the [`TransformStore`]. [`InstantTransform`] applies them at once;
//!   `adapters::tween::AnimatedTransform` (feature `tween_adapter`)
//!   interpolates them over time.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `tween_adapter` (default): [`adapters::tween`].
//! - `serde`: serialize configuration and transform snapshots.
//!
//! This crate is `no_std`.

#![no_std]

pub mod adapters;
pub mod claim;
mod config;
pub mod geometry;
pub mod session;
pub mod settle;
mod setter;
mod transform;
mod zoomable;

pub use config::{ConfigError, DEFAULT_THRESHOLD, ReleaseConfig, ZoomableConfig};
pub use setter::{SetValuesError, TransformUpdate};
pub use transform::{AnimationRequest, Axis, InstantTransform, Transform, TransformStore};
pub use zoomable::{ReleaseOutcome, Zoomable};
