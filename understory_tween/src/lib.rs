// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tween --heading-base-level=0

//! Understory Tween: host-driven timed interpolation of scalar values.
//!
//! This crate provides the small amount of machinery needed to animate a UI
//! value toward a target without owning a clock or a frame loop:
//!
//! - [`Easing`]: timing curves applied to linear progress.
//! - [`Tween`]: a single `from → to` interpolation over a duration.
//! - [`AnimatedValue`]: a scalar that can be written immediately or animated,
//!   where any write supersedes an in-flight animation.
//!
//! Callers are expected to:
//! - Advance values with their own monotonic timestamps (milliseconds), once
//!   per frame. A requested animation starts at the next advance.
//! - Read [`AnimatedValue::value`] when painting.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_tween::{AnimatedValue, Easing};
//!
//! let mut offset = AnimatedValue::new(150.0);
//! offset.animate_to(100.0, Duration::from_millis(100), Easing::QuadInOut);
//!
//! // First frame starts the tween.
//! offset.advance_to(0);
//!
//! // Half way through a symmetric curve we are exactly half way there.
//! offset.advance_to(50);
//! assert!((offset.value() - 125.0).abs() < 1e-9);
//!
//! offset.advance_to(100);
//! assert_eq!(offset.value(), 100.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod easing;
mod tween;
pub mod value;

pub use easing::Easing;
pub use tween::Tween;
pub use value::AnimatedValue;
