// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Understory crates.
//!
//! Modules in this file are behind feature flags so `understory_zoomable` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`tween`] (`tween_adapter` feature): a [`crate::TransformStore`] whose
//!   axes are [`understory_tween::AnimatedValue`]s.

#[cfg(feature = "tween_adapter")]
pub mod tween;
