// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::claim::ClaimFilter;
use crate::geometry::touch_center_to_local;
use crate::session::{Pinch, Session};
use crate::settle::{self, SettleKind};
use crate::setter::{self, SetValuesError, TransformUpdate};
use crate::{Axis, ConfigError, InstantTransform, Transform, TransformStore, ZoomableConfig};

/// Result of [`Zoomable::on_release`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// No session was active, so there was nothing to release.
    Idle,
    /// Release actions are turned off in the configuration.
    Disabled,
    /// The session included a pinch; pinches are left where they ended.
    Pinched,
    /// The translation overflowed and is animating back onto its limit.
    Corrected {
        /// Translation being animated toward.
        target: Vec2,
    },
    /// The translation was in bounds and is animating a small settle nudge.
    Settled {
        /// Translation being animated toward.
        target: Vec2,
    },
}

/// Pinch-to-zoom and pan recognizer over a [`TransformStore`].
///
/// The event source drives it with one touch sequence at a time:
///
/// - [`Zoomable::on_grant`] when the sequence is claimed,
/// - [`Zoomable::on_move`] for every movement, with the current touches and
///   the cumulative delta of the primary touch since grant,
/// - [`Zoomable::on_release`] when the sequence ends.
///
/// One touch pans. Two touches pinch, scaling by the change in finger spread
/// while keeping the content point under the fingers' midpoint fixed under
/// that midpoint. Scale always stays within `[initial_scale, max_scale]`;
/// translation is only bounded on release and by [`Zoomable::set_values`].
///
/// Nothing happens until a layout has been supplied with
/// [`Zoomable::set_layout`].
///
/// The store is only written by the recognizer and by
/// [`Zoomable::set_values`]; it is not handed out mutably.
///
/// ```compile_fail
/// use understory_zoomable::{Axis, TransformStore, Zoomable, ZoomableConfig};
///
/// let mut zoomable = Zoomable::with_config(ZoomableConfig::new()).unwrap();
/// zoomable.store_mut().set(Axis::Scale, 50.0);
/// ```
#[derive(Clone, Debug)]
pub struct Zoomable<S> {
    config: ZoomableConfig,
    store: S,
    layout: Option<Size>,
    session: Option<Session>,
}

impl Zoomable<InstantTransform> {
    /// Creates a recognizer over an [`InstantTransform`] at the initial scale.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn with_config(config: ZoomableConfig) -> Result<Self, ConfigError> {
        let store = InstantTransform::new(Transform::at_scale(config.initial_scale));
        Self::new(config, store)
    }
}

impl<S: TransformStore> Zoomable<S> {
    /// Creates a recognizer over `store`.
    ///
    /// If the store's scale lies outside the configured range it is clamped
    /// into it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: ZoomableConfig, mut store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let scale = store.get(Axis::Scale);
        let clamped = config.clamp_scale(scale);
        if clamped != scale {
            store.set(Axis::Scale, clamped);
        }
        Ok(Self {
            config,
            store,
            layout: None,
            session: None,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomableConfig {
        &self.config
    }

    /// Returns the transform store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(feature = "tween_adapter")]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current live transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.store.transform()
    }

    /// Records the measured container size.
    pub fn set_layout(&mut self, layout: Size) {
        self.layout = Some(layout);
    }

    /// Forgets the measured container size.
    pub fn clear_layout(&mut self) {
        self.layout = None;
    }

    /// Measured container size, if known.
    #[must_use]
    pub fn layout(&self) -> Option<Size> {
        self.layout
    }

    /// Returns `true` between a successful grant and the next release.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a move with cumulative `delta` should be claimed.
    ///
    /// Always `false` when disabled; otherwise `filter` decides.
    pub fn should_claim<F: ClaimFilter + ?Sized>(&self, delta: Vec2, filter: &F) -> bool {
        !self.config.disabled && filter.allow(delta)
    }

    /// Starts a session for a newly claimed touch sequence.
    ///
    /// The live transform, including any animation still in flight, becomes
    /// the session baseline. With two touches down the pinch is calibrated
    /// immediately. With no layout or no touches the recognizer stays idle.
    pub fn on_grant(&mut self, touches: &[Point]) {
        self.session = None;
        let Some(layout) = self.layout else {
            log::debug!("grant ignored: layout not measured yet");
            return;
        };
        if touches.is_empty() {
            log::debug!("grant ignored: no touches");
            return;
        }
        let baseline = self.store.transform();
        let pinch = if touches.len() == 2 {
            Pinch::calibrate(touches, layout, &baseline)
        } else {
            None
        };
        log::debug!(
            "session started with {} touch(es), baseline {baseline:?}",
            touches.len()
        );
        self.session = Some(Session::new(baseline, pinch));
    }

    /// Tracks movement within the active session.
    ///
    /// `delta` is the primary touch's cumulative movement since grant, as
    /// reported by the event source; it drives one-touch panning.
    pub fn on_move(&mut self, touches: &[Point], delta: Vec2) {
        let Some(layout) = self.layout else {
            return;
        };
        if let Some(session) = self.session.as_mut() {
            track(session, &self.config, &mut self.store, layout, touches, delta);
        }
    }

    /// Ends the active session and starts the release animation, if any.
    ///
    /// `delta` is the primary touch's cumulative movement at release; its
    /// direction picks the settle nudge. Animation requests are handed to the
    /// store and not waited on.
    pub fn on_release(&mut self, delta: Vec2) -> ReleaseOutcome {
        let Some(session) = self.session.take() else {
            return ReleaseOutcome::Idle;
        };
        let outcome = release(&session, &self.config, &mut self.store, delta);
        log::debug!("session released: {outcome:?}");
        outcome
    }

    /// Sets scale and/or translation directly, applying the same bounds as
    /// gestures. Writes are immediate and supersede running animations.
    ///
    /// # Errors
    ///
    /// - [`SetValuesError::Empty`] if `update` carries neither value.
    /// - [`SetValuesError::NonFinite`] if any value is NaN or infinite.
    pub fn set_values(&mut self, update: TransformUpdate) -> Result<Transform, SetValuesError> {
        setter::apply(&self.config, &mut self.store, update)
    }
}

fn track<S: TransformStore + ?Sized>(
    session: &mut Session,
    config: &ZoomableConfig,
    store: &mut S,
    layout: Size,
    touches: &[Point],
    delta: Vec2,
) {
    match touches.len() {
        2 => {
            session.mark_zoom();
            let current = store.transform();
            let Some(pinch) = session.pinch().copied() else {
                // First two-touch frame: calibrate, move nothing.
                let pinch = Pinch::calibrate(touches, layout, &current);
                log::debug!("pinch calibrated mid-session: {pinch:?}");
                session.set_pinch(pinch);
                return;
            };
            let scale = config.clamp_scale(pinch.spread_ratio(touches) * session.baseline().scale);
            store.set(Axis::Scale, scale);

            // Track the anchor against the current midpoint at the new scale.
            let tracking = Transform::new(scale, current.translate);
            let center = touch_center_to_local(touches, layout, &tracking);
            let translate = center.page.to_vec2() - pinch.anchor.local.to_vec2() * scale;
            store.set(Axis::TranslateX, translate.x);
            store.set(Axis::TranslateY, translate.y);
            log::trace!("pinch scale {scale} translate {translate:?}");
        }
        1 => {
            // Leftover single touch after a pinch: not a new pan.
            if session.pinch().is_some() {
                return;
            }
            let translate = session.baseline().translate + delta;
            store.set(Axis::TranslateX, translate.x);
            store.set(Axis::TranslateY, translate.y);
            log::trace!("pan translate {translate:?}");
        }
        _ => {}
    }
}

fn release<S: TransformStore + ?Sized>(
    session: &Session,
    config: &ZoomableConfig,
    store: &mut S,
    delta: Vec2,
) -> ReleaseOutcome {
    if config.disable_release_action {
        return ReleaseOutcome::Disabled;
    }
    if session.is_zoom() {
        return ReleaseOutcome::Pinched;
    }
    let plan = settle::plan(config, &store.transform(), delta);
    for request in plan.requests() {
        store.animate(request);
    }
    match plan.kind {
        SettleKind::Correct => ReleaseOutcome::Corrected { target: plan.target },
        SettleKind::Nudge => ReleaseOutcome::Settled { target: plan.target },
    }
}
