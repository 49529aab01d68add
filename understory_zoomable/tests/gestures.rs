// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture tests for `understory_zoomable`.
//!
//! These drive a `Zoomable` through grant/move/release sequences the way an
//! event source would, and check the scale bounds, the pinch anchor, and the
//! release decisions.

use kurbo::{Point, Size, Vec2};
use understory_zoomable::{
    AnimationRequest, Axis, InstantTransform, ReleaseOutcome, SetValuesError, Transform,
    TransformStore, TransformUpdate, Zoomable, ZoomableConfig,
};

/// Instant store that also records every animation request.
#[derive(Debug, Default)]
struct Recording {
    inner: InstantTransform,
    requests: Vec<AnimationRequest>,
}

impl TransformStore for Recording {
    fn get(&self, axis: Axis) -> f64 {
        self.inner.get(axis)
    }

    fn set(&mut self, axis: Axis, value: f64) {
        self.inner.set(axis, value);
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.requests.push(request);
        self.inner.animate(request);
    }
}

fn scenario_config() -> ZoomableConfig {
    ZoomableConfig::new()
        .with_initial_scale(1.0)
        .with_max_scale(2.0)
        .with_threshold(100.0)
}

fn recording(config: ZoomableConfig, layout: Size) -> Zoomable<Recording> {
    let store = Recording {
        inner: InstantTransform::new(Transform::at_scale(config.initial_scale)),
        requests: Vec::new(),
    };
    let mut z = Zoomable::new(config, store).unwrap();
    z.set_layout(layout);
    z
}

fn pair(center: Point, spread: f64, angle: f64) -> [Point; 2] {
    let half = Vec2::from_angle(angle) * (spread / 2.0);
    [center - half, center + half]
}

#[test]
fn pinch_doubling_spread_reaches_max_scale() {
    let mut z = recording(scenario_config(), Size::ZERO);

    z.on_grant(&pair(Point::new(200.0, 200.0), 50.0, 0.0));
    z.on_move(&pair(Point::new(200.0, 200.0), 100.0, 0.0), Vec2::ZERO);

    assert_eq!(z.transform().scale, 2.0);
}

#[test]
fn pan_past_threshold_is_corrected_onto_the_boundary() {
    let mut z = recording(scenario_config(), Size::ZERO);

    z.on_grant(&[Point::ZERO]);
    z.on_move(&[Point::new(150.0, 0.0)], Vec2::new(150.0, 0.0));
    assert_eq!(z.transform().translate.x, 150.0);

    let outcome = z.on_release(Vec2::new(150.0, 0.0));
    assert_eq!(
        outcome,
        ReleaseOutcome::Corrected {
            target: Vec2::new(100.0, 0.0)
        }
    );

    let requests = &z.store().requests;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].axis, Axis::TranslateX);
    assert_eq!(requests[0].target, 100.0);
    assert_eq!(requests[0].duration.as_millis(), 100);
    assert_eq!(z.transform().translate.x, 100.0);
}

#[test]
fn correction_lands_exactly_on_the_boundary_formula() {
    let config = scenario_config().with_max_scale(3.0);
    for scale in [1.0, 1.25, 2.0, 3.0] {
        for offset in [-1_000.0, -301.0, 260.0, 999.5] {
            let mut z = recording(config, Size::ZERO);
            z.set_values(TransformUpdate::scale(scale)).unwrap();
            z.on_grant(&[Point::ZERO]);
            z.on_move(&[Point::new(offset, offset)], Vec2::new(offset, offset));
            let released = z.transform();
            z.on_release(Vec2::new(offset, offset));

            let ratio = released.scale / config.initial_scale;
            for axis in [Axis::TranslateX, Axis::TranslateY] {
                let before = released.get(axis);
                let after = z.transform().get(axis);
                if before.abs() / ratio > config.threshold {
                    assert_eq!(after, before.signum() * ratio * config.threshold);
                } else {
                    assert_ne!(after, before, "in-bounds release should nudge");
                }
            }
        }
    }
}

#[test]
fn in_bounds_pan_release_settles_with_a_nudge() {
    let mut z = recording(scenario_config(), Size::ZERO);

    z.on_grant(&[Point::ZERO]);
    z.on_move(&[Point::new(60.0, -20.0)], Vec2::new(60.0, -20.0));
    let outcome = z.on_release(Vec2::new(60.0, -20.0));

    let ReleaseOutcome::Settled { target } = outcome else {
        panic!("expected a settle nudge, got {outcome:?}");
    };
    assert!((target - Vec2::new(66.0, -22.0)).hypot() < 1e-9);
    assert!(
        z.store()
            .requests
            .iter()
            .all(|r| r.duration.as_millis() == 1_000)
    );
}

#[test]
fn scale_stays_in_bounds_after_every_pinch_move() {
    let config = scenario_config();
    let center = Point::new(300.0, 240.0);
    for start_spread in [10.0, 80.0, 240.0] {
        let mut z = recording(config, Size::new(40.0, 30.0));
        z.on_grant(&pair(center, start_spread, 0.3));
        for step in 1..=60 {
            let f = f64::from(step);
            let spread = start_spread * (0.05 + (f * 0.37).sin().abs() * 6.0);
            let wobble = Vec2::new((f * 1.3).cos() * 12.0, (f * 0.7).sin() * 9.0);
            z.on_move(&pair(center + wobble, spread, 0.3 + f * 0.01), Vec2::ZERO);

            let scale = z.transform().scale;
            assert!(
                (config.initial_scale..=config.max_scale()).contains(&scale),
                "scale {scale} out of bounds at step {step}"
            );
        }
        assert_eq!(z.on_release(Vec2::ZERO), ReleaseOutcome::Pinched);
    }
}

#[test]
fn pinch_keeps_the_anchor_under_the_current_midpoint() {
    let layout = Size::new(50.0, 20.0);
    let mut z = recording(scenario_config(), layout);
    z.set_values(TransformUpdate::scale(1.2).with_translate(Vec2::new(-30.0, 15.0)))
        .unwrap();

    let start = pair(Point::new(260.0, 180.0), 60.0, 0.0);
    z.on_grant(&start);
    let anchor = z.session().and_then(|s| s.pinch()).unwrap().anchor;

    for (center, spread) in [
        (Point::new(262.0, 181.0), 70.0),
        (Point::new(270.0, 175.0), 95.0),
        (Point::new(255.0, 190.0), 55.0),
        (Point::new(240.0, 200.0), 140.0),
    ] {
        z.on_move(&pair(center, spread, 0.0), Vec2::ZERO);
        let t = z.transform();
        let page = center - layout.to_vec2();
        assert!((t.translate.x - (page.x - anchor.local.x * t.scale)).abs() < 1e-9);
        assert!((t.translate.y - (page.y - anchor.local.y * t.scale)).abs() < 1e-9);
        // The anchored content point is painted under the midpoint.
        assert!((t.local_to_page(anchor.local) - page).hypot() < 1e-9);
    }
}

#[test]
fn pure_pinch_release_never_settles() {
    let mut z = recording(scenario_config(), Size::ZERO);
    z.on_grant(&pair(Point::new(100.0, 100.0), 40.0, 0.0));
    // Far enough from center that a pan would be corrected.
    z.on_move(&pair(Point::new(900.0, 900.0), 60.0, 0.0), Vec2::ZERO);
    assert!(z.transform().translate.x.abs() > 200.0);

    assert_eq!(z.on_release(Vec2::ZERO), ReleaseOutcome::Pinched);
    assert!(z.store().requests.is_empty());
}

#[test]
fn second_finger_mid_pan_calibrates_without_moving() {
    let mut z = recording(scenario_config(), Size::ZERO);

    z.on_grant(&[Point::new(100.0, 100.0)]);
    z.on_move(&[Point::new(130.0, 100.0)], Vec2::new(30.0, 0.0));
    let panned = z.transform();

    let two = [Point::new(130.0, 100.0), Point::new(180.0, 100.0)];
    z.on_move(&two, Vec2::new(30.0, 0.0));
    assert_eq!(z.transform(), panned, "calibration frame must not move content");
    let pinch = z.session().and_then(|s| s.pinch()).copied().unwrap();
    assert_eq!(pinch.initial_distance, 50.0);
    assert!(z.session().unwrap().is_zoom());

    // The calibration was taken against the panned transform.
    let local = panned.page_to_local(Point::new(155.0, 100.0));
    assert!((pinch.anchor.local - local).hypot() < 1e-9);
}

#[test]
fn single_touch_after_pinch_does_not_pan() {
    let mut z = recording(scenario_config(), Size::ZERO);
    z.on_grant(&pair(Point::new(100.0, 100.0), 50.0, 0.0));
    z.on_move(&pair(Point::new(100.0, 100.0), 75.0, 0.0), Vec2::ZERO);
    let pinched = z.transform();

    z.on_move(&[Point::new(400.0, 400.0)], Vec2::new(300.0, 300.0));
    assert_eq!(z.transform(), pinched);
}

#[test]
fn each_grant_starts_a_fresh_session() {
    let mut z = recording(scenario_config(), Size::ZERO);

    z.on_grant(&pair(Point::new(100.0, 100.0), 50.0, 0.0));
    z.on_move(&pair(Point::new(100.0, 100.0), 60.0, 0.0), Vec2::ZERO);
    assert_eq!(z.on_release(Vec2::ZERO), ReleaseOutcome::Pinched);

    // A following pan is a pan, not a leftover of the pinch.
    let before = z.transform();
    z.on_grant(&[Point::ZERO]);
    assert!(!z.session().unwrap().is_zoom());
    assert_eq!(z.session().unwrap().baseline(), &before);
    z.on_move(&[Point::new(10.0, 0.0)], Vec2::new(10.0, 0.0));
    assert_eq!(z.transform().translate, before.translate + Vec2::new(10.0, 0.0));
    assert!(matches!(
        z.on_release(Vec2::new(10.0, 0.0)),
        ReleaseOutcome::Settled { .. }
    ));
}

#[test]
fn layout_measured_after_grant_keeps_the_gesture_inert() {
    let config = scenario_config();
    let store = InstantTransform::new(Transform::IDENTITY);
    let mut z = Zoomable::new(config, store).unwrap();

    z.on_grant(&[Point::ZERO]);
    z.set_layout(Size::new(320.0, 480.0));
    z.on_move(&[Point::new(40.0, 0.0)], Vec2::new(40.0, 0.0));

    assert_eq!(z.transform(), Transform::IDENTITY);
    assert_eq!(z.on_release(Vec2::new(40.0, 0.0)), ReleaseOutcome::Idle);
}

#[test]
fn set_values_clamps_scale_above_max() {
    let config = scenario_config();
    let mut z = recording(config, Size::ZERO);
    let applied = z
        .set_values(TransformUpdate::scale(config.max_scale() + 100.0))
        .unwrap();
    assert_eq!(applied.scale, config.max_scale());
    assert_eq!(z.transform().scale, 2.0);
}

#[test]
fn set_values_without_scale_or_translate_is_invalid() {
    let mut z = recording(scenario_config(), Size::ZERO);
    let before = z.transform();
    assert_eq!(
        z.set_values(TransformUpdate::default()),
        Err(SetValuesError::Empty)
    );
    assert_eq!(z.transform(), before);
}

#[test]
fn set_values_snaps_translation_without_animating() {
    let mut z = recording(scenario_config(), Size::ZERO);
    let applied = z
        .set_values(TransformUpdate::translate(Vec2::new(-500.0, 40.0)))
        .unwrap();
    assert_eq!(applied.translate, Vec2::new(-100.0, 40.0));
    assert!(z.store().requests.is_empty());
}
