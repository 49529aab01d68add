// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use understory_tween::Easing;
use understory_zoomable::adapters::tween::AnimatedTransform;
use understory_zoomable::{InstantTransform, Transform, TransformStore, Zoomable, ZoomableConfig};

fn pinch_frames(len: usize) -> Vec<[Point; 2]> {
    (0..len)
        .map(|i| {
            let f = i as f64;
            let center = Point::new(
                400.0 + (f * 0.05).sin() * 30.0,
                300.0 + (f * 0.03).cos() * 20.0,
            );
            let half = Vec2::from_angle(f * 0.01) * (40.0 + (f * 0.02).sin().abs() * 80.0);
            [center - half, center + half]
        })
        .collect()
}

fn recognizer<S: TransformStore>(store: S) -> Zoomable<S> {
    let mut z = Zoomable::new(ZoomableConfig::new(), store).unwrap();
    z.set_layout(Size::new(800.0, 600.0));
    z
}

fn bench_pinch_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomable/pinch_stream");

    for len in [64usize, 512, 4_096] {
        let frames = pinch_frames(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("instant", len), &frames, |b, frames| {
            b.iter_batched(
                || recognizer(InstantTransform::new(Transform::IDENTITY)),
                |mut z| {
                    z.on_grant(&frames[0]);
                    for touches in &frames[1..] {
                        z.on_move(touches, Vec2::ZERO);
                    }
                    black_box(z.on_release(Vec2::ZERO));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("animated", len), &frames, |b, frames| {
            b.iter_batched(
                || recognizer(AnimatedTransform::default().with_easing(Easing::Linear)),
                |mut z| {
                    z.on_grant(&frames[0]);
                    for (i, touches) in frames[1..].iter().enumerate() {
                        z.advance_to(i as u64 * 16);
                        z.on_move(touches, Vec2::ZERO);
                    }
                    black_box(z.on_release(Vec2::ZERO));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pan_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomable/pan_release");

    for len in [64usize, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("settle_and_advance", len), &len, |b, &len| {
            b.iter_batched(
                || recognizer(AnimatedTransform::default()),
                |mut z| {
                    z.on_grant(&[Point::ZERO]);
                    for i in 0..len {
                        let d = Vec2::new(i as f64 * 2.0, i as f64 * -1.5);
                        z.on_move(&[d.to_point()], d);
                    }
                    let last = Vec2::new(len as f64 * 2.0, len as f64 * -1.5);
                    z.on_release(last);
                    let mut now = 0;
                    while z.is_animating() {
                        now += 16;
                        z.advance_to(now);
                        black_box(z.transform());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pinch_stream, bench_pan_release);
criterion_main!(benches);
