// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use thumbwheel_gesture::recognizer::GestureRecognizer;
use thumbwheel_gesture::types::WheelGeometry;
use thumbwheel_ripple::animator::RippleAnimator;
use thumbwheel_ripple::types::{RippleConfig, RippleStep};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn on_ring(theta_deg: f64, r: f64) -> Point {
    let v = Vec2::from_angle(theta_deg.to_radians());
    Point::new(0.5 + r * v.y, 0.5 + r * v.x)
}

/// A drag that sweeps the ring at a fixed angular step with jittered track
/// radius, the shape a scrub gesture takes after pointer capture.
fn gen_sweep_stream(samples: usize, step_deg: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(samples);
    let mut theta = 160.0;
    for _ in 0..samples {
        let r = 0.2 + 0.25 * rng.next_f64();
        out.push(on_ring(theta, r));
        theta -= step_deg;
    }
    out
}

/// Uniform samples over the whole control square, most of which land in the
/// dead zones.
fn gen_noise_stream(samples: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..samples)
        .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn drive(recognizer: &mut GestureRecognizer, stream: &[Point]) -> u32 {
    let mut events = 0;
    let Some((first, rest)) = stream.split_first() else {
        return 0;
    };
    let _ = recognizer.pointer_down(*first);
    for sample in rest {
        if recognizer.pointer_move(*sample).event.is_some() {
            events += 1;
        }
    }
    let _ = recognizer.pointer_up(*stream.last().unwrap());
    events
}

fn bench_recognizer(c: &mut Criterion) {
    let geometry = WheelGeometry::from_size(300.0, 77.0, 50.0);
    for &samples in &[256usize, 4096] {
        let mut group = c.benchmark_group(format!("recognizer/{samples}"));
        group.throughput(Throughput::Elements(samples as u64));

        let detent_stream = gen_sweep_stream(samples, 80.0, 0x5eed_0001);
        group.bench_function("sweep_detents", |b| {
            b.iter_batched(
                || GestureRecognizer::new(geometry),
                |mut recognizer| black_box(drive(&mut recognizer, &detent_stream)),
                BatchSize::SmallInput,
            );
        });

        let scrub_stream = gen_sweep_stream(samples, 15.0, 0x5eed_0002);
        group.bench_function("sweep_subdetent", |b| {
            b.iter_batched(
                || GestureRecognizer::new(geometry),
                |mut recognizer| black_box(drive(&mut recognizer, &scrub_stream)),
                BatchSize::SmallInput,
            );
        });

        let noise_stream = gen_noise_stream(samples, 0x5eed_0003);
        group.bench_function("noise", |b| {
            b.iter_batched(
                || GestureRecognizer::new(geometry),
                |mut recognizer| black_box(drive(&mut recognizer, &noise_stream)),
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

fn bench_ripple(c: &mut Criterion) {
    let mut group = c.benchmark_group("ripple");
    group.bench_function("run_to_completion", |b| {
        b.iter_batched(
            || RippleAnimator::new(RippleConfig::for_wheel(140.0, 77.0)),
            |mut ripple| {
                ripple.start(Point::new(150.0, 25.0));
                let mut frames = 0u32;
                while ripple.advance() != RippleStep::Finished {
                    frames += 1;
                }
                black_box(frames)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_recognizer, bench_ripple);
criterion_main!(benches);
