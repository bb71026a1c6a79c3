// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent counting from a circular scrub.
//!
//! This example drags a pointer around the wheel ring and shows how
//! sub-detent motion is absorbed while full 72° steps produce tick events.
//!
//! Run:
//! - `cargo run -p thumbwheel_demos --example wheel_scrub`

use kurbo::{Point, Vec2};
use thumbwheel_control::control::WheelControl;
use thumbwheel_control::types::TickListener;
use thumbwheel_gesture::types::WheelGeometry;

#[derive(Default)]
struct SpinCounter {
    forward: u32,
    backward: u32,
}

#[derive(Clone, Default)]
struct SharedCounter(std::rc::Rc<std::cell::RefCell<SpinCounter>>);

impl TickListener for SharedCounter {
    fn next_tick(&mut self) {
        self.0.borrow_mut().forward += 1;
    }

    fn previous_tick(&mut self) {
        self.0.borrow_mut().backward += 1;
    }
}

/// A normalized sample on the wheel ring at `theta_deg`, mid-track.
fn on_ring(theta_deg: f64) -> Point {
    let v = Vec2::from_angle(theta_deg.to_radians());
    Point::new(0.5 + 0.3 * v.y, 0.5 + 0.3 * v.x)
}

fn main() {
    let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
    let counter = SharedCounter::default();
    wheel.set_tick_listener(Box::new(counter.clone()));

    // Gentle scrub: four 40° moves. Each move re-anchors the reference,
    // so none of them reaches the 72° detent.
    let _ = wheel.pointer_down(on_ring(160.0));
    for step in 1..=4 {
        let _ = wheel.pointer_move(on_ring(160.0 - 40.0 * f64::from(step)));
    }
    let _ = wheel.pointer_up(on_ring(0.0));
    println!(
        "== Gentle scrub (4 x 40°) ==\n  forward {} backward {}",
        counter.0.borrow().forward,
        counter.0.borrow().backward
    );
    assert_eq!(counter.0.borrow().forward, 0);

    // Decisive scrub: two 80° moves clockwise, then one back.
    let _ = wheel.pointer_down(on_ring(160.0));
    let _ = wheel.pointer_move(on_ring(80.0));
    let _ = wheel.pointer_move(on_ring(0.0));
    let _ = wheel.pointer_move(on_ring(80.0));
    let _ = wheel.pointer_up(on_ring(80.0));
    println!(
        "== Decisive scrub (80° steps) ==\n  forward {} backward {}",
        counter.0.borrow().forward,
        counter.0.borrow().backward
    );
    assert_eq!(counter.0.borrow().forward, 2);
    assert_eq!(counter.0.borrow().backward, 1);
}
