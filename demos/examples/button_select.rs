// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center-button activation and the capability mask.
//!
//! This example presses and releases inside the center button, shows a
//! release outside the hit region selecting nothing, and demonstrates gating
//! delivery with [`ControlFlags`].
//!
//! Run:
//! - `cargo run -p thumbwheel_demos --example button_select`

use kurbo::Point;
use thumbwheel_control::control::WheelControl;
use thumbwheel_control::types::{ButtonListener, ControlFlags};
use thumbwheel_gesture::types::WheelGeometry;

#[derive(Clone, Default)]
struct SelectLog(std::rc::Rc<std::cell::RefCell<u32>>);

impl ButtonListener for SelectLog {
    fn select(&mut self) {
        *self.0.borrow_mut() += 1;
        println!("  select!");
    }
}

fn main() {
    let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
    let log = SelectLog::default();
    wheel.set_button_listener(Box::new(log.clone()));

    // Press and release near the center: inside the inner button radius.
    println!("== Tap on the button ==");
    let _ = wheel.pointer_down(Point::new(0.5, 0.55));
    let _ = wheel.pointer_up(Point::new(0.5, 0.55));
    assert_eq!(*log.0.borrow(), 1);

    // Slide off before releasing: no activation.
    println!("== Slide off, then release ==");
    let _ = wheel.pointer_down(Point::new(0.5, 0.55));
    let _ = wheel.pointer_up(Point::new(0.5, 0.85));
    assert_eq!(*log.0.borrow(), 1);

    // Disable the button: taps are still consumed but not delivered.
    println!("== Tap with the button disabled ==");
    wheel.set_flags(ControlFlags::WHEEL_ENABLED);
    let _ = wheel.pointer_down(Point::new(0.5, 0.55));
    let consumed = wheel.pointer_up(Point::new(0.5, 0.55));
    assert!(consumed);
    assert_eq!(*log.0.borrow(), 1);
    println!("  (nothing, as intended)");
}
