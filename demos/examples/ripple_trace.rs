// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full ripple run, frame by frame.
//!
//! This example drives a ripple from the top anchor to completion with a
//! logging frame scheduler, printing the elapsed clock, progress, and paint
//! radius for each frame.
//!
//! Run:
//! - `cargo run -p thumbwheel_demos --example ripple_trace`

use thumbwheel_control::control::WheelControl;
use thumbwheel_control::types::RippleAnchor;
use thumbwheel_gesture::types::WheelGeometry;
use thumbwheel_ripple::types::{FrameScheduler, RippleStep};

/// Prints scheduler traffic as the host's frame loop would see it.
struct LogScheduler;

impl FrameScheduler for LogScheduler {
    fn request_frame(&mut self, delay_ms: f64) {
        println!("  [scheduler] frame requested in {delay_ms} ms");
    }

    fn cancel_frames(&mut self) {
        println!("  [scheduler] pending frames cancelled");
    }
}

fn main() {
    let geometry = WheelGeometry::from_size(300.0, 77.0, 50.0);
    let mut wheel = WheelControl::with_collaborators(
        geometry,
        thumbwheel_gesture::types::NoHaptics,
        LogScheduler,
    );

    println!("== Ripple from the top anchor ==");
    wheel.ripple_from(RippleAnchor::Top);

    let mut frame = 0;
    loop {
        match wheel.advance_ripple() {
            RippleStep::Continue {
                origin,
                radius,
                progress,
            } => {
                frame += 1;
                println!(
                    "  frame {frame}: origin ({:.0}, {:.0}) progress {progress:.2} radius {radius:.0}",
                    origin.x, origin.y
                );
            }
            RippleStep::Finished => {
                println!("  finished after {frame} painted frames");
                break;
            }
            RippleStep::Idle => unreachable!("running until Finished"),
        }
    }
    assert_eq!(frame, 4);
    assert!(!wheel.is_ripple_running());
}
