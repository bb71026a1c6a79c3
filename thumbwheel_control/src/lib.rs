// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbwheel Control: the wheel's host-facing interaction surface.
//!
//! ## Overview
//!
//! Composes [`thumbwheel_gesture`]'s recognizer and [`thumbwheel_ripple`]'s
//! animator into one control object the host can wire pointer events and a
//! frame clock into. The control dispatches recognized events to registered
//! listeners, derives ripple anchors and sizing from the wheel geometry, and
//! exposes a capability mask for enabling and disabling interaction.
//!
//! Rendering stays with the host: pointer methods return whether the event was
//! consumed, and [`WheelControl::advance_ripple`](crate::control::WheelControl::advance_ripple)
//! returns what (if anything) to paint this frame.
//!
//! ## Wiring
//!
//! 1. Build a [`WheelGeometry`] from layout and construct the control, injecting
//!    [`Haptics`](thumbwheel_gesture::types::Haptics) and
//!    [`FrameScheduler`](thumbwheel_ripple::types::FrameScheduler) collaborators
//!    as needed.
//! 2. Register a [`TickListener`](crate::types::TickListener) and a
//!    [`ButtonListener`](crate::types::ButtonListener).
//! 3. Forward pointer down/move/up samples in normalized coordinates.
//! 4. Call `ripple_from` to cue a ripple at a wheel edge, and `advance_ripple`
//!    from the frame callback while it runs.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use thumbwheel_control::control::WheelControl;
//! use thumbwheel_control::types::{RippleAnchor, TickListener};
//! use thumbwheel_gesture::types::WheelGeometry;
//! use thumbwheel_ripple::types::RippleStep;
//!
//! struct Counter(u32);
//! impl TickListener for Counter {
//!     fn next_tick(&mut self) {
//!         self.0 += 1;
//!     }
//!     fn previous_tick(&mut self) {}
//! }
//!
//! let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
//! wheel.set_tick_listener(Box::new(Counter(0)));
//!
//! // One clockwise detent: press at six o'clock, rotate ~80°.
//! assert!(wheel.pointer_down(Point::new(0.5, 0.8)));
//! assert!(wheel.pointer_move(Point::new(0.2046, 0.5521)));
//!
//! // Cue a ripple from the top edge and drive it to completion.
//! wheel.ripple_from(RippleAnchor::Top);
//! while wheel.advance_ripple() != RippleStep::Finished {}
//! ```
//!
//! This crate is `no_std` and uses `alloc` for boxed listeners.

#![no_std]

extern crate alloc;

pub mod control;
pub mod types;

pub use control::WheelControl;
pub use thumbwheel_gesture::types::WheelGeometry;
pub use types::{ButtonListener, ControlFlags, RippleAnchor, TickListener};
