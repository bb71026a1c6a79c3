// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbwheel Gesture: a gesture-to-tick recognizer for circular wheel controls.
//!
//! ## Overview
//!
//! This crate converts a continuous stream of pointer samples (down, move, up) into
//! discrete, debounced rotation events ("ticks") with correct directionality, plus a
//! center-button activation event.
//! It does not render anything and does not depend on a UI toolkit.
//! Feed it samples in control-local normalized coordinates and dispatch the returned
//! [`GestureEvent`](crate::types::GestureEvent)s however your host likes.
//!
//! ## Coordinate spaces
//!
//! Pointer samples are `kurbo::Point`s where `(0, 0)`–`(1, 1)` spans the control's
//! bounding box. The interactive ring is the annulus between
//! [`INNER_DEAD_ZONE`](crate::angle::INNER_DEAD_ZONE) and
//! [`OUTER_DEAD_ZONE`](crate::angle::OUTER_DEAD_ZONE) around the center; samples outside
//! it (including non-finite coordinates) carry no angle.
//! The center-button hit test on pointer-up runs in screen-space pixels using the
//! [`WheelGeometry`](crate::types::WheelGeometry) supplied by the host at layout time.
//!
//! ## Tick policy
//!
//! A tick fires when the angle swept since the last baseline reaches
//! [`DEGREES_PER_TICK`](crate::angle::DEGREES_PER_TICK) (72°, five detents per
//! revolution). Positive sweep (`reference - current`) is a "next" tick, negative is
//! "previous". Only single-detent deltas are actionable: a sweep that crosses two or
//! more detents in one move (a very fast swipe, or the ±180° seam of the angle range)
//! is dropped rather than queued. Every valid move rebaselines the reference angle, so
//! the threshold applies to inter-move deltas, not cumulative rotation.
//!
//! ## Collaborators
//!
//! Haptic feedback is requested through the [`Haptics`](crate::types::Haptics)
//! capability trait, injected at construction; [`NoHaptics`](crate::types::NoHaptics)
//! is the silent default.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use thumbwheel_gesture::recognizer::GestureRecognizer;
//! use thumbwheel_gesture::types::{GestureEvent, WheelGeometry};
//!
//! let geometry = WheelGeometry::from_size(300.0, 77.0, 50.0);
//! let mut wheel = GestureRecognizer::new(geometry);
//!
//! // Press on the ring at the six o'clock position, then rotate ~80° clockwise.
//! assert!(wheel.pointer_down(Point::new(0.5, 0.8)).handled);
//! let response = wheel.pointer_move(Point::new(0.2046, 0.5521));
//! assert_eq!(response.event, Some(GestureEvent::NextTick));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod angle;
pub mod recognizer;
pub mod types;

pub use angle::{DEGREES_PER_TICK, INNER_DEAD_ZONE, OUTER_DEAD_ZONE, wheel_angle};
pub use recognizer::GestureRecognizer;
pub use types::{GestureEvent, Haptics, NoHaptics, PointerResponse, WheelGeometry};
