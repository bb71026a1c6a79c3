// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbwheel Ripple: a timed ripple-animation state machine.
//!
//! ## Overview
//!
//! An expanding-circle visual cue animated over a fixed duration from a trigger
//! point. This crate owns only the timing and progress math; rendering belongs
//! to the host. The host drives the machine from its frame clock: call
//! [`RippleAnimator::advance`](crate::animator::RippleAnimator::advance) once
//! per rendering frame and paint the returned radius.
//!
//! ## State machine
//!
//! States are `Idle` and `Running { elapsed_ms, origin }`:
//!
//! - `Idle --start--> Running` (requests an initial frame).
//! - `Running --advance, elapsed < duration--> Running` (requests the next frame).
//! - `Running --advance, elapsed >= duration--> Idle` (no further requests).
//! - `start` while `Running` is a self-loop no-op: concurrent triggers are
//!   dropped, never queued.
//!
//! ## Easing
//!
//! The elapsed clock does not advance linearly. Each frame applies the
//! recurrence `elapsed' = 2 * (elapsed + frame_interval)`, an intentionally
//! accelerating progression that produces the reference easing curve. With the
//! reference 200 ms duration and 10 ms frame interval the elapsed sequence is
//! `0 → 20 → 60 → 140 → 300`: four painted frames, then completion.
//!
//! ## Scheduling
//!
//! Frame requests go through the [`FrameScheduler`](crate::types::FrameScheduler)
//! capability trait (the host's `postDelayed`-style timer), injected at
//! construction. Scheduling is cooperative and single-threaded; the machine
//! re-requests a frame only while running, and cancels pending requests on
//! completion or explicit [`cancel`](crate::animator::RippleAnimator::cancel).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use thumbwheel_ripple::animator::RippleAnimator;
//! use thumbwheel_ripple::types::{RippleConfig, RippleStep};
//!
//! let mut ripple = RippleAnimator::new(RippleConfig::for_wheel(140.0, 77.0));
//! ripple.start(Point::new(150.0, 25.0));
//!
//! let mut painted = 0;
//! loop {
//!     match ripple.advance() {
//!         RippleStep::Continue { radius, .. } => {
//!             assert!(radius > 0.0);
//!             painted += 1;
//!         }
//!         RippleStep::Finished => break,
//!         RippleStep::Idle => unreachable!("machine is running until Finished"),
//!     }
//! }
//! assert_eq!(painted, 4);
//! assert!(!ripple.is_running());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod animator;
pub mod types;

pub use animator::RippleAnimator;
pub use types::{FrameScheduler, NoScheduler, RippleConfig, RippleState, RippleStep};
