// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the animator: configuration, states, steps, and the scheduler capability.

use kurbo::Point;

/// Host-provided frame scheduling, in the style of a `postDelayed` timer.
///
/// Injected into [`RippleAnimator`](crate::animator::RippleAnimator). The
/// animator requests one frame at a time while running and cancels pending
/// requests when it stops; the host invokes
/// [`advance`](crate::animator::RippleAnimator::advance) when the requested
/// frame fires. All calls happen on the host's event thread.
pub trait FrameScheduler {
    /// Ask the host to deliver a frame after `delay_ms` milliseconds.
    fn request_frame(&mut self, delay_ms: f64);

    /// Drop any frame request not yet delivered.
    fn cancel_frames(&mut self);
}

/// A no-op scheduler used by default when the host polls the animator itself.
///
/// Used by [`RippleAnimator::new`](crate::animator::RippleAnimator::new).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoScheduler;

impl FrameScheduler for NoScheduler {
    #[inline]
    fn request_frame(&mut self, _delay_ms: f64) {}

    #[inline]
    fn cancel_frames(&mut self) {}
}

/// Timing and sizing parameters for a ripple.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// Total animation duration in milliseconds.
    pub duration_ms: f64,
    /// Nominal interval between frames in milliseconds; also the increment fed
    /// into the elapsed-clock recurrence.
    pub frame_interval_ms: f64,
    /// Radius the ripple expands toward, in pixels.
    pub max_radius: f64,
    /// Constant added to every computed radius so the ripple starts visibly
    /// sized at its origin, in pixels.
    pub origin_offset: f64,
}

impl RippleConfig {
    /// Reference wiring for a wheel control: 200 ms duration, 10 ms frames, a
    /// maximum radius of twice the wheel's outer radius, and the button width
    /// as the origin offset.
    pub fn for_wheel(outer_radius: f64, button_width: f64) -> Self {
        Self {
            duration_ms: 200.0,
            frame_interval_ms: 10.0,
            max_radius: outer_radius * 2.0,
            origin_offset: button_width,
        }
    }
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            duration_ms: 200.0,
            frame_interval_ms: 10.0,
            max_radius: 1000.0,
            origin_offset: 0.0,
        }
    }
}

/// The animator's state, tagged explicitly so transitions are testable without
/// a live clock.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RippleState {
    /// No ripple is animating.
    Idle,
    /// A ripple is expanding from `origin`.
    Running {
        /// Milliseconds of (eased) animation clock consumed so far. Only
        /// meaningful in this state; reset to zero on every start.
        elapsed_ms: f64,
        /// Screen-space anchor of the ripple.
        origin: Point,
    },
}

/// What the host should do after one [`advance`](crate::animator::RippleAnimator::advance).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RippleStep {
    /// Nothing is animating; nothing to paint.
    Idle,
    /// Paint a circle of `radius` at `origin`; another frame was requested.
    Continue {
        /// Screen-space anchor of the ripple.
        origin: Point,
        /// Current ripple radius in pixels.
        radius: f64,
        /// Progress driving radius and opacity. The easing recurrence
        /// overshoots, so this exceeds 1.0 on the final painted frame.
        progress: f64,
    },
    /// The ripple just completed; no further frames will be requested.
    Finished,
}
