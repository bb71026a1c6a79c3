// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animator implementation.
//!
//! ## Overview
//!
//! Runs the `Idle | Running` machine described in the crate docs: `start`
//! arms it, `advance` steps the accelerating elapsed clock once per frame and
//! reports what to paint, and the `Running → Idle` transition happens exactly
//! once the clock reaches the configured duration.

use kurbo::Point;

use crate::types::{FrameScheduler, NoScheduler, RippleConfig, RippleState, RippleStep};

/// Drives one ripple at a time from the host's frame clock.
///
/// ## Usage
///
/// - Construct with [`RippleAnimator::new`] when the host polls each frame
///   itself, or [`RippleAnimator::with_scheduler`] to have frames requested
///   through a [`FrameScheduler`].
/// - Call [`start`](Self::start) with the trigger point; while a ripple is
///   running further starts are dropped.
/// - Call [`advance`](Self::advance) once per rendering frame and act on the
///   returned [`RippleStep`].
/// - Call [`cancel`](Self::cancel) when the control is hidden or destroyed so
///   no stale frame callback fires afterwards.
pub struct RippleAnimator<S: FrameScheduler = NoScheduler> {
    config: RippleConfig,
    scheduler: S,
    state: RippleState,
    /// Last progress value computed by `advance`; kept for render-side queries.
    last_progress: f64,
}

impl<S: FrameScheduler> core::fmt::Debug for RippleAnimator<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RippleAnimator")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("last_progress", &self.last_progress)
            .finish_non_exhaustive()
    }
}

impl RippleAnimator<NoScheduler> {
    /// Create an animator without a frame scheduler.
    pub fn new(config: RippleConfig) -> Self {
        Self::with_scheduler(config, NoScheduler)
    }
}

impl<S: FrameScheduler> RippleAnimator<S> {
    /// Create an animator with an injected frame scheduler.
    pub fn with_scheduler(config: RippleConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            state: RippleState::Idle,
            last_progress: 0.0,
        }
    }

    /// The animator's current state.
    pub fn state(&self) -> RippleState {
        self.state
    }

    /// Whether a ripple is currently animating.
    pub fn is_running(&self) -> bool {
        matches!(self.state, RippleState::Running { .. })
    }

    /// The progress value computed by the most recent painted frame. Pure
    /// query for the rendering collaborator; does not step the machine.
    pub fn current_progress(&self) -> f64 {
        self.last_progress
    }

    /// The configuration this animator runs with.
    pub fn config(&self) -> RippleConfig {
        self.config
    }

    /// Begin a ripple expanding from `origin` and request the initial frame.
    ///
    /// A no-op while a ripple is already running: at most one ripple animates
    /// at a time, and concurrent triggers are dropped, not queued.
    pub fn start(&mut self, origin: Point) {
        if self.is_running() {
            return;
        }
        self.state = RippleState::Running {
            elapsed_ms: 0.0,
            origin,
        };
        self.last_progress = 0.0;
        self.scheduler.request_frame(0.0);
    }

    /// Step the machine for one rendering frame.
    ///
    /// While running below the configured duration this requests the next
    /// frame, applies the elapsed-clock recurrence
    /// `elapsed' = 2 * (elapsed + frame_interval)`, and returns the radius to
    /// paint. Once the clock has reached the duration the machine transitions
    /// to idle, pending frames are cancelled, and `Finished` is returned.
    pub fn advance(&mut self) -> RippleStep {
        let RippleState::Running { elapsed_ms, origin } = self.state else {
            return RippleStep::Idle;
        };
        if elapsed_ms >= self.config.duration_ms {
            self.state = RippleState::Idle;
            self.scheduler.cancel_frames();
            return RippleStep::Finished;
        }
        self.scheduler.request_frame(self.config.frame_interval_ms);
        let elapsed_ms = 2.0 * (elapsed_ms + self.config.frame_interval_ms);
        let progress = elapsed_ms / self.config.duration_ms;
        self.state = RippleState::Running { elapsed_ms, origin };
        self.last_progress = progress;
        RippleStep::Continue {
            origin,
            radius: progress * self.config.max_radius + self.config.origin_offset,
            progress,
        }
    }

    /// Force the machine to idle and drop any pending frame request.
    ///
    /// For the host to call when the control is hidden or destroyed; after
    /// this, no further `advance` calls are expected or required.
    pub fn cancel(&mut self) {
        self.state = RippleState::Idle;
        self.scheduler.cancel_frames();
    }
}
