// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer implementation.
//!
//! ## Overview
//!
//! Tracks a single reference angle across a pointer gesture and converts
//! inter-move angle deltas into detent events.
//!
//! ## Baseline policy
//!
//! The reference angle is rebaselined to the current angle after every valid
//! move, whether or not a tick fired. The 72° threshold therefore applies to
//! the delta between consecutive moves, not to cumulative rotation from the
//! gesture start; slow continuous rotation in small increments never fires.
//!
//! ## Detent cap
//!
//! Only deltas that floor to exactly one detent are actionable. A single move
//! sweeping two or more detents is dropped, which also swallows rotations that
//! cross the ±180° seam of the angle range (the raw delta is not wrapped).

use kurbo::Point;

use crate::angle::{DEGREES_PER_TICK, wheel_angle};
use crate::types::{GestureEvent, Haptics, NoHaptics, PointerResponse, WheelGeometry};

/// Converts pointer samples into detent ticks and button activation.
///
/// ## Usage
///
/// - Construct with [`GestureRecognizer::new`] for silent operation, or
///   [`GestureRecognizer::with_haptics`] to receive a
///   [`Haptics::tick_vibrate`] request per actionable detent.
/// - Feed every pointer sample to [`pointer_down`](Self::pointer_down),
///   [`pointer_move`](Self::pointer_move), and [`pointer_up`](Self::pointer_up)
///   in control-local normalized coordinates, and dispatch the returned
///   [`PointerResponse`].
///
/// The recognizer owns its angle state exclusively and is mutated only by the
/// pointer methods; all processing happens on the caller's thread.
pub struct GestureRecognizer<H: Haptics = NoHaptics> {
    geometry: WheelGeometry,
    haptics: H,
    /// Baseline angle for the active gesture. `None` when no gesture is being
    /// tracked or the gesture started outside the annulus.
    reference_deg: Option<f64>,
}

impl<H: Haptics> core::fmt::Debug for GestureRecognizer<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("geometry", &self.geometry)
            .field("reference_deg", &self.reference_deg)
            .finish_non_exhaustive()
    }
}

impl GestureRecognizer<NoHaptics> {
    /// Create a recognizer without haptic feedback.
    pub fn new(geometry: WheelGeometry) -> Self {
        Self::with_haptics(geometry, NoHaptics)
    }
}

impl<H: Haptics> GestureRecognizer<H> {
    /// Create a recognizer with an injected haptics provider.
    pub fn with_haptics(geometry: WheelGeometry, haptics: H) -> Self {
        Self {
            geometry,
            haptics,
            reference_deg: None,
        }
    }

    /// The baseline angle of the gesture in progress, if one is being tracked.
    pub fn reference_angle(&self) -> Option<f64> {
        self.reference_deg
    }

    /// The layout geometry this recognizer was constructed with.
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    /// Access the injected haptics provider.
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Begin a gesture. Captures the sample's angle as the baseline when the
    /// press lands on the annulus; otherwise the gesture starts untracked.
    ///
    /// Always handled: the press consumes the gesture either way.
    pub fn pointer_down(&mut self, sample: Point) -> PointerResponse {
        self.reference_deg = wheel_angle(sample);
        PointerResponse::handled(None)
    }

    /// Process a move sample, possibly emitting one tick.
    ///
    /// Not handled when the gesture never validly started. A move outside the
    /// annulus is ignored (state unchanged) but still handled. A valid move
    /// fires a tick only when the inter-move delta reaches one detent, and
    /// rebaselines the reference angle in every case.
    pub fn pointer_move(&mut self, sample: Point) -> PointerResponse {
        let Some(reference) = self.reference_deg else {
            return PointerResponse::unhandled();
        };
        let Some(current) = wheel_angle(sample) else {
            return PointerResponse::handled(None);
        };

        let delta = reference - current;
        let mut event = None;
        if delta.abs() >= DEGREES_PER_TICK {
            // Truncation is floor here: the magnitude is >= 1.
            #[allow(
                clippy::cast_possible_truncation,
                reason = "detent counts are tiny; truncation toward zero is the intended floor"
            )]
            let detents = (delta.abs() / DEGREES_PER_TICK) as i32;
            let ticks = if delta < 0.0 { -detents } else { detents };
            match ticks {
                1 => {
                    self.haptics.tick_vibrate();
                    event = Some(GestureEvent::NextTick);
                }
                -1 => {
                    self.haptics.tick_vibrate();
                    event = Some(GestureEvent::PreviousTick);
                }
                // Multi-detent sweeps are dropped, not queued.
                _ => {}
            }
        }
        self.reference_deg = Some(current);
        PointerResponse::handled(event)
    }

    /// End the gesture. Emits [`GestureEvent::Select`] when the release point
    /// lies within the center button's circular hit region, tested in
    /// screen-space pixels. Always handled; the baseline is cleared.
    pub fn pointer_up(&mut self, sample: Point) -> PointerResponse {
        self.reference_deg = None;
        let px = self.geometry.to_pixels(sample);
        let r = self.geometry.inner_radius;
        if (px - self.geometry.center).hypot2() <= r * r {
            PointerResponse::handled(Some(GestureEvent::Select))
        } else {
            PointerResponse::handled(None)
        }
    }
}
