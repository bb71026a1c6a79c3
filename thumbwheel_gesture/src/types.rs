// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the recognizer: events, responses, geometry, and the haptics capability.

use kurbo::Point;

/// A discrete event recognized from the pointer stream.
///
/// Produced by the [`GestureRecognizer`](crate::recognizer::GestureRecognizer)
/// pointer methods and carried on [`PointerResponse`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GestureEvent {
    /// The wheel advanced one detent clockwise.
    NextTick,
    /// The wheel advanced one detent counter-clockwise.
    PreviousTick,
    /// The center button was activated on pointer-up.
    Select,
}

/// Result of feeding one pointer sample to the recognizer.
///
/// `handled` mirrors the host-toolkit convention: a handled sample consumes the
/// gesture so the host does not fall through to default behavior. At most one
/// event is emitted per sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PointerResponse {
    /// Whether the sample was consumed by the control.
    pub handled: bool,
    /// The event recognized from this sample, if any.
    pub event: Option<GestureEvent>,
}

impl PointerResponse {
    /// A consumed sample, optionally carrying an event.
    pub const fn handled(event: Option<GestureEvent>) -> Self {
        Self {
            handled: true,
            event,
        }
    }

    /// A sample the control did not consume. Never carries an event.
    pub const fn unhandled() -> Self {
        Self {
            handled: false,
            event: None,
        }
    }
}

/// Fire-and-forget haptic feedback requests.
///
/// Implement this for your platform's vibrator and inject it via
/// [`GestureRecognizer::with_haptics`](crate::recognizer::GestureRecognizer::with_haptics).
/// Calls carry no return value and no timing guarantee.
pub trait Haptics {
    /// Request a short tick pulse. Invoked once per actionable detent.
    fn tick_vibrate(&mut self);
}

/// A silent haptics provider used by default when no hardware is wired up.
///
/// Used by [`GestureRecognizer::new`](crate::recognizer::GestureRecognizer::new).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    #[inline]
    fn tick_vibrate(&mut self) {}
}

/// Screen-space geometry of the wheel control, supplied by the host at layout time.
///
/// The control is square; `size` is its side length in pixels. All other fields
/// are derived from or expressed in that pixel space. The recognizer only reads
/// this for the center-button hit test; the ripple layer reads it for anchor
/// points and the maximum ripple radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelGeometry {
    /// Side length of the (square) control, in pixels.
    pub size: f64,
    /// Geometric center of the control, in pixels.
    pub center: Point,
    /// Radius of the outer wheel circle, in pixels.
    pub outer_radius: f64,
    /// Radius of the inner circle, in pixels. Doubles as the center button's
    /// circular hit radius on pointer-up.
    pub inner_radius: f64,
    /// Width of the center button, in pixels. Used as the ripple origin offset.
    pub button_width: f64,
    /// Height of the center button, in pixels. Used for top/bottom ripple anchors.
    pub button_height: f64,
}

impl WheelGeometry {
    /// Derive wheel geometry from a measured side length, matching the reference
    /// layout: a 10 px inset on each side of the outer circle, and an inner circle
    /// at one third of the outer radius.
    pub fn from_size(size: f64, button_width: f64, button_height: f64) -> Self {
        let outer_radius = (size - 20.0) / 2.0;
        Self {
            size,
            center: Point::new(size / 2.0, size / 2.0),
            outer_radius,
            inner_radius: outer_radius / 3.0,
            button_width,
            button_height,
        }
    }

    /// Convert a control-local normalized sample to screen-space pixels.
    pub fn to_pixels(&self, sample: Point) -> Point {
        Point::new(sample.x * self.size, sample.y * self.size)
    }

    /// Convert a raw screen-space pointer position to a normalized sample.
    pub fn to_sample(&self, pixels: Point) -> Point {
        Point::new(pixels.x / self.size, pixels.y / self.size)
    }

    /// Largest radius a ripple expands to: twice the outer wheel radius.
    pub fn max_ripple_radius(&self) -> f64 {
        self.outer_radius * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_from_size_matches_reference_layout() {
        let g = WheelGeometry::from_size(300.0, 77.0, 50.0);
        assert_eq!(g.outer_radius, 140.0);
        assert_eq!(g.inner_radius, 140.0 / 3.0);
        assert_eq!(g.center, Point::new(150.0, 150.0));
        assert_eq!(g.max_ripple_radius(), 280.0);
    }

    #[test]
    fn pixel_and_sample_conversions_are_inverse() {
        let g = WheelGeometry::from_size(300.0, 77.0, 50.0);
        let sample = Point::new(0.25, 0.75);
        let px = g.to_pixels(sample);
        assert_eq!(px, Point::new(75.0, 225.0));
        assert_eq!(g.to_sample(px), sample);
    }

    #[test]
    fn unhandled_response_carries_no_event() {
        let r = PointerResponse::unhandled();
        assert!(!r.handled);
        assert_eq!(r.event, None);
    }
}
