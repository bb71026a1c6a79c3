// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle computation over the interactive annulus.
//!
//! ## Convention
//!
//! Angles are measured in degrees with the zero reference on the positive-y
//! axis of sample space (the bottom of the control, since y grows downward),
//! increasing toward the right edge. This comes from swapping the arguments of
//! the conventional `atan2(y, x)`: the recognizer computes
//! `atan2(x - 0.5, y - 0.5)`. Downstream threshold math assumes this exact
//! convention, so it is not configurable.

use kurbo::{Point, Vec2};

/// Normalized distance from center below which samples are ignored (the center
/// button area).
pub const INNER_DEAD_ZONE: f64 = 0.15;

/// Normalized distance from center above which samples are ignored (outside the
/// wheel).
pub const OUTER_DEAD_ZONE: f64 = 0.5;

/// Angular sweep for one detent: five discrete positions per full rotation.
pub const DEGREES_PER_TICK: f64 = 72.0;

const CENTER: Point = Point::new(0.5, 0.5);

/// The wheel angle of a normalized sample, in degrees, or `None` when the sample
/// falls outside the interactive annulus.
///
/// Non-finite coordinates fail the annulus check and also yield `None`; an
/// invalid sample is an expected, recoverable condition, never an error.
pub fn wheel_angle(sample: Point) -> Option<f64> {
    let v = sample - CENTER;
    if !(INNER_DEAD_ZONE..=OUTER_DEAD_ZONE).contains(&v.hypot()) {
        return None;
    }
    // Swapped components put the zero-angle reference on the positive-y axis.
    Some(Vec2::new(v.y, v.x).atan2().to_degrees())
}

/// Point on the annulus at `theta_deg` (this crate's convention) and
/// normalized radius `r`. Test helper shared with the recognizer tests.
#[cfg(test)]
pub(crate) fn on_ring(theta_deg: f64, r: f64) -> Point {
    let v = Vec2::from_angle(theta_deg.to_radians());
    // from_angle yields (cos, sin); the wheel convention swaps the axes.
    Point::new(0.5 + r * v.y, 0.5 + r * v.x)
}
