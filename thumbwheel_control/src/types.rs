// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing types: listeners, ripple anchors, and the capability mask.

bitflags::bitflags! {
    /// Capability mask gating which recognized events are delivered to
    /// listeners.
    ///
    /// Gating applies to delivery only: gesture tracking (and with it the
    /// recognizer's haptic pulses) continues regardless, so re-enabling a
    /// capability mid-gesture behaves seamlessly.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        /// Tick events reach the tick listener.
        const WHEEL_ENABLED  = 0b0000_0001;
        /// Select events reach the button listener.
        const BUTTON_ENABLED = 0b0000_0010;
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::WHEEL_ENABLED | Self::BUTTON_ENABLED
    }
}

/// Receives detent events from the wheel.
///
/// Register with [`WheelControl::set_tick_listener`](crate::control::WheelControl::set_tick_listener).
pub trait TickListener {
    /// One detent clockwise.
    fn next_tick(&mut self);

    /// One detent counter-clockwise.
    fn previous_tick(&mut self);
}

/// Receives center-button activation.
///
/// Register with [`WheelControl::set_button_listener`](crate::control::WheelControl::set_button_listener).
pub trait ButtonListener {
    /// The center button was released inside its hit region.
    fn select(&mut self);
}

/// Edge of the wheel a ripple expands from.
///
/// Passed to [`WheelControl::ripple_from`](crate::control::WheelControl::ripple_from);
/// the concrete anchor point is derived from the control's geometry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RippleAnchor {
    /// Top edge, on the vertical midline.
    Top,
    /// Bottom edge, on the vertical midline.
    Bottom,
    /// Left edge, on the horizontal midline.
    Left,
    /// Right edge, on the horizontal midline.
    Right,
}
