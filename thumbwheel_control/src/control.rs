// Copyright 2026 the Thumbwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control implementation.
//!
//! ## Overview
//!
//! Owns the recognizer and the animator, feeds pointer samples through,
//! dispatches events to boxed listeners, and translates ripple anchors into
//! screen-space origins. All processing happens on the host's event thread.

use alloc::boxed::Box;

use kurbo::Point;

use thumbwheel_gesture::recognizer::GestureRecognizer;
use thumbwheel_gesture::types::{
    GestureEvent, Haptics, NoHaptics, PointerResponse, WheelGeometry,
};
use thumbwheel_ripple::animator::RippleAnimator;
use thumbwheel_ripple::types::{FrameScheduler, NoScheduler, RippleConfig, RippleStep};

use crate::types::{ButtonListener, ControlFlags, RippleAnchor, TickListener};

/// The wheel control's interaction surface.
///
/// ## Usage
///
/// - Construct with [`WheelControl::new`] for silent, host-polled operation,
///   or [`WheelControl::with_collaborators`] to inject haptics and a frame
///   scheduler.
/// - Forward pointer samples to [`pointer_down`](Self::pointer_down),
///   [`pointer_move`](Self::pointer_move), and [`pointer_up`](Self::pointer_up);
///   the returned flag says whether the host should treat the event as consumed.
/// - Cue ripples with [`ripple_from`](Self::ripple_from) and step them with
///   [`advance_ripple`](Self::advance_ripple) once per rendering frame.
pub struct WheelControl<H: Haptics = NoHaptics, S: FrameScheduler = NoScheduler> {
    geometry: WheelGeometry,
    flags: ControlFlags,
    recognizer: GestureRecognizer<H>,
    ripple: RippleAnimator<S>,
    tick_listener: Option<Box<dyn TickListener>>,
    button_listener: Option<Box<dyn ButtonListener>>,
}

impl<H: Haptics, S: FrameScheduler> core::fmt::Debug for WheelControl<H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WheelControl")
            .field("geometry", &self.geometry)
            .field("flags", &self.flags)
            .field("ripple", &self.ripple)
            .finish_non_exhaustive()
    }
}

impl WheelControl<NoHaptics, NoScheduler> {
    /// Create a control with no-op collaborators.
    pub fn new(geometry: WheelGeometry) -> Self {
        Self::with_collaborators(geometry, NoHaptics, NoScheduler)
    }
}

impl<H: Haptics, S: FrameScheduler> WheelControl<H, S> {
    /// Create a control with injected haptics and frame scheduling.
    ///
    /// The ripple configuration is derived from `geometry`: the maximum radius
    /// is twice the outer wheel radius and the origin offset is the button
    /// width.
    pub fn with_collaborators(geometry: WheelGeometry, haptics: H, scheduler: S) -> Self {
        let ripple_config = RippleConfig::for_wheel(geometry.outer_radius, geometry.button_width);
        Self {
            geometry,
            flags: ControlFlags::default(),
            recognizer: GestureRecognizer::with_haptics(geometry, haptics),
            ripple: RippleAnimator::with_scheduler(ripple_config, scheduler),
            tick_listener: None,
            button_listener: None,
        }
    }

    /// The layout geometry this control was constructed with.
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    /// The current capability mask.
    pub fn flags(&self) -> ControlFlags {
        self.flags
    }

    /// Replace the capability mask.
    pub fn set_flags(&mut self, flags: ControlFlags) {
        self.flags = flags;
    }

    /// Register the listener receiving detent events.
    pub fn set_tick_listener(&mut self, listener: Box<dyn TickListener>) {
        self.tick_listener = Some(listener);
    }

    /// Register the listener receiving center-button activation.
    pub fn set_button_listener(&mut self, listener: Box<dyn ButtonListener>) {
        self.button_listener = Some(listener);
    }

    /// Forward a pointer press. Returns whether the event was consumed.
    pub fn pointer_down(&mut self, sample: Point) -> bool {
        let response = self.recognizer.pointer_down(sample);
        self.dispatch(response)
    }

    /// Forward a pointer move. Returns whether the event was consumed.
    pub fn pointer_move(&mut self, sample: Point) -> bool {
        let response = self.recognizer.pointer_move(sample);
        self.dispatch(response)
    }

    /// Forward a pointer release. Returns whether the event was consumed.
    pub fn pointer_up(&mut self, sample: Point) -> bool {
        let response = self.recognizer.pointer_up(sample);
        self.dispatch(response)
    }

    /// Cue a ripple expanding from the given wheel edge. Dropped while another
    /// ripple is running.
    pub fn ripple_from(&mut self, anchor: RippleAnchor) {
        let origin = self.anchor_point(anchor);
        self.ripple.start(origin);
    }

    /// The screen-space origin a ripple expands from for `anchor`.
    ///
    /// Top and bottom anchors sit on the vertical midline inset by half the
    /// button height; left and right anchors sit on the horizontal midline at
    /// `(size ∓ (outer_radius + button_width)) / 2`.
    pub fn anchor_point(&self, anchor: RippleAnchor) -> Point {
        let g = &self.geometry;
        match anchor {
            RippleAnchor::Top => Point::new(g.size / 2.0, g.button_height / 2.0),
            RippleAnchor::Bottom => Point::new(g.size / 2.0, g.size - g.button_height / 2.0),
            RippleAnchor::Left => {
                Point::new((g.size - g.outer_radius - g.button_width) / 2.0, g.size / 2.0)
            }
            RippleAnchor::Right => {
                Point::new((g.size + g.outer_radius + g.button_width) / 2.0, g.size / 2.0)
            }
        }
    }

    /// Step the ripple machine for one rendering frame.
    pub fn advance_ripple(&mut self) -> RippleStep {
        self.ripple.advance()
    }

    /// Whether a ripple is currently animating.
    pub fn is_ripple_running(&self) -> bool {
        self.ripple.is_running()
    }

    /// Progress of the most recent painted ripple frame; render-side query.
    pub fn ripple_progress(&self) -> f64 {
        self.ripple.current_progress()
    }

    /// Stop all animation. For the host to call when the control is hidden or
    /// destroyed so no stale frame callback fires afterwards.
    pub fn cancel_animations(&mut self) {
        self.ripple.cancel();
    }

    fn dispatch(&mut self, response: PointerResponse) -> bool {
        match response.event {
            Some(GestureEvent::NextTick) if self.flags.contains(ControlFlags::WHEEL_ENABLED) => {
                if let Some(listener) = self.tick_listener.as_mut() {
                    listener.next_tick();
                }
            }
            Some(GestureEvent::PreviousTick)
                if self.flags.contains(ControlFlags::WHEEL_ENABLED) =>
            {
                if let Some(listener) = self.tick_listener.as_mut() {
                    listener.previous_tick();
                }
            }
            Some(GestureEvent::Select) if self.flags.contains(ControlFlags::BUTTON_ENABLED) => {
                if let Some(listener) = self.button_listener.as_mut() {
                    listener.select();
                }
            }
            _ => {}
        }
        response.handled
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::Vec2;

    use super::*;

    /// Shared event log the boxed listeners write into.
    #[derive(Clone, Default)]
    struct Log(Rc<RefCell<Vec<&'static str>>>);

    impl Log {
        fn events(&self) -> Vec<&'static str> {
            self.0.borrow().clone()
        }
    }

    impl TickListener for Log {
        fn next_tick(&mut self) {
            self.0.borrow_mut().push("next");
        }

        fn previous_tick(&mut self) {
            self.0.borrow_mut().push("previous");
        }
    }

    impl ButtonListener for Log {
        fn select(&mut self) {
            self.0.borrow_mut().push("select");
        }
    }

    fn on_ring(theta_deg: f64, r: f64) -> Point {
        let v = Vec2::from_angle(theta_deg.to_radians());
        Point::new(0.5 + r * v.y, 0.5 + r * v.x)
    }

    fn logged_control() -> (WheelControl, Log) {
        let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
        let log = Log::default();
        wheel.set_tick_listener(Box::new(log.clone()));
        wheel.set_button_listener(Box::new(log.clone()));
        (wheel, log)
    }

    #[test]
    fn ticks_reach_the_tick_listener() {
        let (mut wheel, log) = logged_control();
        assert!(wheel.pointer_down(on_ring(160.0, 0.3)));
        assert!(wheel.pointer_move(on_ring(80.0, 0.3)));
        assert!(wheel.pointer_move(on_ring(160.0, 0.3)));
        assert_eq!(log.events(), ["next", "previous"]);
    }

    #[test]
    fn select_reaches_the_button_listener() {
        let (mut wheel, log) = logged_control();
        assert!(wheel.pointer_down(Point::new(0.5, 0.6)));
        assert!(wheel.pointer_up(Point::new(0.5, 0.6)));
        assert_eq!(log.events(), ["select"]);
    }

    #[test]
    fn release_outside_button_selects_nothing() {
        let (mut wheel, log) = logged_control();
        let _ = wheel.pointer_down(on_ring(0.0, 0.3));
        assert!(wheel.pointer_up(on_ring(0.0, 0.3)));
        assert_eq!(log.events(), Vec::<&str>::new());
    }

    #[test]
    fn disabled_wheel_suppresses_tick_delivery_only() {
        let (mut wheel, log) = logged_control();
        wheel.set_flags(ControlFlags::BUTTON_ENABLED);
        let _ = wheel.pointer_down(on_ring(80.0, 0.3));
        // The move is still consumed; only delivery is gated.
        assert!(wheel.pointer_move(on_ring(0.0, 0.3)));
        let _ = wheel.pointer_up(Point::new(0.5, 0.6));
        assert_eq!(log.events(), ["select"]);
    }

    #[test]
    fn disabled_button_suppresses_select_delivery() {
        let (mut wheel, log) = logged_control();
        wheel.set_flags(ControlFlags::WHEEL_ENABLED);
        let _ = wheel.pointer_down(Point::new(0.5, 0.6));
        let _ = wheel.pointer_up(Point::new(0.5, 0.6));
        assert_eq!(log.events(), Vec::<&str>::new());
    }

    #[test]
    fn events_without_listeners_are_dropped_quietly() {
        let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
        let _ = wheel.pointer_down(on_ring(80.0, 0.3));
        assert!(wheel.pointer_move(on_ring(0.0, 0.3)));
        assert!(wheel.pointer_up(Point::new(0.5, 0.6)));
    }

    #[test]
    fn anchor_points_match_reference_layout() {
        // size 300, outer 140, button 77 x 50.
        let wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
        assert_eq!(wheel.anchor_point(RippleAnchor::Top), Point::new(150.0, 25.0));
        assert_eq!(
            wheel.anchor_point(RippleAnchor::Bottom),
            Point::new(150.0, 275.0)
        );
        assert_eq!(
            wheel.anchor_point(RippleAnchor::Left),
            Point::new((300.0 - 140.0 - 77.0) / 2.0, 150.0)
        );
        assert_eq!(
            wheel.anchor_point(RippleAnchor::Right),
            Point::new((300.0 + 140.0 + 77.0) / 2.0, 150.0)
        );
    }

    #[test]
    fn ripple_runs_from_anchor_to_completion() {
        let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
        wheel.ripple_from(RippleAnchor::Top);
        assert!(wheel.is_ripple_running());
        let mut painted = 0;
        loop {
            match wheel.advance_ripple() {
                RippleStep::Continue { origin, .. } => {
                    assert_eq!(origin, Point::new(150.0, 25.0));
                    painted += 1;
                }
                RippleStep::Finished => break,
                RippleStep::Idle => unreachable!("running until Finished"),
            }
        }
        assert_eq!(painted, 4);
        assert!(!wheel.is_ripple_running());
    }

    #[test]
    fn ripple_trigger_while_running_keeps_the_first_origin() {
        let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
        wheel.ripple_from(RippleAnchor::Top);
        let _ = wheel.advance_ripple();
        wheel.ripple_from(RippleAnchor::Bottom);
        match wheel.advance_ripple() {
            RippleStep::Continue { origin, .. } => {
                assert_eq!(origin, Point::new(150.0, 25.0));
            }
            other => panic!("expected a painted frame, got {other:?}"),
        }
    }

    #[test]
    fn cancel_animations_stops_the_ripple() {
        let mut wheel = WheelControl::new(WheelGeometry::from_size(300.0, 77.0, 50.0));
        wheel.ripple_from(RippleAnchor::Left);
        let _ = wheel.advance_ripple();
        wheel.cancel_animations();
        assert!(!wheel.is_ripple_running());
        assert_eq!(wheel.advance_ripple(), RippleStep::Idle);
    }
}
