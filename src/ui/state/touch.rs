// SPDX-License-Identifier: MPL-2.0
//! Touch gesture recognition
//!
//! Turns raw finger events into viewer gestures: one finger pans, two
//! fingers pinch, and two quick single-finger taps form a double tap.
//! Pinch factors are relative to the previous move event so they can be
//! multiplied into the current scale.
//!
//! A contact only counts as a tap when it is released without travelling
//! more than [`TAP_SLOP`] and without a second finger joining. The double
//! tap fires on the release of the second tap.

use crate::config::DEFAULT_DOUBLE_TAP_MS;
use iced::touch::Finger;
use iced::{Point, Vector};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Travel in logical pixels beyond which a contact is a drag, not a tap.
pub const TAP_SLOP: f32 = 10.0;

/// Gesture recognized from one touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// One finger moved by the given amount.
    Pan(Vector),
    /// The distance between two fingers changed by the given ratio.
    Pinch(f32),
    DoubleTap,
}

#[derive(Debug, Clone)]
pub struct TouchTracker {
    fingers: HashMap<Finger, Point>,
    pinch_distance: Option<f32>,
    /// Where the current contact started, while it can still be a tap.
    tap_origin: Option<Point>,
    last_tap: Option<Instant>,
    double_tap_window: Duration,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DOUBLE_TAP_MS))
    }
}

impl TouchTracker {
    #[must_use]
    pub fn new(double_tap_window: Duration) -> Self {
        Self {
            fingers: HashMap::new(),
            pinch_distance: None,
            tap_origin: None,
            last_tap: None,
            double_tap_window,
        }
    }

    #[must_use]
    pub fn active_fingers(&self) -> usize {
        self.fingers.len()
    }

    /// Forgets every finger and the pending tap.
    pub fn reset(&mut self) {
        self.fingers.clear();
        self.pinch_distance = None;
        self.tap_origin = None;
        self.last_tap = None;
    }

    pub fn finger_pressed(&mut self, id: Finger, position: Point) {
        self.fingers.insert(id, position);
        match self.fingers.len() {
            1 => self.tap_origin = Some(position),
            2 => {
                self.tap_origin = None;
                self.pinch_distance = self.two_finger_distance();
            }
            _ => self.tap_origin = None,
        }
    }

    pub fn finger_moved(&mut self, id: Finger, position: Point) -> Option<TouchGesture> {
        let previous = self.fingers.get_mut(&id)?;
        let delta = position - *previous;
        *previous = position;

        if self
            .tap_origin
            .is_some_and(|origin| origin.distance(position) > TAP_SLOP)
        {
            self.tap_origin = None;
        }

        match self.fingers.len() {
            1 => Some(TouchGesture::Pan(delta)),
            2 => {
                let distance = self.two_finger_distance()?;
                let last = self.pinch_distance.replace(distance)?;
                if last > 0.0 && distance > 0.0 {
                    Some(TouchGesture::Pinch(distance / last))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handles a lifted or lost finger. Returns [`TouchGesture::DoubleTap`]
    /// when this release completes the second of two quick taps.
    pub fn finger_released(&mut self, id: Finger, now: Instant) -> Option<TouchGesture> {
        self.fingers.remove(&id)?;
        if self.fingers.len() < 2 {
            self.pinch_distance = None;
        }
        if !self.fingers.is_empty() {
            return None;
        }

        self.tap_origin.take()?;
        let is_double = self
            .last_tap
            .is_some_and(|last| now.saturating_duration_since(last) < self.double_tap_window);
        if is_double {
            // A third tap starts a new pair instead of toggling again.
            self.last_tap = None;
            Some(TouchGesture::DoubleTap)
        } else {
            self.last_tap = Some(now);
            None
        }
    }

    fn two_finger_distance(&self) -> Option<f32> {
        let mut points = self.fingers.values();
        let a = points.next()?;
        let b = points.next()?;
        Some(a.distance(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    fn tap(tracker: &mut TouchTracker, at: Instant) -> Option<TouchGesture> {
        tracker.finger_pressed(Finger(1), Point::ORIGIN);
        tracker.finger_released(Finger(1), at)
    }

    #[test]
    fn two_quick_taps_form_a_double_tap() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();

        assert_eq!(tap(&mut tracker, t0), None);
        assert_eq!(
            tap(&mut tracker, t0 + Duration::from_millis(120)),
            Some(TouchGesture::DoubleTap)
        );
    }

    #[test]
    fn slow_taps_are_not_a_double_tap() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();

        tap(&mut tracker, t0);
        assert_eq!(tap(&mut tracker, t0 + Duration::from_millis(450)), None);
    }

    #[test]
    fn third_tap_does_not_retrigger() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();
        let gestures: Vec<_> = (0..4u64)
            .map(|i| tap(&mut tracker, t0 + Duration::from_millis(50 * i)))
            .collect();
        assert_eq!(
            gestures,
            [None, Some(TouchGesture::DoubleTap), None, Some(TouchGesture::DoubleTap)]
        );
    }

    #[test]
    fn short_pan_after_tap_is_not_a_double_tap() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();
        tap(&mut tracker, t0);

        tracker.finger_pressed(Finger(1), Point::ORIGIN);
        tracker.finger_moved(Finger(1), Point::new(40.0, 0.0));
        assert_eq!(tracker.finger_released(Finger(1), t0 + Duration::from_millis(100)), None);
    }

    #[test]
    fn pan_does_not_arm_a_double_tap() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();

        tracker.finger_pressed(Finger(1), Point::ORIGIN);
        tracker.finger_moved(Finger(1), Point::new(0.0, 30.0));
        tracker.finger_released(Finger(1), t0);
        assert_eq!(tap(&mut tracker, t0 + Duration::from_millis(100)), None);
    }

    #[test]
    fn small_jitter_still_counts_as_tap() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();
        tap(&mut tracker, t0);

        tracker.finger_pressed(Finger(1), Point::ORIGIN);
        tracker.finger_moved(Finger(1), Point::new(3.0, 2.0));
        assert_eq!(
            tracker.finger_released(Finger(1), t0 + Duration::from_millis(100)),
            Some(TouchGesture::DoubleTap)
        );
    }

    #[test]
    fn pinch_after_tap_is_not_a_double_tap() {
        let mut tracker = TouchTracker::new(WINDOW);
        let t0 = Instant::now();
        tap(&mut tracker, t0);

        tracker.finger_pressed(Finger(1), Point::ORIGIN);
        tracker.finger_pressed(Finger(2), Point::new(100.0, 0.0));
        let later = t0 + Duration::from_millis(100);
        assert_eq!(tracker.finger_released(Finger(2), later), None);
        assert_eq!(tracker.finger_released(Finger(1), later), None);
    }

    #[test]
    fn single_finger_move_pans() {
        let mut tracker = TouchTracker::new(WINDOW);
        tracker.finger_pressed(Finger(1), Point::new(10.0, 10.0));

        assert_eq!(
            tracker.finger_moved(Finger(1), Point::new(15.0, 4.0)),
            Some(TouchGesture::Pan(Vector::new(5.0, -6.0)))
        );
    }

    #[test]
    fn pinch_reports_ratio_of_successive_distances() {
        let mut tracker = TouchTracker::new(WINDOW);
        tracker.finger_pressed(Finger(1), Point::new(0.0, 0.0));
        tracker.finger_pressed(Finger(2), Point::new(100.0, 0.0));

        let gesture = tracker.finger_moved(Finger(2), Point::new(150.0, 0.0));
        assert_eq!(gesture, Some(TouchGesture::Pinch(1.5)));

        let gesture = tracker.finger_moved(Finger(2), Point::new(75.0, 0.0));
        assert_eq!(gesture, Some(TouchGesture::Pinch(0.5)));
    }

    #[test]
    fn unknown_finger_is_ignored() {
        let mut tracker = TouchTracker::new(WINDOW);
        assert_eq!(tracker.finger_moved(Finger(9), Point::ORIGIN), None);
        assert_eq!(tracker.finger_released(Finger(9), Instant::now()), None);
    }

    #[test]
    fn lifting_a_finger_ends_the_pinch() {
        let mut tracker = TouchTracker::new(WINDOW);
        tracker.finger_pressed(Finger(1), Point::new(0.0, 0.0));
        tracker.finger_pressed(Finger(2), Point::new(100.0, 0.0));
        tracker.finger_released(Finger(2), Instant::now());

        assert_eq!(tracker.active_fingers(), 1);
        assert!(matches!(
            tracker.finger_moved(Finger(1), Point::new(5.0, 0.0)),
            Some(TouchGesture::Pan(_))
        ));
    }
}
