// SPDX-License-Identifier: MPL-2.0
//! Full-size viewer controller.
//!
//! Owns which image is open and its zoom/pan transform, and folds pointer,
//! wheel, touch and keyboard input into that single [`ZoomState`]. The
//! controller is window-agnostic: the gallery component forwards raw Iced
//! events to [`ViewerController::handle_event`] and renders from the state.

use crate::config::{ViewerConfig, DEFAULT_DOUBLE_TAP_MS, DEFAULT_DOUBLE_TAP_SCALE, DOUBLE_TAP_TOGGLE_THRESHOLD};
use crate::ui::state::{DragState, TouchGesture, TouchTracker, ZoomLimits, ZoomState};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, touch, Point};
use std::time::{Duration, Instant};

/// Double-tap tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub double_tap_window: Duration,
    pub double_tap_scale: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_MS),
            double_tap_scale: DEFAULT_DOUBLE_TAP_SCALE,
        }
    }
}

impl GestureSettings {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            double_tap_window: Duration::from_millis(
                config.double_tap_ms.unwrap_or(DEFAULT_DOUBLE_TAP_MS),
            ),
            double_tap_scale: config.double_tap_scale.unwrap_or(DEFAULT_DOUBLE_TAP_SCALE),
        }
    }
}

/// Result of feeding an input event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Not relevant to the viewer, or the viewer is closed.
    Ignored,
    /// Consumed; the transform may have changed.
    Handled,
    /// The user asked to close the viewer (cancel key).
    Closed,
}

/// Which input is currently dragging the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragSource {
    Pointer,
    Touch,
}

#[derive(Debug, Clone)]
pub struct ViewerController {
    selected: Option<String>,
    zoom: ZoomState,
    limits: ZoomLimits,
    gestures: GestureSettings,
    drag: DragState,
    drag_source: Option<DragSource>,
    touch: TouchTracker,
    cursor_position: Option<Point>,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), GestureSettings::default())
    }
}

impl ViewerController {
    #[must_use]
    pub fn new(limits: ZoomLimits, gestures: GestureSettings) -> Self {
        Self {
            selected: None,
            zoom: ZoomState::default(),
            limits,
            gestures,
            drag: DragState::default(),
            drag_source: None,
            touch: TouchTracker::new(gestures.double_tap_window),
            cursor_position: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            ZoomLimits::from_config(config),
            GestureSettings::from_config(config),
        )
    }

    /// Path of the open image, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_source.is_some()
    }

    /// Opens `path`, discarding the transform and any gesture in progress.
    pub fn open(&mut self, path: impl Into<String>) {
        self.selected = Some(path.into());
        self.reset_interaction();
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.reset_interaction();
    }

    fn reset_interaction(&mut self) {
        self.zoom.reset();
        self.end_drag();
        self.touch.reset();
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.zoom.set_scale(scale, self.limits);
        if !self.zoom.is_zoomed() {
            self.end_drag();
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.zoom.scale + self.limits.step());
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.zoom.scale - self.limits.step());
    }

    pub fn reset_zoom(&mut self) {
        self.set_scale(crate::ui::state::zoom::FITTED_SCALE);
    }

    /// Moves the enlarged image. Ignored at fitted scale.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> bool {
        self.zoom.pan_by(dx, dy)
    }

    /// Toggles between fitted and the double-tap scale, centering the image.
    pub fn double_tap(&mut self) {
        let target = if self.zoom.scale > DOUBLE_TAP_TOGGLE_THRESHOLD {
            crate::ui::state::zoom::FITTED_SCALE
        } else {
            self.gestures.double_tap_scale
        };
        self.set_scale(target);
        self.zoom.translate_x = 0.0;
        self.zoom.translate_y = 0.0;
    }

    /// Starts a pointer drag at the last known cursor position.
    ///
    /// Only an enlarged image can be grabbed.
    pub fn begin_pointer_drag(&mut self) -> bool {
        if !self.is_open() || !self.zoom.is_zoomed() || self.drag_source == Some(DragSource::Touch) {
            return false;
        }
        let Some(position) = self.cursor_position else {
            return false;
        };
        self.drag.start(position);
        self.drag_source = Some(DragSource::Pointer);
        true
    }

    fn end_drag(&mut self) {
        self.drag.stop();
        self.drag_source = None;
    }

    /// Feeds a raw window event to the controller.
    pub fn handle_event(&mut self, event: &event::Event, now: Instant) -> ViewerEvent {
        if !self.is_open() {
            if let event::Event::Mouse(mouse::Event::CursorMoved { position }) = event {
                self.cursor_position = Some(*position);
            }
            return ViewerEvent::Ignored;
        }
        match event {
            event::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => self.handle_key(key),
            event::Event::Touch(touch_event) => self.handle_touch(touch_event, now),
            _ => ViewerEvent::Ignored,
        }
    }

    fn handle_mouse(&mut self, event: &mouse::Event) -> ViewerEvent {
        match event {
            mouse::Event::WheelScrolled { delta } => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                if y > 0.0 {
                    self.zoom_in();
                } else if y < 0.0 {
                    self.zoom_out();
                }
                ViewerEvent::Handled
            }
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(*position);
                if self.drag_source == Some(DragSource::Pointer) {
                    if let Some(delta) = self.drag.advance(*position) {
                        self.pan_by(delta.x, delta.y);
                    }
                    return ViewerEvent::Handled;
                }
                ViewerEvent::Ignored
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft => {
                if matches!(event, mouse::Event::CursorLeft) {
                    self.cursor_position = None;
                }
                if self.drag_source == Some(DragSource::Pointer) {
                    self.end_drag();
                    return ViewerEvent::Handled;
                }
                ViewerEvent::Ignored
            }
            _ => ViewerEvent::Ignored,
        }
    }

    fn handle_key(&mut self, key: &Key) -> ViewerEvent {
        match key {
            Key::Named(Named::Escape) => {
                self.close();
                ViewerEvent::Closed
            }
            Key::Character(c) => match c.as_str() {
                "+" | "=" => {
                    self.zoom_in();
                    ViewerEvent::Handled
                }
                "-" => {
                    self.zoom_out();
                    ViewerEvent::Handled
                }
                "0" => {
                    self.reset_zoom();
                    ViewerEvent::Handled
                }
                _ => ViewerEvent::Ignored,
            },
            _ => ViewerEvent::Ignored,
        }
    }

    fn handle_touch(&mut self, event: &touch::Event, now: Instant) -> ViewerEvent {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                self.touch.finger_pressed(id, position);
                if self.touch.active_fingers() == 1 {
                    if self.zoom.is_zoomed() && self.drag_source.is_none() {
                        self.drag.start(position);
                        self.drag_source = Some(DragSource::Touch);
                    }
                } else if self.drag_source == Some(DragSource::Touch) {
                    // A second finger turns the drag into a pinch.
                    self.end_drag();
                }
                ViewerEvent::Handled
            }
            touch::Event::FingerMoved { id, position } => {
                match self.touch.finger_moved(id, position) {
                    Some(TouchGesture::Pinch(ratio)) => {
                        self.zoom.multiply(ratio, self.limits);
                        if !self.zoom.is_zoomed() {
                            self.end_drag();
                        }
                    }
                    Some(TouchGesture::Pan(delta)) => match self.drag_source {
                        Some(DragSource::Touch) => {
                            self.pan_by(delta.x, delta.y);
                        }
                        None if self.zoom.is_zoomed() => {
                            // Left over from a pinch: keep panning with the remaining finger.
                            self.drag.start(position);
                            self.drag_source = Some(DragSource::Touch);
                            self.pan_by(delta.x, delta.y);
                        }
                        _ => {}
                    },
                    _ => {}
                }
                ViewerEvent::Handled
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                let gesture = self.touch.finger_released(id, now);
                if self.touch.active_fingers() == 0 && self.drag_source == Some(DragSource::Touch) {
                    self.end_drag();
                }
                if gesture == Some(TouchGesture::DoubleTap) {
                    self.double_tap();
                }
                ViewerEvent::Handled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};
    use iced::touch::Finger;

    fn controller() -> ViewerController {
        ViewerController::new(ZoomLimits::new(1.0, 5.0, 0.5), GestureSettings::default())
    }

    fn wheel(y: f32) -> event::Event {
        event::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y },
        })
    }

    fn char_key(c: &str) -> event::Event {
        key_event(Key::Character(c.into()))
    }

    fn key_event(key: Key) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: key::Physical::Code(key::Code::Escape),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn finger(kind: fn(Finger, Point) -> touch::Event, id: u64, x: f32, y: f32) -> event::Event {
        event::Event::Touch(kind(Finger(id), Point::new(x, y)))
    }

    fn pressed(id: Finger, position: Point) -> touch::Event {
        touch::Event::FingerPressed { id, position }
    }

    fn moved(id: Finger, position: Point) -> touch::Event {
        touch::Event::FingerMoved { id, position }
    }

    fn lifted(id: Finger, position: Point) -> touch::Event {
        touch::Event::FingerLifted { id, position }
    }

    fn cursor(x: f32, y: f32) -> event::Event {
        event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn open_starts_at_identity() {
        let mut viewer = controller();
        viewer.open("image-submissions/a.png");
        assert_eq!(viewer.selected(), Some("image-submissions/a.png"));
        assert_eq!(viewer.zoom(), ZoomState::default());
    }

    #[test]
    fn close_then_open_does_not_leak_transform() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");
        viewer.set_scale(3.0);
        viewer.pan_by(40.0, 25.0);
        viewer.handle_event(&wheel(1.0), now);
        viewer.close();
        assert!(!viewer.is_open());

        viewer.open("b.png");
        assert_eq!(viewer.zoom(), ZoomState::default());
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn opening_another_image_cancels_gestures() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");
        viewer.set_scale(2.0);
        viewer.handle_event(&cursor(10.0, 10.0), now);
        assert!(viewer.begin_pointer_drag());

        viewer.open("b.png");
        assert!(!viewer.is_dragging());
        assert_eq!(viewer.handle_event(&cursor(50.0, 50.0), now), ViewerEvent::Ignored);
        assert_eq!(viewer.zoom(), ZoomState::default());
    }

    #[test]
    fn wheel_down_at_minimum_stays_clamped() {
        let mut viewer = controller();
        viewer.open("a.png");
        viewer.handle_event(&wheel(-1.0), Instant::now());
        assert_eq!(viewer.zoom().scale, 1.0);
    }

    #[test]
    fn wheel_up_steps_by_configured_amount() {
        let mut viewer = controller();
        viewer.open("a.png");
        viewer.handle_event(&wheel(1.0), Instant::now());
        assert_eq!(viewer.zoom().scale, 1.5);
    }

    #[test]
    fn events_are_ignored_while_closed() {
        let mut viewer = controller();
        assert_eq!(viewer.handle_event(&wheel(1.0), Instant::now()), ViewerEvent::Ignored);
        assert_eq!(viewer.zoom().scale, 1.0);
    }

    #[test]
    fn keyboard_shortcuts_drive_zoom_and_close() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");

        viewer.handle_event(&char_key("+"), now);
        viewer.handle_event(&char_key("="), now);
        assert_eq!(viewer.zoom().scale, 2.0);
        viewer.handle_event(&char_key("-"), now);
        assert_eq!(viewer.zoom().scale, 1.5);
        viewer.handle_event(&char_key("0"), now);
        assert_eq!(viewer.zoom().scale, 1.0);

        let outcome = viewer.handle_event(&key_event(Key::Named(Named::Escape)), now);
        assert_eq!(outcome, ViewerEvent::Closed);
        assert!(!viewer.is_open());
    }

    #[test]
    fn pointer_drag_pans_only_when_zoomed() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");
        viewer.handle_event(&cursor(100.0, 100.0), now);
        assert!(!viewer.begin_pointer_drag());

        viewer.set_scale(2.0);
        assert!(viewer.begin_pointer_drag());
        viewer.handle_event(&cursor(130.0, 90.0), now);
        assert_eq!(viewer.zoom().translate_x, 30.0);
        assert_eq!(viewer.zoom().translate_y, -10.0);

        viewer.handle_event(&event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)), now);
        assert!(!viewer.is_dragging());
        viewer.handle_event(&cursor(200.0, 200.0), now);
        assert_eq!(viewer.zoom().translate_x, 30.0);
    }

    #[test]
    fn zooming_back_to_fitted_resets_pan() {
        let mut viewer = controller();
        viewer.open("a.png");
        viewer.set_scale(2.0);
        viewer.pan_by(15.0, 15.0);
        viewer.set_scale(1.0);
        assert_eq!((viewer.zoom().translate_x, viewer.zoom().translate_y), (0.0, 0.0));
        assert!(!viewer.pan_by(5.0, 5.0));
    }

    #[test]
    fn double_tap_toggles_between_fitted_and_two() {
        let mut viewer = controller();
        let t0 = Instant::now();
        viewer.open("a.png");

        let tap = |viewer: &mut ViewerController, ms: u64| {
            let at = t0 + Duration::from_millis(ms);
            viewer.handle_event(&finger(pressed, 1, 50.0, 50.0), at);
            viewer.handle_event(&finger(lifted, 1, 50.0, 50.0), at);
        };

        tap(&mut viewer, 0);
        tap(&mut viewer, 100);
        assert_eq!(viewer.zoom(), ZoomState { scale: 2.0, translate_x: 0.0, translate_y: 0.0 });

        tap(&mut viewer, 200);
        tap(&mut viewer, 300);
        assert_eq!(viewer.zoom(), ZoomState::default());
    }

    #[test]
    fn quick_drag_after_tap_keeps_scale() {
        let mut viewer = controller();
        let t0 = Instant::now();
        viewer.open("a.png");

        viewer.handle_event(&finger(pressed, 1, 50.0, 50.0), t0);
        viewer.handle_event(&finger(lifted, 1, 50.0, 50.0), t0);

        let at = t0 + Duration::from_millis(80);
        viewer.handle_event(&finger(pressed, 1, 50.0, 50.0), at);
        viewer.handle_event(&finger(moved, 1, 120.0, 50.0), at);
        viewer.handle_event(&finger(lifted, 1, 120.0, 50.0), at);

        assert_eq!(viewer.zoom(), ZoomState::default());
    }

    #[test]
    fn double_tap_clears_pan() {
        let mut viewer = controller();
        viewer.open("a.png");
        viewer.set_scale(1.2);
        viewer.pan_by(10.0, 10.0);
        viewer.double_tap();
        assert_eq!(viewer.zoom(), ZoomState { scale: 2.0, translate_x: 0.0, translate_y: 0.0 });
    }

    #[test]
    fn pinch_multiplies_scale_by_distance_ratio() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");

        viewer.handle_event(&finger(pressed, 1, 0.0, 0.0), now);
        viewer.handle_event(&finger(pressed, 2, 100.0, 0.0), now + Duration::from_secs(1));
        viewer.handle_event(&finger(moved, 2, 150.0, 0.0), now + Duration::from_secs(1));

        assert!((viewer.zoom().scale - 1.5).abs() < 1e-6);
    }

    #[test]
    fn pinch_beyond_maximum_is_clamped() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");
        viewer.set_scale(4.0);

        viewer.handle_event(&finger(pressed, 1, 0.0, 0.0), now);
        viewer.handle_event(&finger(pressed, 2, 100.0, 0.0), now + Duration::from_secs(1));
        viewer.handle_event(&finger(moved, 2, 150.0, 0.0), now + Duration::from_secs(1));

        assert_eq!(viewer.zoom().scale, 5.0);
    }

    #[test]
    fn single_finger_drag_pans_when_zoomed() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");
        viewer.set_scale(2.0);

        viewer.handle_event(&finger(pressed, 1, 10.0, 10.0), now);
        viewer.handle_event(&finger(moved, 1, 25.0, 5.0), now);

        assert_eq!(viewer.zoom().translate_x, 15.0);
        assert_eq!(viewer.zoom().translate_y, -5.0);
        viewer.handle_event(&finger(lifted, 1, 25.0, 5.0), now);
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn scale_stays_in_bounds_for_any_input_mix() {
        let mut viewer = controller();
        let now = Instant::now();
        viewer.open("a.png");
        let inputs = [
            wheel(1.0),
            wheel(1.0),
            char_key("+"),
            wheel(-1.0),
            char_key("-"),
            char_key("-"),
            char_key("-"),
            char_key("-"),
            wheel(1.0),
        ];
        for _ in 0..5 {
            for input in &inputs {
                viewer.handle_event(input, now);
                let scale = viewer.zoom().scale;
                assert!((1.0..=5.0).contains(&scale), "scale {scale} out of bounds");
            }
        }
        for value in [-3.0, 0.0, 0.7, 2.3, 9.9, 100.0] {
            viewer.set_scale(value);
            let scale = viewer.zoom().scale;
            assert!((1.0..=5.0).contains(&scale));
        }
    }
}
