// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a grab-and-drag gesture and reports movement as incremental
//! deltas, so pointer and touch drags feed the same pan operation.

use iced::{Point, Vector};

#[derive(Debug, Clone, Default)]
pub struct DragState {
    last_position: Option<Point>,
}

impl DragState {
    pub fn start(&mut self, position: Point) {
        self.last_position = Some(position);
    }

    pub fn stop(&mut self) {
        self.last_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    /// Returns the movement since the previous call and records `position`.
    pub fn advance(&mut self, position: Point) -> Option<Vector> {
        let last = self.last_position.as_mut()?;
        let delta = position - *last;
        *last = position;
        Some(delta)
    }
}
