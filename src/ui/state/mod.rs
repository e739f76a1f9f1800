// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept out of the components so it can be tested
//! without a window.

pub mod drag;
pub mod touch;
pub mod zoom;

pub use drag::DragState;
pub use touch::{TouchGesture, TouchTracker};
pub use zoom::{ZoomLimits, ZoomState};
