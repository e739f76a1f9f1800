// SPDX-License-Identifier: MPL-2.0
//! Incremental image gallery card.
//!
//! - [`component`] - state, messages and update logic
//! - [`viewer`] - open image and zoom/pan input handling
//! - `grid` / `overlay` - rendering

pub mod component;
mod grid;
mod overlay;
pub mod viewer;

pub use component::{Effect, Gallery, Message, LOAD_ERROR_KEY};
pub use viewer::{GestureSettings, ViewerController, ViewerEvent};
