// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for dashboard cards, gallery tiles and the viewer overlay.

pub mod button;
pub mod container;
pub mod overlay;
pub mod slider;
