// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Holds the scale and pan transform of the full-size viewer. Every scale
//! change goes through [`ZoomState::set_scale`], which clamps to the
//! configured [`ZoomLimits`] and drops the pan offset once the image is
//! back at (or below) its fitted size.

use crate::config::{
    ViewerConfig, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP, SLIDER_STEP,
};

/// Scale at which the image fills its frame without enlargement.
pub const FITTED_SCALE: f32 = 1.0;

/// Allowed scale range and step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
    step: f32,
}

impl ZoomLimits {
    /// Builds limits, falling back to defaults for unusable values.
    #[must_use]
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        let min = if min.is_finite() && min > 0.0 {
            min
        } else {
            DEFAULT_MIN_ZOOM
        };
        let max = if max.is_finite() && max > min {
            max
        } else {
            DEFAULT_MAX_ZOOM.max(min)
        };
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            DEFAULT_ZOOM_STEP
        };
        Self { min, max, step }
    }

    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            config.min_zoom.unwrap_or(DEFAULT_MIN_ZOOM),
            config.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM),
            config.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP),
        )
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn step(self) -> f32 {
        self.step
    }

    /// Granularity of the continuous slider.
    #[must_use]
    pub fn slider_step(self) -> f32 {
        SLIDER_STEP
    }

    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_STEP)
    }
}

/// Transform applied to the open image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: FITTED_SCALE,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl ZoomState {
    /// Returns to the fitted, centered transform.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets the scale, clamped to `limits`. Non-finite input is ignored.
    pub fn set_scale(&mut self, scale: f32, limits: ZoomLimits) {
        if !scale.is_finite() {
            return;
        }
        self.scale = limits.clamp(scale);
        if self.scale <= FITTED_SCALE {
            self.translate_x = 0.0;
            self.translate_y = 0.0;
        }
    }

    pub fn zoom_in(&mut self, limits: ZoomLimits) {
        self.set_scale(self.scale + limits.step(), limits);
    }

    pub fn zoom_out(&mut self, limits: ZoomLimits) {
        self.set_scale(self.scale - limits.step(), limits);
    }

    /// Multiplies the scale by `factor` (pinch gestures).
    pub fn multiply(&mut self, factor: f32, limits: ZoomLimits) {
        if factor.is_finite() && factor > 0.0 {
            self.set_scale(self.scale * factor, limits);
        }
    }

    /// Moves the image. Ignored unless the image is enlarged.
    ///
    /// Returns whether the offset changed.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> bool {
        if !self.is_zoomed() || !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        self.translate_x += dx;
        self.translate_y += dy;
        true
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > FITTED_SCALE
    }

    #[must_use]
    pub fn can_zoom_in(&self, limits: ZoomLimits) -> bool {
        self.scale < limits.max()
    }

    #[must_use]
    pub fn can_zoom_out(&self, limits: ZoomLimits) -> bool {
        self.scale > limits.min()
    }

    /// Scale as a whole percentage, for display.
    #[must_use]
    pub fn percent(&self) -> u32 {
        // Scale is clamped to a small positive range, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.scale * 100.0).round() as u32;
        percent
    }
}
