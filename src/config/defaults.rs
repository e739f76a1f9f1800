// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Listing prefix, page size and image cache bounds
//! - **Viewer**: Zoom bounds, zoom steps and touch gesture timing
//! - **Logging**: Default tracing filter

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Folder prefix listed by the gallery. Must end with a `/`.
pub const DEFAULT_GALLERY_PREFIX: &str = "image-submissions/";

/// Number of items requested per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum page size accepted from the config file.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum page size accepted from the config file.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Number of resolved images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Minimum image cache capacity.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 8;

/// Maximum image cache capacity.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 512;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Smallest scale the viewer allows (1.0 = fitted size).
pub const DEFAULT_MIN_ZOOM: f32 = 1.0;

/// Largest scale the viewer allows.
pub const DEFAULT_MAX_ZOOM: f32 = 5.0;

/// Scale change per step button press, wheel tick or key press.
pub const DEFAULT_ZOOM_STEP: f32 = 0.5;

/// Granularity of the zoom slider.
pub const SLIDER_STEP: f32 = 0.1;

/// Maximum delay between two taps to count as a double tap.
pub const DEFAULT_DOUBLE_TAP_MS: u64 = 300;

/// Scale a double tap zooms to from the unzoomed state.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 2.0;

/// A double tap above this scale zooms back out instead of in.
pub const DOUBLE_TAP_TOGGLE_THRESHOLD: f32 = 1.5;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAGE_SIZE > 0);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    assert!(MIN_IMAGE_CACHE_ENTRIES > 0);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES >= MIN_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES <= MAX_IMAGE_CACHE_ENTRIES);

    assert!(DEFAULT_MIN_ZOOM > 0.0);
    assert!(DEFAULT_MAX_ZOOM > DEFAULT_MIN_ZOOM);
    assert!(DEFAULT_ZOOM_STEP > 0.0);
    assert!(SLIDER_STEP > 0.0);
    assert!(DEFAULT_DOUBLE_TAP_SCALE > DEFAULT_MIN_ZOOM);
    assert!(DEFAULT_DOUBLE_TAP_SCALE <= DEFAULT_MAX_ZOOM);
    assert!(DOUBLE_TAP_TOGGLE_THRESHOLD > DEFAULT_MIN_ZOOM);
    assert!(DOUBLE_TAP_TOGGLE_THRESHOLD < DEFAULT_DOUBLE_TAP_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_prefix_is_a_folder() {
        assert!(DEFAULT_GALLERY_PREFIX.ends_with('/'));
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_MIN_ZOOM, 1.0);
        assert_eq!(DEFAULT_MAX_ZOOM, 5.0);
        assert_eq!(DEFAULT_ZOOM_STEP, 0.5);
    }

    #[test]
    fn page_size_defaults_are_valid() {
        assert_eq!(DEFAULT_PAGE_SIZE, 10);
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    }
}
