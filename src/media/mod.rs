// SPDX-License-Identifier: MPL-2.0
//! Image handling shared by the gallery and the upload flow.

pub mod image_cache;

pub use image_cache::{CacheStats, CachedImage, ImageCache, ImageSlot};

use std::path::Path;

/// Image file extensions offered by the upload picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Returns `true` if `path` has an extension of a supported image format.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Returns `true` if `bytes` start like a supported image file.
#[must_use]
pub fn looks_like_image(bytes: &[u8]) -> bool {
    image_rs::guess_format(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("cat.PNG")));
        assert!(is_supported_image(Path::new("dir/dog.jpeg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn sniffing_recognizes_jpeg() {
        assert!(looks_like_image(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0]));
        assert!(!looks_like_image(b"plain text"));
    }
}
