// SPDX-License-Identifier: MPL-2.0
//! Source image handling.
//!
//! This module loads user-supplied icon sources and turns them into square
//! RGBA masters ready for resampling.

pub mod image_transform;
pub mod source;

pub use image_transform::{center_crop_square, resize_square, SquareCrop, RESAMPLE_FILTER};
pub use source::load_source;

/// File extensions accepted as icon sources.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
];

/// Whether `path` has one of the [`SOURCE_EXTENSIONS`] (case-insensitive).
pub fn has_source_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn recognizes_common_extensions() {
        assert!(has_source_extension(Path::new("logo.PNG")));
        assert!(has_source_extension(Path::new("art/logo.svg")));
        assert!(!has_source_extension(Path::new("notes.txt")));
        assert!(!has_source_extension(Path::new("no_extension")));
    }
}
