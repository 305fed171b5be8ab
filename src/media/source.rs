// SPDX-License-Identifier: MPL-2.0
//! Source image loading (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use image_rs::{DynamicImage, RgbaImage};
use resvg::usvg;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a source image from the given path.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized so that their shorter side is at least
/// `svg_min_px` pixels, keeping vector sources sharp at the largest icon size.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`Error::SourceNotFound`])
/// - The file cannot be read ([`Error::Io`])
/// - The data is not a decodable image or has zero dimensions ([`Error::Decode`])
pub fn load_source<P: AsRef<Path>>(path: P, svg_min_px: u32) -> Result<DynamicImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::Io(format!("{}: {}", path.display(), err)),
    })?;

    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let image = if extension.eq_ignore_ascii_case("svg") {
        rasterize_svg(path, &bytes, svg_min_px)?
    } else {
        image_rs::load_from_memory(&bytes).map_err(|e| decode_error(path, e))?
    };

    if image.width() == 0 || image.height() == 0 {
        return Err(decode_error(path, "image has empty dimensions"));
    }
    tracing::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

fn rasterize_svg(path: &Path, data: &[u8], min_px: u32) -> Result<DynamicImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| decode_error(path, e))?;

    let size = tree.size();
    let shorter = size.width().min(size.height());
    if shorter <= 0.0 {
        return Err(decode_error(path, "SVG has empty dimensions"));
    }
    #[allow(clippy::cast_precision_loss)]
    let scale = (min_px as f32 / shorter).max(1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (
        (size.width() * scale).round().max(1.0) as u32,
        (size.height() * scale).round().max(1.0) as u32,
    );

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| decode_error(path, "failed to allocate SVG pixmap"))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RgbaImage::from_raw(width, height, rgba)
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| decode_error(path, "SVG raster has an unexpected length"))
}

fn decode_error(path: &Path, reason: impl ToString) -> Error {
    Error::Decode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_source(&image_path, 1024).expect("png should load successfully");
        assert_eq!(data.width(), 4);
        assert_eq!(data.height(), 2);
    }

    #[test]
    fn load_svg_image_rasterizes_to_minimum_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_source(&svg_path, 300).expect("svg should load successfully");
        assert_eq!(data.width(), 600);
        assert_eq!(data.height(), 300);
        assert_eq!(data.to_rgba8().get_pixel(300, 150).0, [0, 0, 255, 255]);
    }

    #[test]
    fn load_missing_image_returns_source_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_source(&missing_path, 1024) {
            Err(Error::SourceNotFound(path)) => assert_eq!(path, missing_path),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_source(&bad_path, 1024) {
            Err(Error::Decode { reason, .. }) => assert!(!reason.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        assert!(matches!(
            load_source(&bad_svg_path, 1024),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn directory_is_not_a_source() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_source(temp_dir.path(), 1024);
        assert!(matches!(result, Err(Error::Io(_)) | Err(Error::Decode { .. })));
    }
}
