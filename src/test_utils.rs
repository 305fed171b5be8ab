// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit tests.
//!
//! Float comparisons go through the `approx` macros re-exported here, which
//! handle precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use image_rs::{DynamicImage, Rgba, RgbaImage};

/// An opaque single-color image.
pub fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    let [r, g, b] = color;
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])))
}

/// Number of pixels whose alpha is below 255.
pub fn translucent_pixels(image: &RgbaImage) -> usize {
    image.pixels().filter(|p| p.0[3] < 255).count()
}
