// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for squaring and resampling icon sources.

use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, Rgba, Rgba32FImage, RgbaImage};

/// Filter used for every icon resample.
///
/// Lanczos keeps small icons legible; nearest-neighbor is never used.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Symmetric square crop of a `width`×`height` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareCrop {
    pub left: u32,
    pub top: u32,
    pub side: u32,
}

impl SquareCrop {
    /// Largest centered square fitting in the given dimensions.
    ///
    /// The trimmed amount is split evenly; an odd remainder goes to the
    /// right/bottom edge.
    #[must_use]
    pub fn centered(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self {
            left: (width - side) / 2,
            top: (height - side) / 2,
            side,
        }
    }

    /// Whether the crop keeps the whole image.
    #[must_use]
    pub fn is_identity(self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.side == width && self.side == height
    }
}

/// Crops the image to its centered square.
///
/// Square images are returned unchanged; aspect ratio is never distorted.
pub fn center_crop_square(image: &DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    let crop = SquareCrop::centered(width, height);
    if crop.is_identity(width, height) {
        return image.clone();
    }
    image.crop_imm(crop.left, crop.top, crop.side, crop.side)
}

/// Resize a square RGBA image to `size`×`size` using a high-quality filter.
///
/// Filtering happens on premultiplied floating-point color, so the color of
/// fully transparent pixels never bleeds into visible edges.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    let size = size.max(1);
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    let (width, height) = image.dimensions();
    let premultiplied = Rgba32FImage::from_fn(width, height, |x, y| premultiply(image.get_pixel(x, y).0));
    let resized = image_rs::imageops::resize(&premultiplied, size, size, RESAMPLE_FILTER);
    RgbaImage::from_fn(size, size, |x, y| demultiply(resized.get_pixel(x, y).0))
}

fn premultiply([r, g, b, a]: [u8; 4]) -> Rgba<f32> {
    let alpha = f32::from(a) / 255.0;
    let channel = |c: u8| f32::from(c) / 255.0 * alpha;
    Rgba([channel(r), channel(g), channel(b), alpha])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn demultiply([r, g, b, a]: [f32; 4]) -> Rgba<u8> {
    let alpha = a.clamp(0.0, 1.0);
    let alpha_u8 = (alpha * 255.0).round() as u8;
    if alpha_u8 == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |c: f32| ((c / alpha).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(r), channel(g), channel(b), alpha_u8])
}
