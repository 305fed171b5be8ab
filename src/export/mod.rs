// SPDX-License-Identifier: MPL-2.0
//! Iconset export.
//!
//! An [`IconSource`] hands out square images at any pixel size; the
//! [`Exporter`] asks it for every entry of an [`IconSet`], writes the PNGs
//! and then the manifest of exactly what it wrote.
//!
//! # Examples
//!
//! ```no_run
//! use icon_forge::domain::icon::IconSet;
//! use icon_forge::export::{Exporter, MasterImage};
//! use icon_forge::media::load_source;
//!
//! let image = load_source("icon_source.png", 1024).unwrap();
//! let source = MasterImage::from_image(&image);
//! let report = Exporter::new(IconSet::macos(), "AppIcon.appiconset")
//!     .export(&source)
//!     .unwrap();
//! assert_eq!(report.icons.len(), 10);
//! ```

pub mod manifest;
pub mod verify;

pub use manifest::{Manifest, ManifestImage, ManifestInfo};
pub use verify::{verify_iconset, VerifyReport};

use crate::domain::icon::{IconSet, IconSpec};
use crate::error::{Error, Result};
use crate::media::{center_crop_square, resize_square, SquareCrop};
use crate::render::{self, Artwork, BadgeText};
use image_rs::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can produce a square icon image at a given pixel size.
pub trait IconSource {
    /// Short human-readable description for logs.
    fn describe(&self) -> String;

    /// Returns a `px`×`px` image.
    fn image_at(&self, px: u32) -> Result<RgbaImage>;
}

/// Re-renders an artwork at every requested size.
pub struct RenderedSource<'a> {
    artwork: &'a dyn Artwork,
    badge: &'a BadgeText,
}

impl<'a> RenderedSource<'a> {
    #[must_use]
    pub fn new(artwork: &'a dyn Artwork, badge: &'a BadgeText) -> Self {
        Self { artwork, badge }
    }
}

impl IconSource for RenderedSource<'_> {
    fn describe(&self) -> String {
        format!("'{}' artwork", self.artwork.name())
    }

    fn image_at(&self, px: u32) -> Result<RgbaImage> {
        render::render(self.artwork, px, self.badge)
    }
}

/// One loaded image, squared once and resampled on demand.
#[derive(Debug, Clone)]
pub struct MasterImage {
    master: RgbaImage,
    crop: SquareCrop,
}

impl MasterImage {
    /// Center-crops `image` to a square and keeps it as the master.
    #[must_use]
    pub fn from_image(image: &DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        let crop = SquareCrop::centered(width, height);
        if !crop.is_identity(width, height) {
            tracing::info!(
                "cropping {}x{} source to {}x{} at ({}, {})",
                width,
                height,
                crop.side,
                crop.side,
                crop.left,
                crop.top
            );
        }
        Self {
            master: center_crop_square(image).to_rgba8(),
            crop,
        }
    }

    /// The crop that was applied to the original image.
    #[must_use]
    pub fn crop(&self) -> SquareCrop {
        self.crop
    }

    /// Side length of the square master.
    #[must_use]
    pub fn side(&self) -> u32 {
        self.master.width()
    }
}

impl IconSource for MasterImage {
    fn describe(&self) -> String {
        format!("{0}x{0} source image", self.side())
    }

    fn image_at(&self, px: u32) -> Result<RgbaImage> {
        if px > self.side() {
            tracing::debug!("upscaling {}px master to {}px", self.side(), px);
        }
        Ok(resize_square(&self.master, px))
    }
}

/// A file written by the exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
}

/// Outcome of one export run.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub icons: Vec<ExportedIcon>,
    pub manifest_path: PathBuf,
}

/// Writes an [`IconSet`] into one directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    icon_set: IconSet,
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(icon_set: IconSet, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_set,
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn icon_set(&self) -> &IconSet {
        &self.icon_set
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every icon of the set, then the manifest.
    ///
    /// The output directory is created if absent. Each distinct pixel size is
    /// produced once per run and shared by the entries that need it.
    ///
    /// # Errors
    ///
    /// Returns the first source, encoding or filesystem error; nothing is
    /// retried.
    pub fn export(&self, source: &dyn IconSource) -> Result<ExportReport> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::Io(format!("cannot create {}: {}", self.output_dir.display(), e))
        })?;
        tracing::info!(
            "exporting {} icons from {} into {}",
            self.icon_set.len(),
            source.describe(),
            self.output_dir.display()
        );

        let mut images: BTreeMap<u32, RgbaImage> = BTreeMap::new();
        let mut icons = Vec::with_capacity(self.icon_set.len());
        for &spec in self.icon_set.entries() {
            let px = spec.physical_px();
            if !images.contains_key(&px) {
                images.insert(px, source.image_at(px)?);
            } else {
                tracing::debug!("reusing {px}px image for {}", spec.filename());
            }
            let image = &images[&px];
            let path = self.output_dir.join(spec.filename());
            save_png(image, &path)?;
            tracing::info!("wrote {} ({}x{})", path.display(), px, px);
            icons.push(ExportedIcon { spec, path });
        }

        let manifest = Manifest::for_icons(icons.iter().map(|icon| &icon.spec));
        let manifest_path = manifest.write_to_dir(&self.output_dir)?;
        tracing::info!("wrote {}", manifest_path.display());

        Ok(ExportReport {
            icons,
            manifest_path,
        })
    }
}

/// Writes the loose preview PNG, creating parent directories as needed.
pub fn write_preview(source: &dyn IconSource, path: &Path, size: u32) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let image = source.image_at(size)?;
    save_png(&image, path)?;
    tracing::info!("preview saved to {}", path.display());
    Ok(())
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("Failed to save {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ArtworkStyle;
    use crate::test_utils::solid_image;
    use image_rs::Rgba;
    use std::cell::RefCell;
    use tempfile::tempdir;

    /// Counts how often each size is requested.
    struct CountingSource {
        requests: RefCell<Vec<u32>>,
    }

    impl IconSource for CountingSource {
        fn describe(&self) -> String {
            "counting source".into()
        }

        fn image_at(&self, px: u32) -> Result<RgbaImage> {
            self.requests.borrow_mut().push(px);
            Ok(RgbaImage::from_pixel(px, px, Rgba([9, 9, 9, 255])))
        }
    }

    #[test]
    fn each_physical_size_is_requested_once() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = CountingSource {
            requests: RefCell::new(Vec::new()),
        };
        Exporter::new(IconSet::macos(), dir.path())
            .export(&source)
            .expect("export succeeds");
        assert_eq!(
            source.requests.into_inner(),
            vec![16, 32, 64, 128, 256, 512, 1024]
        );
    }

    #[test]
    fn export_creates_missing_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let out = dir.path().join("nested").join("AppIcon.appiconset");
        let set = IconSet::new(vec![IconSpec::from_raw(16, 1).unwrap()]).unwrap();
        let report = Exporter::new(set, &out)
            .export(&MasterImage::from_image(&solid_image(4, 4, [1, 2, 3])))
            .expect("export succeeds");
        assert!(out.join("icon_16x16.png").is_file());
        assert_eq!(report.manifest_path, out.join("Contents.json"));
    }

    #[test]
    fn master_image_records_crop() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(800, 600));
        let master = MasterImage::from_image(&image);
        assert_eq!(
            master.crop(),
            SquareCrop {
                left: 100,
                top: 0,
                side: 600
            }
        );
        assert_eq!(master.side(), 600);
        assert_eq!(master.image_at(32).unwrap().dimensions(), (32, 32));
    }

    #[test]
    fn rendered_source_matches_direct_render() {
        let artwork = ArtworkStyle::CoolMac.artwork();
        let badge = BadgeText::Unavailable;
        let source = RenderedSource::new(artwork.as_ref(), &badge);
        let direct = render::render(artwork.as_ref(), 64, &badge).unwrap();
        assert_eq!(source.image_at(64).unwrap(), direct);
        assert!(source.describe().contains("cool-mac"));
    }

    #[test]
    fn write_preview_creates_parent() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("previews").join("icon_preview.png");
        let master = MasterImage::from_image(&DynamicImage::ImageRgba8(RgbaImage::new(2, 2)));
        write_preview(&master, &path, 128).expect("preview written");
        let saved = image_rs::open(&path).expect("preview readable");
        assert_eq!(saved.dimensions(), (128, 128));
    }

    #[test]
    fn export_into_a_file_path_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();
        let master = MasterImage::from_image(&DynamicImage::ImageRgba8(RgbaImage::new(2, 2)));
        let result = Exporter::new(IconSet::macos(), &blocker).export(&master);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
