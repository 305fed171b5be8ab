// SPDX-License-Identifier: MPL-2.0
//! Consistency check of an exported iconset directory.

use super::manifest::Manifest;
use crate::config::defaults::MANIFEST_FILE;
use crate::domain::icon::IconSet;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Findings of [`verify_iconset`]. Empty lists mean the directory is consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Expected by the icon set but absent from the manifest.
    pub missing_from_manifest: Vec<String>,
    /// Listed in the manifest but not part of the icon set.
    pub unexpected_in_manifest: Vec<String>,
    /// Listed in the manifest but absent on disk.
    pub missing_files: Vec<String>,
    /// PNG files on disk that the manifest does not list.
    pub stray_files: Vec<String>,
    /// `(file, expected px, actual width, actual height)`
    pub wrong_dimensions: Vec<(String, u32, u32, u32)>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.missing_from_manifest.is_empty()
            && self.unexpected_in_manifest.is_empty()
            && self.missing_files.is_empty()
            && self.stray_files.is_empty()
            && self.wrong_dimensions.is_empty()
    }

    /// Turns an inconsistent report into an error listing every problem.
    pub fn into_result(self) -> Result<()> {
        if self.is_consistent() {
            return Ok(());
        }
        let mut problems = Vec::new();
        for name in &self.missing_from_manifest {
            problems.push(format!("{name} missing from manifest"));
        }
        for name in &self.unexpected_in_manifest {
            problems.push(format!("{name} not part of the icon set"));
        }
        for name in &self.missing_files {
            problems.push(format!("{name} listed but not on disk"));
        }
        for name in &self.stray_files {
            problems.push(format!("{name} on disk but not listed"));
        }
        for (name, px, width, height) in &self.wrong_dimensions {
            problems.push(format!("{name} is {width}x{height}, expected {px}x{px}"));
        }
        Err(Error::Manifest(problems.join("; ")))
    }
}

/// Compares an iconset directory with its manifest and with `icon_set`.
///
/// Checks set equality between the icon set, the manifest and the PNG files
/// on disk, and the pixel dimensions of every listed file.
pub fn verify_iconset(dir: &Path, icon_set: &IconSet) -> Result<VerifyReport> {
    let manifest = Manifest::read_from_dir(dir)?;
    let listed = manifest.filenames();
    let expected: BTreeSet<String> = icon_set.entries().iter().map(|s| s.filename()).collect();

    let mut on_disk = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name != MANIFEST_FILE && name.to_ascii_lowercase().ends_with(".png") {
            on_disk.insert(name);
        }
    }

    let mut report = VerifyReport {
        missing_from_manifest: expected.difference(&listed).cloned().collect(),
        unexpected_in_manifest: listed.difference(&expected).cloned().collect(),
        missing_files: listed.difference(&on_disk).cloned().collect(),
        stray_files: on_disk.difference(&listed).cloned().collect(),
        wrong_dimensions: Vec::new(),
    };

    for spec in icon_set.entries() {
        let name = spec.filename();
        if !on_disk.contains(&name) {
            continue;
        }
        let (width, height) = image_rs::image_dimensions(dir.join(&name)).map_err(|e| {
            Error::Decode {
                path: dir.join(&name),
                reason: e.to_string(),
            }
        })?;
        let px = spec.physical_px();
        if (width, height) != (px, px) {
            report.wrong_dimensions.push((name, px, width, height));
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::icon::IconSpec;
    use crate::export::{Exporter, MasterImage};
    use crate::test_utils::solid_image;
    use image_rs::RgbaImage;
    use tempfile::tempdir;

    fn small_set() -> IconSet {
        IconSet::new(vec![
            IconSpec::from_raw(16, 1).unwrap(),
            IconSpec::from_raw(16, 2).unwrap(),
        ])
        .unwrap()
    }

    fn export_small(dir: &Path) {
        let master = MasterImage::from_image(&solid_image(8, 8, [10, 20, 30]));
        Exporter::new(small_set(), dir).export(&master).unwrap();
    }

    #[test]
    fn fresh_export_is_consistent() {
        let dir = tempdir().expect("failed to create temp dir");
        export_small(dir.path());
        let report = verify_iconset(dir.path(), &small_set()).unwrap();
        assert!(report.is_consistent(), "{report:?}");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn stray_and_missing_files_are_reported() {
        let dir = tempdir().expect("failed to create temp dir");
        export_small(dir.path());
        fs::remove_file(dir.path().join("icon_16x16@2x.png")).unwrap();
        RgbaImage::new(64, 64)
            .save(dir.path().join("icon_64x64.png"))
            .unwrap();

        let report = verify_iconset(dir.path(), &small_set()).unwrap();
        assert_eq!(report.missing_files, vec!["icon_16x16@2x.png".to_string()]);
        assert_eq!(report.stray_files, vec!["icon_64x64.png".to_string()]);
        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("icon_64x64.png on disk but not listed"));
    }

    #[test]
    fn wrong_dimensions_are_reported() {
        let dir = tempdir().expect("failed to create temp dir");
        export_small(dir.path());
        RgbaImage::new(20, 20)
            .save(dir.path().join("icon_16x16.png"))
            .unwrap();
        let report = verify_iconset(dir.path(), &small_set()).unwrap();
        assert_eq!(
            report.wrong_dimensions,
            vec![("icon_16x16.png".to_string(), 16, 20, 20)]
        );
    }

    #[test]
    fn manifest_against_other_set_is_reported() {
        let dir = tempdir().expect("failed to create temp dir");
        export_small(dir.path());
        let report = verify_iconset(dir.path(), &IconSet::macos()).unwrap();
        assert_eq!(report.missing_from_manifest.len(), 8);
        assert!(report.unexpected_in_manifest.is_empty());
    }
}
