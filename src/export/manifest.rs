// SPDX-License-Identifier: MPL-2.0
//! `Contents.json` manifest of an iconset directory.
//!
//! The manifest is always built from the list of files the exporter actually
//! wrote, so the two cannot disagree.

use crate::config::defaults::{MANIFEST_AUTHOR, MANIFEST_FILE, MANIFEST_IDIOM, MANIFEST_VERSION};
use crate::domain::icon::IconSpec;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One bitmap entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    /// Display scale, e.g. `2x`.
    pub scale: String,
    /// Logical size, e.g. `128x128`.
    pub size: String,
}

impl From<&IconSpec> for ManifestImage {
    fn from(spec: &IconSpec) -> Self {
        Self {
            filename: spec.filename(),
            idiom: MANIFEST_IDIOM.to_string(),
            scale: spec.scale.to_string(),
            size: spec.logical.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: MANIFEST_AUTHOR.to_string(),
            version: MANIFEST_VERSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// Manifest listing `specs` in order.
    pub fn for_icons<'a>(specs: impl IntoIterator<Item = &'a IconSpec>) -> Self {
        Self {
            images: specs.into_iter().map(ManifestImage::from).collect(),
            info: ManifestInfo::default(),
        }
    }

    /// File names listed by the manifest.
    #[must_use]
    pub fn filenames(&self) -> BTreeSet<String> {
        self.images
            .iter()
            .map(|image| image.filename.clone())
            .collect()
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes `Contents.json` into `dir`, returning its path.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        fs::write(&path, self.to_json()?)?;
        Ok(path)
    }

    /// Reads `Contents.json` from `dir`.
    pub fn read_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Manifest(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&content)?)
    }
}
