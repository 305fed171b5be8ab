// SPDX-License-Identifier: MPL-2.0
//! Iconset domain types.
//!
//! This module provides pure domain types describing which bitmaps an
//! iconset contains:
//! - [`IconSpec`]: One bitmap (logical size + display scale)
//! - [`IconSet`]: The ordered, duplicate-free list of bitmaps to export

pub mod newtypes;

pub use newtypes::{DisplayScale, LogicalSize, ScaleFactor};

use std::collections::BTreeSet;
use std::fmt;

/// One bitmap of an iconset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSpec {
    pub logical: LogicalSize,
    pub scale: DisplayScale,
}

impl IconSpec {
    #[must_use]
    pub fn new(logical: LogicalSize, scale: DisplayScale) -> Self {
        Self { logical, scale }
    }

    /// Builds a spec from raw numbers, validating both.
    pub fn from_raw(logical: u32, scale: u32) -> Result<Self, IconSetError> {
        let logical = LogicalSize::new(logical).ok_or(IconSetError::InvalidLogicalSize(logical))?;
        let scale = DisplayScale::new(scale).ok_or(IconSetError::InvalidScale(scale))?;
        Ok(Self::new(logical, scale))
    }

    /// Side length in pixels of the bitmap.
    #[must_use]
    pub fn physical_px(self) -> u32 {
        self.logical.value() * self.scale.value()
    }

    /// File name inside the iconset directory.
    ///
    /// `icon_16x16.png` at 1x, `icon_16x16@2x.png` otherwise.
    #[must_use]
    pub fn filename(self) -> String {
        if self.scale.is_base() {
            format!("icon_{}.png", self.logical)
        } else {
            format!("icon_{}@{}.png", self.logical, self.scale)
        }
    }
}

impl fmt::Display for IconSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} ({} px)", self.logical, self.scale, self.physical_px())
    }
}

/// Reasons an icon set can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSetError {
    Empty,
    Duplicate(String),
    InvalidLogicalSize(u32),
    InvalidScale(u32),
}

impl fmt::Display for IconSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSetError::Empty => write!(f, "icon set has no entries"),
            IconSetError::Duplicate(name) => write!(f, "icon set lists {} twice", name),
            IconSetError::InvalidLogicalSize(size) => write!(
                f,
                "logical size {} outside {}..={}",
                size,
                newtypes::logical_bounds::MIN,
                newtypes::logical_bounds::MAX
            ),
            IconSetError::InvalidScale(scale) => write!(
                f,
                "display scale {} outside {}..={}",
                scale,
                newtypes::scale_bounds::MIN,
                newtypes::scale_bounds::MAX
            ),
        }
    }
}

impl std::error::Error for IconSetError {}

/// The bitmaps one export run produces, in export order.
///
/// Guaranteed non-empty and free of duplicate file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    entries: Vec<IconSpec>,
}

impl IconSet {
    /// Validates and wraps a list of entries.
    pub fn new(entries: Vec<IconSpec>) -> Result<Self, IconSetError> {
        if entries.is_empty() {
            return Err(IconSetError::Empty);
        }
        let mut seen = BTreeSet::new();
        for spec in &entries {
            if !seen.insert(*spec) {
                return Err(IconSetError::Duplicate(spec.filename()));
            }
        }
        Ok(Self { entries })
    }

    /// The macOS application icon set: 16, 32, 128, 256 and 512 points at 1x and 2x.
    #[must_use]
    pub fn macos() -> Self {
        let entries = [16, 32, 128, 256, 512]
            .into_iter()
            .filter_map(LogicalSize::new)
            .flat_map(|logical| {
                [DisplayScale::X1, DisplayScale::X2]
                    .into_iter()
                    .map(move |scale| IconSpec::new(logical, scale))
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[IconSpec] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct physical pixel sizes, ascending.
    #[must_use]
    pub fn physical_sizes(&self) -> Vec<u32> {
        let sizes: BTreeSet<u32> = self.entries.iter().map(|spec| spec.physical_px()).collect();
        sizes.into_iter().collect()
    }

    /// Largest physical size in the set.
    #[must_use]
    pub fn max_physical_px(&self) -> u32 {
        self.entries
            .iter()
            .map(|spec| spec.physical_px())
            .max()
            .unwrap_or(0)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::macos()
    }
}
