// SPDX-License-Identifier: MPL-2.0
//! Icon size newtypes.
//!
//! This module provides type-safe wrappers for the sizes an iconset is made of,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// Size Bounds
// =============================================================================

/// Logical size bounds (1 to 1024 points).
pub mod logical_bounds {
    /// Minimum logical size.
    pub const MIN: u32 = 1;
    /// Maximum logical size.
    pub const MAX: u32 = 1024;
}

/// Display scale bounds (1x to 3x).
pub mod scale_bounds {
    /// Minimum display scale.
    pub const MIN: u32 = 1;
    /// Maximum display scale.
    pub const MAX: u32 = 3;
}

// =============================================================================
// LogicalSize
// =============================================================================

/// Nominal icon size in points, independent of the display scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalSize(u32);

impl LogicalSize {
    /// Creates a logical size, returning `None` when out of range.
    #[must_use]
    pub fn new(points: u32) -> Option<Self> {
        (logical_bounds::MIN..=logical_bounds::MAX)
            .contains(&points)
            .then_some(Self(points))
    }

    /// Returns the size in points.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Formats as `16x16`, the notation used in file names and manifests.
impl fmt::Display for LogicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

// =============================================================================
// DisplayScale
// =============================================================================

/// Multiplier mapping a logical size to physical pixels (1x, 2x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayScale(u32);

impl DisplayScale {
    /// Standard-density displays.
    pub const X1: Self = Self(1);
    /// High-density (Retina) displays.
    pub const X2: Self = Self(2);

    /// Creates a display scale, returning `None` when out of range.
    #[must_use]
    pub fn new(factor: u32) -> Option<Self> {
        (scale_bounds::MIN..=scale_bounds::MAX)
            .contains(&factor)
            .then_some(Self(factor))
    }

    /// Returns the multiplier.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this is the 1x scale, which carries no file name suffix.
    #[must_use]
    pub fn is_base(self) -> bool {
        self.0 == 1
    }
}

/// Formats as `2x`.
impl fmt::Display for DisplayScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Ratio between a requested canvas size and the artwork's reference size.
///
/// Every coordinate, radius and stroke width of an artwork is multiplied by
/// this factor so proportions stay identical across output sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates the factor for drawing `size` pixels from a `reference` design.
    ///
    /// A zero reference is treated as 1 so the factor stays finite.
    #[must_use]
    pub fn for_size(size: u32, reference: u32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let factor = size as f32 / reference.max(1) as f32;
        Self(factor)
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scales a design-space length.
    #[must_use]
    pub fn apply(self, units: f32) -> f32 {
        units * self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
