// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Canvas**: Design reference size and preview size
//! - **Paths**: Default input and output locations
//! - **Manifest**: Fixed values written to `Contents.json`
//! - **Texture**: Seed of the decorative speckle texture

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Side length (in pixels) all artwork coordinates are authored against.
pub const REFERENCE_SIZE: u32 = 512;

/// Side length of the loose preview image.
pub const DEFAULT_PREVIEW_SIZE: u32 = 512;

/// Smallest allowed preview size.
pub const MIN_PREVIEW_SIZE: u32 = 16;

/// Largest allowed preview size.
pub const MAX_PREVIEW_SIZE: u32 = 2048;

// ==========================================================================
// Path Defaults
// ==========================================================================

/// Directory the iconset is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "AppIcon.appiconset";

/// Source image loaded when no path is given on the command line.
pub const DEFAULT_SOURCE_IMAGE: &str = "icon_source.png";

/// Preview image written next to the iconset directory.
pub const DEFAULT_PREVIEW_PATH: &str = "icon_preview.png";

/// Settings file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "icon_forge.toml";

/// Name of the manifest file inside the iconset directory.
pub const MANIFEST_FILE: &str = "Contents.json";

// ==========================================================================
// Manifest Defaults
// ==========================================================================

/// Idiom tag for every image of a macOS iconset.
pub const MANIFEST_IDIOM: &str = "mac";

/// Author tag of the manifest's `info` block.
pub const MANIFEST_AUTHOR: &str = "xcode";

/// Format version of the manifest's `info` block.
pub const MANIFEST_VERSION: u32 = 1;

// ==========================================================================
// Texture Defaults
// ==========================================================================

/// Seed of the speckle texture drawn by the `retro` style.
///
/// Changing it changes the exported pixels of that style.
pub const TEXTURE_SEED: u64 = 0xC001_C1EA;

/// Number of speckle dots at the reference size.
pub const TEXTURE_DOT_COUNT: usize = 140;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(REFERENCE_SIZE > 0);
    assert!(MIN_PREVIEW_SIZE > 0);
    assert!(MAX_PREVIEW_SIZE >= MIN_PREVIEW_SIZE);
    assert!(DEFAULT_PREVIEW_SIZE >= MIN_PREVIEW_SIZE);
    assert!(DEFAULT_PREVIEW_SIZE <= MAX_PREVIEW_SIZE);
    assert!(MANIFEST_VERSION > 0);
    assert!(TEXTURE_DOT_COUNT > 0);
};
