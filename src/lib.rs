// SPDX-License-Identifier: MPL-2.0
//! `icon_forge` builds macOS application iconsets.
//!
//! It either resamples a user-supplied source image or renders one of its
//! procedural artworks at every size of an [`IconSet`](domain::icon::IconSet),
//! writes the PNGs and their `Contents.json` manifest, and saves a loose
//! preview image.

#![doc(html_root_url = "https://docs.rs/icon_forge/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod logging;
pub mod media;
pub mod render;

#[cfg(test)]
pub mod test_utils;
