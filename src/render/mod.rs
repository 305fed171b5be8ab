// SPDX-License-Identifier: MPL-2.0
//! Procedural icon rendering.
//!
//! An [`Artwork`] draws itself onto a [`Canvas`] one layer at a time.
//! [`render`] always runs the layers in the same order (background, body,
//! screen, face, accessories, overlays), so later layers occlude earlier ones
//! regardless of the style.
//!
//! # Examples
//!
//! ```no_run
//! use icon_forge::render::{self, ArtworkStyle, BadgeText};
//!
//! let badge = BadgeText::locate(render::text::DEFAULT_FONT_CANDIDATES);
//! let artwork = ArtworkStyle::CoolMac.artwork();
//! let image = render::render(artwork.as_ref(), 256, &badge).unwrap();
//! assert_eq!(image.dimensions(), (256, 256));
//! ```

pub mod canvas;
pub mod cool_mac;
pub mod retro;
pub mod text;

pub use canvas::{Bounds, Brush, Canvas, Rgba};
pub use text::BadgeText;

use crate::error::{Error, Result};
use image_rs::RgbaImage;
use std::fmt;
use std::str::FromStr;

/// Drawing layers, in composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Body,
    Screen,
    Face,
    Accessories,
    Overlays,
}

impl Layer {
    /// Every layer, bottom first.
    pub const ORDER: [Layer; 6] = [
        Layer::Background,
        Layer::Body,
        Layer::Screen,
        Layer::Face,
        Layer::Accessories,
        Layer::Overlays,
    ];
}

/// A pluggable icon style.
///
/// Coordinates are design units of a 512×512 square; the canvas scales them.
pub trait Artwork {
    fn name(&self) -> &'static str;

    /// Draws one layer. Only the overlay layer receives badge text.
    fn draw_layer(&self, layer: Layer, canvas: &mut Canvas, badge: &BadgeText);
}

/// Renders `artwork` into a new `size`×`size` image.
pub fn render(artwork: &dyn Artwork, size: u32, badge: &BadgeText) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size)?;
    for layer in Layer::ORDER {
        artwork.draw_layer(layer, &mut canvas, badge);
    }
    canvas.into_rgba_image()
}

/// Built-in artwork styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtworkStyle {
    /// Silver computer in sunglasses mopping, with sparkles, bubbles and a badge.
    #[default]
    CoolMac,
    /// Beige classic computer with a spray bottle over a speckled background.
    Retro,
}

impl ArtworkStyle {
    /// Returns all styles.
    #[must_use]
    pub fn all() -> &'static [ArtworkStyle] {
        &[ArtworkStyle::CoolMac, ArtworkStyle::Retro]
    }

    /// Name used on the command line and in settings files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ArtworkStyle::CoolMac => "cool-mac",
            ArtworkStyle::Retro => "retro",
        }
    }

    #[must_use]
    pub fn artwork(self) -> Box<dyn Artwork> {
        match self {
            ArtworkStyle::CoolMac => Box::new(cool_mac::CoolMac),
            ArtworkStyle::Retro => Box::new(retro::Retro::default()),
        }
    }
}

impl fmt::Display for ArtworkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtworkStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(|style| style.name()).collect();
                Error::Config(format!(
                    "unknown style '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        seen: RefCell<Vec<Layer>>,
    }

    impl Artwork for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn draw_layer(&self, layer: Layer, _canvas: &mut Canvas, _badge: &BadgeText) {
            self.seen.borrow_mut().push(layer);
        }
    }

    #[test]
    fn render_runs_layers_bottom_first() {
        let recorder = Recorder {
            seen: RefCell::new(Vec::new()),
        };
        render(&recorder, 8, &BadgeText::Unavailable).unwrap();
        assert_eq!(recorder.seen.into_inner(), Layer::ORDER.to_vec());
    }

    #[test]
    fn render_produces_requested_size() {
        for &style in ArtworkStyle::all() {
            let image = render(style.artwork().as_ref(), 48, &BadgeText::Unavailable).unwrap();
            assert_eq!(image.dimensions(), (48, 48));
        }
    }

    #[test]
    fn render_rejects_zero_size() {
        let artwork = ArtworkStyle::CoolMac.artwork();
        assert!(render(artwork.as_ref(), 0, &BadgeText::Unavailable).is_err());
    }

    #[test]
    fn style_parses_from_name() {
        assert_eq!("cool-mac".parse::<ArtworkStyle>().unwrap(), ArtworkStyle::CoolMac);
        assert_eq!(" Retro ".parse::<ArtworkStyle>().unwrap(), ArtworkStyle::Retro);
        let err = "plaid".parse::<ArtworkStyle>().unwrap_err();
        assert!(err.to_string().contains("cool-mac, retro"));
    }

    #[test]
    fn style_names_round_trip_through_display() {
        for &style in ArtworkStyle::all() {
            assert_eq!(style.to_string().parse::<ArtworkStyle>().unwrap(), style);
            assert_eq!(style.artwork().name(), style.name());
        }
    }
}
