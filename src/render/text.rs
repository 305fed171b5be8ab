// SPDX-License-Identifier: MPL-2.0
//! Optional badge text.
//!
//! Text needs a font file, which may not exist on the machine running the
//! export. [`BadgeText::locate`] turns that lookup into a value: either a
//! loaded font or [`BadgeText::Unavailable`], whose drawing is a no-op.
//! Text is laid out and rasterized by `resvg` with a private font database.

use super::canvas::{Canvas, Rgba};
use resvg::usvg;
use std::path::Path;
use std::sync::Arc;

/// Font files tried when no font is configured, in order.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Font capability for badge labels.
#[derive(Clone)]
pub enum BadgeText {
    Font {
        fontdb: Arc<usvg::fontdb::Database>,
        family: String,
    },
    Unavailable,
}

impl BadgeText {
    /// Loads the first candidate that is a usable font file.
    pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Self {
        for candidate in candidates {
            if let Some(text) = Self::from_font_file(candidate.as_ref()) {
                return text;
            }
        }
        tracing::warn!("no badge font found, badge text will be skipped");
        Self::Unavailable
    }

    /// Loads a single font file, `None` if it is missing or has no usable face.
    pub fn from_font_file(path: &Path) -> Option<Self> {
        let mut db = usvg::fontdb::Database::new();
        if let Err(err) = db.load_font_file(path) {
            tracing::debug!("font {} not usable: {}", path.display(), err);
            return None;
        }
        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?;
        tracing::debug!("badge font: {} ({})", family, path.display());
        Some(Self::Font {
            fontdb: Arc::new(db),
            family,
        })
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Font { .. })
    }

    /// Draws `text` centered on `cx`, `cy` (design units) in bold.
    ///
    /// Does nothing without a font, or when the text would be smaller than a pixel.
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas,
        text: &str,
        (cx, cy): (f32, f32),
        font_size: f32,
        color: Rgba,
    ) {
        let Self::Font { fontdb, family } = self else {
            return;
        };
        let scale = canvas.scale();
        let px = scale.apply(font_size);
        if px < 1.0 {
            return;
        }

        let size = canvas.size();
        let [r, g, b, a] = color;
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><text x="{x}" y="{y}" font-family="{family}" font-size="{px}" font-weight="bold" fill="rgb({r},{g},{b})" fill-opacity="{opacity}" text-anchor="middle" dominant-baseline="central">{text}</text></svg>"#,
            x = scale.apply(cx),
            y = scale.apply(cy),
            family = escape_xml(family),
            opacity = f32::from(a) / 255.0,
            text = escape_xml(text),
        );

        let opt = usvg::Options {
            fontdb: Arc::clone(fontdb),
            ..usvg::Options::default()
        };
        let tree = match usvg::Tree::from_str(&svg, &opt) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::warn!("skipping badge text: {}", err);
                return;
            }
        };
        resvg::render(
            &tree,
            tiny_skia::Transform::identity(),
            &mut canvas.pixmap_mut().as_mut(),
        );
    }
}

impl std::fmt::Debug for BadgeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Font { family, .. } => f.debug_struct("Font").field("family", family).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
