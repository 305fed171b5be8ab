// SPDX-License-Identifier: MPL-2.0
//! Square drawing surface with coordinates in design units.
//!
//! Artwork is authored against a [`REFERENCE_SIZE`] pixel square. Every
//! primitive here takes design-unit coordinates and multiplies them by the
//! canvas [`ScaleFactor`], so the same drawing code produces the same picture
//! at 16 px and at 1024 px.

use crate::config::defaults::REFERENCE_SIZE;
use crate::domain::icon::ScaleFactor;
use crate::error::{Error, Result};
use image_rs::RgbaImage;
use tiny_skia::{
    Color, FillRule, GradientStop, LineCap, LinearGradient, Paint, Path, PathBuilder, Pixmap,
    Point, RadialGradient, Rect, Shader, SpreadMode, Stroke, Transform,
};

/// Straight (non-premultiplied) RGBA color.
pub type Rgba = [u8; 4];

/// Cubic Bézier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Axis-aligned box in design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of half-extents `rx`, `ry` around a center.
    #[must_use]
    pub fn centered(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self::new(cx - rx, cy - ry, cx + rx, cy + ry)
    }

    /// Same box moved by `dx`, `dy`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Same box shrunk by `margin` on every side.
    #[must_use]
    pub fn inset(self, margin: f32) -> Self {
        Self::new(
            self.left + margin,
            self.top + margin,
            self.right - margin,
            self.bottom - margin,
        )
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// How a closed shape is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brush {
    Solid(Rgba),
    /// Linear gradient from the top edge of the shape to its bottom edge.
    Vertical { top: Rgba, bottom: Rgba },
}

/// RGBA raster being drawn into, owned by a single render call.
pub struct Canvas {
    pixmap: Pixmap,
    scale: ScaleFactor,
}

impl Canvas {
    /// Allocates a transparent `size`×`size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size)
            .ok_or_else(|| Error::Render(format!("cannot allocate a {size}x{size} canvas")))?;
        Ok(Self {
            pixmap,
            scale: ScaleFactor::for_size(size, REFERENCE_SIZE),
        })
    }

    /// Side length in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    // ======================================================================
    // Fills
    // ======================================================================

    /// Fills the whole canvas with a top-to-bottom gradient.
    pub fn fill_background(&mut self, top: Rgba, bottom: Rgba) {
        let full = Bounds::new(0.0, 0.0, REFERENCE_SIZE as f32, REFERENCE_SIZE as f32);
        if let Some(rect) = self.rect(full) {
            let path = PathBuilder::from_rect(rect);
            self.fill(&path, full, Brush::Vertical { top, bottom });
        }
    }

    /// Radial glow fading from `color` at the center to transparent at `radius`.
    pub fn fill_glow(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let center = self.point(cx, cy);
        let radius = self.scale.apply(radius);
        let [r, g, b, _] = color;
        let stops = vec![
            GradientStop::new(0.0, to_color(color)),
            GradientStop::new(1.0, to_color([r, g, b, 0])),
        ];
        let Some(shader) =
            RadialGradient::new(center, center, radius, stops, SpreadMode::Pad, Transform::identity())
        else {
            return;
        };
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            let paint = paint_with(shader);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    pub fn fill_rounded_rect(&mut self, bounds: Bounds, radius: f32, brush: Brush) {
        if let Some(path) = self.rounded_rect_path(bounds, radius) {
            self.fill(&path, bounds, brush);
        }
    }

    pub fn fill_ellipse(&mut self, bounds: Bounds, brush: Brush) {
        if let Some(path) = self.rect(bounds).and_then(PathBuilder::from_oval) {
            self.fill(&path, bounds, brush);
        }
    }

    /// Filled circle of radius `r` around `cx`, `cy`.
    pub fn fill_dot(&mut self, cx: f32, cy: f32, r: f32, color: Rgba) {
        self.fill_ellipse(Bounds::centered(cx, cy, r, r), Brush::Solid(color));
    }

    /// Fills the closed polygon through `points`.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba) {
        let Some(path) = self.polyline_path(points, true) else {
            return;
        };
        let bounds = Bounds::new(0.0, 0.0, 0.0, 0.0);
        self.fill(&path, bounds, Brush::Solid(color));
    }

    // ======================================================================
    // Strokes
    // ======================================================================

    pub fn stroke_rounded_rect(&mut self, bounds: Bounds, radius: f32, color: Rgba, width: f32) {
        if let Some(path) = self.rounded_rect_path(bounds, radius) {
            self.stroke(&path, color, width, LineCap::Butt);
        }
    }

    pub fn stroke_ellipse(&mut self, bounds: Bounds, color: Rgba, width: f32) {
        if let Some(path) = self.rect(bounds).and_then(PathBuilder::from_oval) {
            self.stroke(&path, color, width, LineCap::Butt);
        }
    }

    /// Straight line of the given width.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32) {
        if let Some(path) = self.polyline_path(&[from, to], false) {
            self.stroke(&path, color, width, LineCap::Butt);
        }
    }

    /// Same as [`Canvas::line`] with rounded ends.
    pub fn round_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32) {
        if let Some(path) = self.polyline_path(&[from, to], false) {
            self.stroke(&path, color, width, LineCap::Round);
        }
    }

    /// Arc of the ellipse inscribed in `bounds`.
    ///
    /// Angles are in degrees, measured clockwise from 3 o'clock. An `end`
    /// smaller than `start` wraps around through 360.
    pub fn stroke_arc(&mut self, bounds: Bounds, start: f32, end: f32, color: Rgba, width: f32) {
        let points = arc_points(bounds, start, end);
        if let Some(path) = self.polyline_path(&points, false) {
            self.stroke(&path, color, width, LineCap::Butt);
        }
    }

    // ======================================================================
    // Output
    // ======================================================================

    /// Converts the canvas to straight-alpha RGBA.
    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| Error::Render("canvas buffer has an unexpected length".to_string()))
    }

    // ======================================================================
    // Helpers
    // ======================================================================

    fn point(&self, x: f32, y: f32) -> Point {
        Point::from_xy(self.scale.apply(x), self.scale.apply(y))
    }

    fn rect(&self, bounds: Bounds) -> Option<Rect> {
        Rect::from_ltrb(
            self.scale.apply(bounds.left),
            self.scale.apply(bounds.top),
            self.scale.apply(bounds.right),
            self.scale.apply(bounds.bottom),
        )
    }

    fn fill(&mut self, path: &Path, bounds: Bounds, brush: Brush) {
        let paint = match brush {
            Brush::Solid(color) => solid(color),
            Brush::Vertical { top, bottom } => {
                let start = self.point(bounds.left, bounds.top);
                let end = self.point(bounds.left, bounds.bottom);
                let stops = vec![
                    GradientStop::new(0.0, to_color(top)),
                    GradientStop::new(1.0, to_color(bottom)),
                ];
                match LinearGradient::new(start, end, stops, SpreadMode::Pad, Transform::identity())
                {
                    Some(shader) => paint_with(shader),
                    None => solid(top),
                }
            }
        };
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &Path, color: Rgba, width: f32, line_cap: LineCap) {
        let stroke = Stroke {
            width: self.scale.apply(width),
            line_cap,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &solid(color), &stroke, Transform::identity(), None);
    }

    fn polyline_path(&self, points: &[(f32, f32)], close: bool) -> Option<Path> {
        let (first, rest) = points.split_first()?;
        let mut pb = PathBuilder::new();
        let start = self.point(first.0, first.1);
        pb.move_to(start.x, start.y);
        for &(x, y) in rest {
            let p = self.point(x, y);
            pb.line_to(p.x, p.y);
        }
        if close {
            pb.close();
        }
        pb.finish()
    }

    fn rounded_rect_path(&self, bounds: Bounds, radius: f32) -> Option<Path> {
        let rect = self.rect(bounds)?;
        let r = self
            .scale
            .apply(radius)
            .clamp(0.0, rect.width().min(rect.height()) / 2.0);
        if r <= f32::EPSILON {
            return Some(PathBuilder::from_rect(rect));
        }
        let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let k = r * KAPPA;
        let mut pb = PathBuilder::new();
        pb.move_to(l + r, t);
        pb.line_to(rt - r, t);
        pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
        pb.line_to(rt, b - r);
        pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
        pb.line_to(l + r, b);
        pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
        pb.line_to(l, t + r);
        pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
        pb.close();
        pb.finish()
    }
}

/// Samples the arc of the ellipse inscribed in `bounds`, in design units.
fn arc_points(bounds: Bounds, start: f32, end: f32) -> Vec<(f32, f32)> {
    let mut end = end;
    while end < start {
        end += 360.0;
    }
    let (cx, cy) = bounds.center();
    let (rx, ry) = (bounds.width() / 2.0, bounds.height() / 2.0);
    let sweep = end - start;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = ((sweep / 4.0).ceil() as usize).max(2);
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = (start + sweep * i as f32 / steps as f32).to_radians();
            (cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect()
}

fn to_color([r, g, b, a]: Rgba) -> Color {
    Color::from_rgba8(r, g, b, a)
}

fn solid(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(color));
    paint.anti_alias = true;
    paint
}

fn paint_with(shader: Shader<'static>) -> Paint<'static> {
    Paint {
        shader,
        anti_alias: true,
        ..Paint::default()
    }
}
