// SPDX-License-Identifier: MPL-2.0
//! The "retro" style: a beige compact computer with a happy phosphor face,
//! a spray bottle and a sponge, on a speckled background.
//!
//! The speckles are placed by a PRNG seeded with [`TEXTURE_SEED`], so the
//! output is reproducible run to run.

use super::canvas::{Bounds, Brush, Canvas, Rgba};
use super::cool_mac::{draw_bubbles, draw_sparkles};
use super::text::BadgeText;
use super::{Artwork, Layer};
use crate::config::defaults::{REFERENCE_SIZE, TEXTURE_DOT_COUNT, TEXTURE_SEED};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const BODY: Bounds = Bounds {
    left: 150.0,
    top: 80.0,
    right: 362.0,
    bottom: 380.0,
};
const SCREEN: Bounds = Bounds {
    left: 175.0,
    top: 105.0,
    right: 337.0,
    bottom: 265.0,
};
const PHOSPHOR: Rgba = [150, 240, 170, 255];

const SPARKLES: [(f32, f32); 4] = [(80.0, 110.0), (440.0, 90.0), (460.0, 260.0), (120.0, 440.0)];
const BUBBLES: [(f32, f32, f32); 4] = [
    (190.0, 60.0, 10.0),
    (415.0, 190.0, 16.0),
    (60.0, 200.0, 13.0),
    (300.0, 455.0, 18.0),
];

#[derive(Debug, Clone, Copy)]
pub struct Retro {
    seed: u64,
}

impl Retro {
    /// Uses a custom texture seed instead of [`TEXTURE_SEED`].
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator for the speckle texture; its stream is fixed for a given seed.
    fn texture_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    fn speckles(&self, canvas: &mut Canvas) {
        let mut rng = self.texture_rng();
        let extent = REFERENCE_SIZE as f32;
        for _ in 0..TEXTURE_DOT_COUNT {
            let x = rng.gen_range(0.0..extent);
            let y = rng.gen_range(0.0..extent);
            let r = rng.gen_range(1.0..3.0);
            let alpha = rng.gen_range(20..70);
            canvas.fill_dot(x, y, r, [255, 255, 255, alpha]);
        }
    }
}

impl Default for Retro {
    fn default() -> Self {
        Self { seed: TEXTURE_SEED }
    }
}

impl Artwork for Retro {
    fn name(&self) -> &'static str {
        "retro"
    }

    fn draw_layer(&self, layer: Layer, canvas: &mut Canvas, _badge: &BadgeText) {
        match layer {
            Layer::Background => {
                canvas.fill_background([40, 110, 120, 255], [20, 60, 80, 255]);
                self.speckles(canvas);
            }
            Layer::Body => body(canvas),
            Layer::Screen => {
                canvas.fill_rounded_rect(
                    SCREEN,
                    14.0,
                    Brush::Vertical {
                        top: [50, 70, 60, 255],
                        bottom: [30, 50, 45, 255],
                    },
                );
                canvas.stroke_rounded_rect(SCREEN, 14.0, [120, 112, 95, 255], 3.0);
            }
            Layer::Face => face(canvas),
            Layer::Accessories => {
                spray_bottle(canvas);
                sponge(canvas);
            }
            Layer::Overlays => {
                draw_sparkles(canvas, &SPARKLES, 14.0, [255, 240, 150, 255]);
                draw_bubbles(canvas, &BUBBLES);
            }
        }
    }
}

fn body(canvas: &mut Canvas) {
    canvas.fill_rounded_rect(BODY.offset(10.0, 10.0), 24.0, Brush::Solid([0, 0, 0, 70]));
    canvas.fill_rounded_rect(
        Bounds::new(170.0, 370.0, 342.0, 396.0),
        6.0,
        Brush::Solid([190, 182, 160, 255]),
    );
    canvas.fill_rounded_rect(
        BODY,
        24.0,
        Brush::Vertical {
            top: [235, 228, 205, 255],
            bottom: [205, 196, 170, 255],
        },
    );
    canvas.stroke_rounded_rect(BODY, 24.0, [170, 160, 140, 255], 3.0);

    // Floppy slot and badge stripe.
    canvas.fill_rounded_rect(
        Bounds::new(270.0, 318.0, 340.0, 328.0),
        4.0,
        Brush::Solid([60, 55, 50, 255]),
    );
    canvas.fill_rounded_rect(
        Bounds::new(176.0, 318.0, 206.0, 328.0),
        3.0,
        Brush::Solid([120, 190, 120, 255]),
    );
}

fn face(canvas: &mut Canvas) {
    for eye_x in [222.0, 290.0] {
        canvas.fill_ellipse(Bounds::centered(eye_x, 170.0, 12.0, 20.0), Brush::Solid(PHOSPHOR));
        canvas.fill_dot(eye_x - 4.0, 162.0, 4.0, [235, 255, 240, 255]);
    }
    canvas.stroke_arc(Bounds::new(216.0, 190.0, 296.0, 236.0), 20.0, 160.0, PHOSPHOR, 6.0);
    canvas.fill_dot(200.0, 212.0, 8.0, [255, 140, 160, 90]);
    canvas.fill_dot(312.0, 212.0, 8.0, [255, 140, 160, 90]);
}

fn spray_bottle(canvas: &mut Canvas) {
    let bottle = Bounds::new(60.0, 280.0, 115.0, 390.0);
    canvas.fill_rounded_rect(
        bottle,
        14.0,
        Brush::Vertical {
            top: [110, 190, 255, 255],
            bottom: [60, 140, 230, 255],
        },
    );
    canvas.fill_rounded_rect(
        Bounds::new(72.0, 250.0, 104.0, 282.0),
        6.0,
        Brush::Solid([245, 245, 245, 255]),
    );
    canvas.fill_polygon(
        &[(104.0, 254.0), (132.0, 258.0), (132.0, 268.0), (104.0, 268.0)],
        [245, 245, 245, 255],
    );
    canvas.round_line((96.0, 282.0), (84.0, 308.0), [230, 230, 230, 255], 6.0);
    for (i, (dx, dy)) in [(10.0, -8.0), (18.0, 0.0), (10.0, 8.0), (26.0, -12.0), (28.0, 10.0)]
        .into_iter()
        .enumerate()
    {
        let r = if i % 2 == 0 { 3.0 } else { 2.0 };
        canvas.fill_dot(140.0 + dx, 263.0 + dy, r, [220, 240, 255, 180]);
    }
}

fn sponge(canvas: &mut Canvas) {
    canvas.fill_rounded_rect(
        Bounds::new(382.0, 318.0, 462.0, 334.0),
        4.0,
        Brush::Solid([90, 180, 90, 255]),
    );
    canvas.fill_rounded_rect(
        Bounds::new(382.0, 330.0, 462.0, 366.0),
        8.0,
        Brush::Solid([255, 220, 90, 255]),
    );
    for (x, y) in [(398.0, 342.0), (420.0, 352.0), (444.0, 344.0), (432.0, 358.0)] {
        canvas.fill_dot(x, y, 3.0, [225, 185, 60, 255]);
    }
}
