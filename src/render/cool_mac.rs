// SPDX-License-Identifier: MPL-2.0
//! The "cool-mac" style: a silver desktop computer wearing sunglasses,
//! mopping with a gloved arm, surrounded by sparkles and soap bubbles.

use super::canvas::{Bounds, Brush, Canvas, Rgba};
use super::text::BadgeText;
use super::{Artwork, Layer};
use std::f32::consts::PI;

const BODY: Bounds = Bounds {
    left: 140.0,
    top: 100.0,
    right: 372.0,
    bottom: 340.0,
};
const BODY_RADIUS: f32 = 30.0;
const SCREEN: Bounds = Bounds {
    left: 160.0,
    top: 120.0,
    right: 352.0,
    bottom: 280.0,
};

const GLASSES_Y: f32 = 180.0;
const LENS_WIDTH: f32 = 60.0;
const LENS_HEIGHT: f32 = 35.0;
const LEFT_LENS_X: f32 = 185.0;
const RIGHT_LENS_X: f32 = 267.0;

const ARM_START: (f32, f32) = (352.0, 200.0);
const HAND: (f32, f32) = (427.0, 255.0);
const MOP: (f32, f32) = (487.0, 355.0);
const MOP_COLORS: [Rgba; 3] = [
    [100, 180, 255, 255],
    [80, 160, 240, 255],
    [120, 200, 255, 255],
];

const SPARKLES: [(f32, f32); 6] = [
    (90.0, 150.0),
    (420.0, 100.0),
    (450.0, 300.0),
    (70.0, 350.0),
    (200.0, 420.0),
    (380.0, 430.0),
];
const SPARKLE_SIZE: f32 = 12.0;

/// (x, y, radius)
const BUBBLES: [(f32, f32, f32); 5] = [
    (100.0, 250.0, 18.0),
    (60.0, 320.0, 12.0),
    (430.0, 200.0, 15.0),
    (400.0, 380.0, 20.0),
    (320.0, 450.0, 14.0),
];

const BADGE: Bounds = Bounds {
    left: 380.0,
    top: 50.0,
    right: 480.0,
    bottom: 85.0,
};
const BADGE_LABEL: &str = "COOL";

const WHITE: Rgba = [255, 255, 255, 255];

#[derive(Debug, Clone, Copy, Default)]
pub struct CoolMac;

impl Artwork for CoolMac {
    fn name(&self) -> &'static str {
        "cool-mac"
    }

    fn draw_layer(&self, layer: Layer, canvas: &mut Canvas, badge: &BadgeText) {
        match layer {
            Layer::Background => background(canvas),
            Layer::Body => body(canvas),
            Layer::Screen => screen(canvas),
            Layer::Face => face(canvas),
            Layer::Accessories => mop_arm(canvas),
            Layer::Overlays => {
                draw_sparkles(canvas, &SPARKLES, SPARKLE_SIZE, [255, 255, 100, 255]);
                draw_bubbles(canvas, &BUBBLES);
                canvas.fill_rounded_rect(BADGE, 12.0, Brush::Solid([233, 69, 96, 255]));
                badge.draw_centered(canvas, BADGE_LABEL, BADGE.center(), 18.0, WHITE);
            }
        }
    }
}

fn background(canvas: &mut Canvas) {
    canvas.fill_background([25, 25, 60, 255], [40, 35, 100, 255]);
    canvas.fill_glow(256.0, 230.4, 180.0, [100, 200, 255, 110]);
}

fn body(canvas: &mut Canvas) {
    canvas.fill_rounded_rect(BODY.offset(8.0, 8.0), BODY_RADIUS, Brush::Solid([0, 0, 0, 80]));

    // Stand sits under the body so the neck tucks behind it.
    let (center, stand_top, stand_bottom) = (256.0, BODY.bottom, BODY.bottom + 40.0);
    canvas.fill_polygon(
        &[
            (center - 15.0, stand_top),
            (center + 15.0, stand_top),
            (center + 25.0, stand_bottom - 15.0),
            (center - 25.0, stand_bottom - 15.0),
        ],
        [170, 170, 180, 255],
    );
    let base = Bounds::new(center - 60.0, stand_bottom - 20.0, center + 60.0, stand_bottom + 10.0);
    canvas.fill_ellipse(base, Brush::Solid([160, 160, 170, 255]));
    canvas.stroke_ellipse(base, [140, 140, 150, 255], 2.0);

    canvas.fill_rounded_rect(
        BODY,
        BODY_RADIUS,
        Brush::Vertical {
            top: [220, 220, 230, 255],
            bottom: [180, 180, 190, 255],
        },
    );
    canvas.stroke_rounded_rect(BODY, BODY_RADIUS, [180, 180, 190, 255], 3.0);
}

fn screen(canvas: &mut Canvas) {
    canvas.fill_rounded_rect(SCREEN, 10.0, Brush::Solid([30, 30, 40, 255]));
    let tint = Bounds::new(SCREEN.left + 5.0, SCREEN.top, SCREEN.right - 5.0, SCREEN.bottom);
    canvas.fill_rounded_rect(
        tint,
        10.0,
        Brush::Vertical {
            top: [25, 35, 55, 40],
            bottom: [35, 50, 75, 40],
        },
    );
}

fn face(canvas: &mut Canvas) {
    for lens_x in [LEFT_LENS_X, RIGHT_LENS_X] {
        let lens = Bounds::new(lens_x, GLASSES_Y, lens_x + LENS_WIDTH, GLASSES_Y + LENS_HEIGHT);
        canvas.fill_rounded_rect(lens, 8.0, Brush::Solid([20, 20, 20, 255]));
        canvas.stroke_rounded_rect(lens, 8.0, [60, 60, 60, 255], 2.0);
        let shine = Bounds::new(lens_x + 5.0, GLASSES_Y + 5.0, lens_x + 25.0, GLASSES_Y + 20.0);
        canvas.stroke_arc(shine, 200.0, 340.0, [255, 255, 255, 150], 2.0);
    }

    let bridge_y = GLASSES_Y + LENS_HEIGHT / 2.0;
    canvas.line(
        (LEFT_LENS_X + LENS_WIDTH, bridge_y),
        (RIGHT_LENS_X, bridge_y),
        [60, 60, 60, 255],
        4.0,
    );

    let (smile_x, smile_y) = (SCREEN.center().0, GLASSES_Y + 70.0);
    canvas.stroke_arc(
        Bounds::new(smile_x - 40.0, smile_y - 20.0, smile_x + 40.0, smile_y + 30.0),
        10.0,
        170.0,
        [100, 220, 100, 255],
        6.0,
    );
}

fn mop_arm(canvas: &mut Canvas) {
    canvas.line(ARM_START, (ARM_START.0 + 80.0, ARM_START.1 + 60.0), [200, 200, 210, 255], 20.0);

    let glove = Bounds::centered(HAND.0, HAND.1, 15.0, 15.0);
    canvas.fill_ellipse(glove, Brush::Solid([255, 230, 100, 255]));
    canvas.stroke_ellipse(glove, [230, 200, 50, 255], 2.0);

    canvas.line(HAND, MOP, [139, 90, 43, 255], 8.0);

    for i in 0..12u8 {
        let angle = f32::from(i) / 12.0 * PI + PI / 2.0;
        let length = 35.0 + f32::from(i % 3) * 8.0;
        let end = (MOP.0 + angle.cos() * length, MOP.1 + angle.sin() * length * 0.6);
        canvas.line(MOP, end, MOP_COLORS[usize::from(i % 3)], 6.0);
    }
}

/// Four-point stars with a white center.
pub(super) fn draw_sparkles(canvas: &mut Canvas, positions: &[(f32, f32)], size: f32, color: Rgba) {
    let waist = size / 4.0;
    for &(x, y) in positions {
        canvas.fill_polygon(
            &[(x, y - size), (x + waist, y), (x, y + size), (x - waist, y)],
            color,
        );
        canvas.fill_polygon(
            &[(x - size, y), (x, y + waist), (x + size, y), (x, y - waist)],
            color,
        );
        canvas.fill_dot(x, y, 4.0, WHITE);
    }
}

/// Translucent soap bubbles with a highlight arc.
pub(super) fn draw_bubbles(canvas: &mut Canvas, bubbles: &[(f32, f32, f32)]) {
    for &(x, y, r) in bubbles {
        let bubble = Bounds::centered(x, y, r, r);
        canvas.fill_ellipse(bubble, Brush::Solid([200, 230, 255, 60]));
        canvas.stroke_ellipse(bubble, [255, 255, 255, 120], 2.0);
        let shine = Bounds::new(x - r * 0.6, y - r * 0.6, x + r * 0.2, y + r * 0.2);
        canvas.stroke_arc(shine, 200.0, 320.0, [255, 255, 255, 200], 2.0);
    }
}
