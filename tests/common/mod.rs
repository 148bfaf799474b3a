#![allow(dead_code)] // each test binary uses a different subset of this module

use egui::{Color32, Pos2};
use sticker_sketchpad::{Drawable, Sticker, Stroke, Surface};

/// Records every primitive the render loop invokes, in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color32),
    Polyline {
        points: Vec<Pos2>,
        thickness: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Glyph {
        glyph: String,
        anchor: Pos2,
        font_size: f32,
    },
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_glyph(&mut self, glyph: &str, anchor: Pos2, font_size: f32) {
        self.ops.push(DrawOp::Glyph {
            glyph: glyph.to_owned(),
            anchor,
            font_size,
        });
    }
}

impl RecordingSurface {
    /// Everything drawn after the background clear.
    pub fn drawn(&self) -> &[DrawOp] {
        match self.ops.first() {
            Some(DrawOp::Clear(_)) => &self.ops[1..],
            _ => &self.ops,
        }
    }
}

pub fn stroke(points: &[(f32, f32)], thickness: f32, color: Color32) -> Drawable {
    let mut iter = points.iter();
    let &(x, y) = iter.next().expect("stroke needs at least one point");
    let mut stroke = Stroke::new(Pos2::new(x, y), thickness, color);
    for &(x, y) in iter {
        stroke.grow(Pos2::new(x, y));
    }
    Drawable::Stroke(stroke)
}

pub fn sticker(x: f32, y: f32, glyph: &str) -> Drawable {
    Drawable::Sticker(Sticker::new(Pos2::new(x, y), glyph, 24.0))
}
