use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A free-hand marker stroke: a connected polyline with a fixed width and
/// color.
///
/// Non-empty by construction: a stroke starts at the point where the pointer
/// went down and only ever grows.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    /// Append a point while the stroke is being drawn.
    pub fn grow(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// A single-point stroke renders as a filled dot, so a click without a
    /// drag still leaves a visible, undoable mark.
    pub fn render(&self, surface: &mut dyn Surface) {
        if let [only] = self.points.as_slice() {
            surface.fill_circle(*only, self.thickness / 2.0, self.color);
        } else {
            surface.stroke_polyline(&self.points, self.thickness, self.color);
        }
    }
}

/// An emoji (or any short text) placed on the canvas. The anchor is replaced
/// wholesale while the sticker is being dragged into place; the font size is
/// fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    anchor: Pos2,
    glyph: String,
    font_size: f32,
}

impl Sticker {
    pub fn new(anchor: Pos2, glyph: impl Into<String>, font_size: f32) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
            font_size,
        }
    }

    /// Reposition the sticker while it is being placed.
    pub fn move_to(&mut self, anchor: Pos2) {
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(&self.glyph, self.anchor, self.font_size);
    }
}

/// One undoable unit of the picture.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}
