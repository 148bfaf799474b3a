use egui::{Align2, Color32, FontId, Painter, Pos2, Rect};

/// The drawing primitives the replay loop needs, behind a seam so the core
/// stays agnostic to the concrete graphics API. Positions are canvas-local.
pub trait Surface {
    /// Wipe the whole surface to a background color.
    fn clear(&mut self, color: Color32);

    /// Stroke one connected polyline with a fixed width and color.
    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Fill a circle (degenerate single-point strokes, marker preview dot).
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw a sticker glyph centered on its anchor point.
    fn draw_glyph(&mut self, glyph: &str, anchor: Pos2, font_size: f32);
}

/// `Surface` over an `egui::Painter`, translating canvas-local coordinates
/// into screen space. The painter is expected to be clipped to the canvas
/// rect by the caller.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self { painter, canvas }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas, 0.0, color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(screen, egui::Stroke::new(thickness, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn draw_glyph(&mut self, glyph: &str, anchor: Pos2, font_size: f32) {
        self.painter.text(
            self.to_screen(anchor),
            Align2::CENTER_CENTER,
            glyph,
            FontId::monospace(font_size),
            Color32::BLACK,
        );
    }
}
