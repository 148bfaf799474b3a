use egui::{Color32, Pos2};

use crate::sketch::Sketch;
use crate::surface::Surface;

/// Transient indicator of where the active tool would act. Never enters the
/// command log.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPreview {
    /// The dot the marker would leave.
    Marker {
        pos: Pos2,
        thickness: f32,
        color: Color32,
    },
    /// The glyph the sticker tool would place.
    Sticker {
        pos: Pos2,
        glyph: String,
        font_size: f32,
    },
}

impl ToolPreview {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Self::Marker {
                pos,
                thickness,
                color,
            } => surface.fill_circle(*pos, thickness / 2.0, *color),
            Self::Sticker {
                pos,
                glyph,
                font_size,
            } => surface.draw_glyph(glyph, *pos, *font_size),
        }
    }
}

/// Replays the command log onto a surface, tool preview on top.
pub struct Renderer {
    preview: Option<ToolPreview>,
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            preview: None,
            background: Color32::WHITE,
        }
    }

    pub fn set_preview(&mut self, preview: Option<ToolPreview>) {
        self.preview = preview;
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// Clear the surface and replay every committed drawable in history
    /// order (painter's algorithm), then draw the preview over the picture.
    pub fn render(&self, sketch: &Sketch, surface: &mut dyn Surface) {
        surface.clear(self.background);
        for drawable in sketch.history() {
            drawable.render(surface);
        }
        if let Some(preview) = &self.preview {
            preview.draw(surface);
        }
    }
}
