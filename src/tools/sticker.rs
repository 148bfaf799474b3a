use egui::{Pos2, Ui};
use serde::{Deserialize, Serialize};

use crate::drawable::{Drawable, Sticker};
use crate::renderer::ToolPreview;
use crate::sketch::Sketch;
use crate::tools::Tool;

/// Built-in sticker palette.
pub const STICKER_PALETTE: [&str; 3] = ["🤣", "🤷‍♂️", "👀"];

/// Stickers are placed at a fixed size; the size is baked into the drawable
/// at creation, not recomputed from tool state.
pub const STICKER_FONT_SIZE: f32 = 24.0;

/// Places emoji stickers. Dragging before release slides the sticker into
/// position; the anchor is replaced, not accumulated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StickerTool {
    pub glyph: String,
    pub font_size: f32,
    /// Scratch text for the custom-sticker field.
    custom: String,
}

impl Default for StickerTool {
    fn default() -> Self {
        Self {
            glyph: STICKER_PALETTE[0].to_owned(),
            font_size: STICKER_FONT_SIZE,
            custom: String::new(),
        }
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "Sticker"
    }

    fn on_pointer_down(&mut self, pos: Pos2, sketch: &mut Sketch) {
        sketch.append(Drawable::Sticker(Sticker::new(
            pos,
            self.glyph.clone(),
            self.font_size,
        )));
    }

    fn on_pointer_move(&mut self, pos: Pos2, primary_held: bool, sketch: &mut Sketch) {
        if primary_held {
            sketch.grow_active(pos);
        }
    }

    fn on_pointer_up(&mut self, _pos: Pos2, sketch: &mut Sketch) {
        sketch.seal();
    }

    fn preview(&self, pos: Pos2) -> ToolPreview {
        ToolPreview::Sticker {
            pos,
            glyph: self.glyph.clone(),
            font_size: self.font_size,
        }
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for glyph in STICKER_PALETTE {
                if ui.selectable_label(self.glyph == glyph, glyph).clicked() {
                    self.glyph = glyph.to_owned();
                }
            }
        });
        ui.horizontal(|ui| {
            ui.label("Custom:");
            ui.add(egui::TextEdit::singleline(&mut self.custom).desired_width(60.0));
            if ui.button("Use").clicked() && !self.custom.is_empty() {
                self.glyph = self.custom.clone();
            }
        });
    }
}
