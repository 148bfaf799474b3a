use egui::{Color32, Pos2, Ui};
use serde::{Deserialize, Serialize};

use crate::drawable::{Drawable, Stroke};
use crate::renderer::ToolPreview;
use crate::sketch::Sketch;
use crate::tools::Tool;

/// Preset widths behind the Thin/Thick buttons.
pub const THICKNESS_THIN: f32 = 2.0;
pub const THICKNESS_THICK: f32 = 6.0;

/// Free-hand marker. Owns the session's stroke settings; every stroke it
/// begins captures the settings current at pointer-down.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerTool {
    pub thickness: f32,
    pub color: Color32,
}

impl Default for MarkerTool {
    fn default() -> Self {
        Self {
            thickness: THICKNESS_THIN,
            color: Color32::BLACK,
        }
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn on_pointer_down(&mut self, pos: Pos2, sketch: &mut Sketch) {
        sketch.append(Drawable::Stroke(Stroke::new(pos, self.thickness, self.color)));
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
        ToolPreview::Marker {
            pos,
            thickness: self.thickness,
            color: self.color,
        }
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Color:");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut self.color,
                egui::color_picker::Alpha::Opaque,
            );
        });
        ui.horizontal(|ui| {
            ui.label("Thickness:");
            ui.add(egui::Slider::new(&mut self.thickness, 1.0..=24.0));
        });
    }
}
