use egui::{Pos2, Ui};
use serde::{Deserialize, Serialize};

use crate::renderer::ToolPreview;
use crate::sketch::Sketch;

/// Interface every drawing tool implements. Pointer gestures mutate the
/// sketch directly; `preview` reports the transient hover indicator; `ui`
/// shows the tool's settings in the side panel.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// Pointer went down on the canvas: begin a new drawable.
    fn on_pointer_down(&mut self, pos: Pos2, sketch: &mut Sketch);

    /// Pointer moved over the canvas. Grows the active drawable only while
    /// the primary button is held.
    fn on_pointer_move(&mut self, pos: Pos2, primary_held: bool, sketch: &mut Sketch);

    /// Pointer released: the active drawable is complete.
    fn on_pointer_up(&mut self, pos: Pos2, sketch: &mut Sketch);

    /// The indicator to draw at the hover position.
    fn preview(&self, pos: Pos2) -> ToolPreview;

    /// Tool-specific settings controls.
    fn ui(&mut self, ui: &mut Ui);
}

// Tool implementations
mod marker;
pub use marker::{MarkerTool, THICKNESS_THICK, THICKNESS_THIN};

mod sticker;
pub use sticker::{StickerTool, STICKER_FONT_SIZE, STICKER_PALETTE};

/// Which tool is currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Marker,
    Sticker,
}

/// The full tool set. Both tools keep their settings while the other is
/// active, and the settings survive restarts.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    pub marker: MarkerTool,
    pub sticker: StickerTool,
    pub active: ToolKind,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            marker: MarkerTool::default(),
            sticker: StickerTool::default(),
            active: ToolKind::Marker,
        }
    }
}

impl Tools {
    pub fn active_tool(&self) -> &dyn Tool {
        match self.active {
            ToolKind::Marker => &self.marker,
            ToolKind::Sticker => &self.sticker,
        }
    }

    pub fn active_tool_mut(&mut self) -> &mut dyn Tool {
        match self.active {
            ToolKind::Marker => &mut self.marker,
            ToolKind::Sticker => &mut self.sticker,
        }
    }
}
