use std::path::Path;

use crate::export;
use crate::input::{InputHandler, InputRouter};
use crate::renderer::Renderer;
use crate::sketch::Sketch;
use crate::surface::PainterSurface;
use crate::tools::{ToolKind, Tools, THICKNESS_THICK, THICKNESS_THIN};

const EXPORT_FILE: &str = "sketchpad.png";

/// We derive Deserialize/Serialize so tool settings survive restarts. The
/// picture itself deliberately does not (the sketch is skipped).
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchpadApp {
    tools: Tools,
    #[serde(skip)]
    sketch: Sketch,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    awaiting_screenshot: bool,
    #[serde(skip)]
    export_status: Option<String>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self {
            tools: Tools::default(),
            sketch: Sketch::new(),
            renderer: Renderer::new(),
            input: InputHandler::default(),
            awaiting_screenshot: false,
            export_status: None,
        }
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore tool settings from the previous session, if any.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Default::default()
    }

    fn tool_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Tools");
        ui.separator();

        let marker_active = self.tools.active == ToolKind::Marker;
        ui.horizontal(|ui| {
            if ui
                .selectable_label(
                    marker_active && self.tools.marker.thickness == THICKNESS_THIN,
                    "Thin",
                )
                .clicked()
            {
                self.tools.active = ToolKind::Marker;
                self.tools.marker.thickness = THICKNESS_THIN;
            }
            if ui
                .selectable_label(
                    marker_active && self.tools.marker.thickness == THICKNESS_THICK,
                    "Thick",
                )
                .clicked()
            {
                self.tools.active = ToolKind::Marker;
                self.tools.marker.thickness = THICKNESS_THICK;
            }
            if ui
                .selectable_label(self.tools.active == ToolKind::Sticker, "Sticker")
                .clicked()
            {
                self.tools.active = ToolKind::Sticker;
            }
        });

        ui.separator();
        self.tools.active_tool_mut().ui(ui);
        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.sketch.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.sketch.undo();
            }
            if ui
                .add_enabled(self.sketch.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.sketch.redo();
            }
        });
        if ui.button("Clear").clicked() {
            self.sketch.clear();
        }

        ui.separator();
        if ui.button("Export PNG").clicked() {
            export::request_screenshot(ctx);
            self.awaiting_screenshot = true;
        }
        if let Some(status) = &self.export_status {
            ui.label(status);
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::drag());
        let rect = response.rect;
        self.input.set_canvas_rect(rect);

        let events = self.input.process_input(ctx);
        InputRouter::route(
            &events,
            self.tools.active_tool_mut(),
            &mut self.sketch,
            &mut self.renderer,
        );

        let painter = painter.with_clip_rect(rect);
        let mut surface = PainterSurface::new(&painter, rect);
        self.renderer.render(&self.sketch, &mut surface);
    }

    fn handle_pending_export(&mut self, ctx: &egui::Context) {
        if !self.awaiting_screenshot {
            return;
        }
        let Some(capture) = export::take_screenshot(ctx) else {
            return;
        };
        self.awaiting_screenshot = false;

        let rect = self.input.canvas_rect();
        let result = export::save_png(&capture, rect, ctx.pixels_per_point(), Path::new(EXPORT_FILE));
        self.export_status = Some(match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_pending_export(ctx);

        egui::SidePanel::left("tool_panel").show(ctx, |ui| {
            self.tool_panel(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sticker Sketchpad");
            self.canvas(ui, ctx);
        });

        // Edit-driven redraw on top of egui's input-driven cadence, so the
        // picture never lags a committed edit by more than one frame.
        if self.sketch.take_dirty() {
            ctx.request_repaint();
        }
    }
}
