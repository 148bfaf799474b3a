use egui::{Context, PointerButton, Pos2, Rect};

use crate::renderer::Renderer;
use crate::sketch::Sketch;
use crate::tools::Tool;

/// Where a pointer event happened, in canvas-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerLocation {
    pub position: Pos2,
    /// Whether this position is within the canvas bounds.
    pub is_in_canvas: bool,
}

/// The five pointer signals the sketch core needs.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Primary button was pressed.
    PointerDown { location: PointerLocation },
    /// Primary button was released.
    PointerUp { location: PointerLocation },
    /// Pointer moved (with or without the button pressed).
    PointerMove {
        location: PointerLocation,
        primary_held: bool,
    },
    /// Pointer crossed into the canvas.
    PointerEnter { location: PointerLocation },
    /// Pointer left the canvas (or the window).
    PointerLeave,
}

/// Converts raw egui input into canvas-relative `InputEvent`s.
pub struct InputHandler {
    canvas_rect: Rect,
    last_hover: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_hover: None,
        }
    }

    /// Update the canvas rectangle (the panel may have been resized).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn make_location(&self, pos: Pos2) -> PointerLocation {
        PointerLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Scan this frame's pointer state into domain events.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            match (self.last_hover, hover) {
                (last, Some(pos)) => {
                    let was_in = last.is_some_and(|p| self.canvas_rect.contains(p));
                    let now_in = self.canvas_rect.contains(pos);
                    if now_in && !was_in {
                        events.push(InputEvent::PointerEnter {
                            location: self.make_location(pos),
                        });
                    } else if was_in && !now_in {
                        events.push(InputEvent::PointerLeave);
                    }
                    if last != Some(pos) {
                        events.push(InputEvent::PointerMove {
                            location: self.make_location(pos),
                            primary_held: input.pointer.button_down(PointerButton::Primary),
                        });
                    }
                }
                (Some(last), None) => {
                    // Pointer left the window entirely.
                    if self.canvas_rect.contains(last) {
                        events.push(InputEvent::PointerLeave);
                    }
                }
                (None, None) => {}
            }
            self.last_hover = hover;

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos() {
                    events.push(InputEvent::PointerDown {
                        location: self.make_location(pos),
                    });
                }
            }
            if input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos().or(hover) {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                    });
                }
            }
        });

        events
    }
}

/// Maps pointer events onto the active tool, the sketch, and the preview.
///
/// Gesture state machine: Idle →(down in canvas)→ Drawing; Drawing →(move
/// with primary held)→ Drawing; Drawing →(up)→ Idle. Leaving the canvas
/// clears the preview but leaves the gesture alone.
pub struct InputRouter;

impl InputRouter {
    pub fn route(
        events: &[InputEvent],
        tool: &mut dyn Tool,
        sketch: &mut Sketch,
        renderer: &mut Renderer,
    ) {
        for event in events {
            match event {
                InputEvent::PointerDown { location } if location.is_in_canvas => {
                    tool.on_pointer_down(location.position, sketch);
                }
                InputEvent::PointerDown { .. } => {}
                InputEvent::PointerMove {
                    location,
                    primary_held,
                } => {
                    if location.is_in_canvas {
                        renderer.set_preview(Some(tool.preview(location.position)));
                        tool.on_pointer_move(location.position, *primary_held, sketch);
                    }
                }
                InputEvent::PointerUp { location } => {
                    if sketch.has_active() {
                        tool.on_pointer_up(location.position, sketch);
                    }
                }
                InputEvent::PointerEnter { location } => {
                    renderer.set_preview(Some(tool.preview(location.position)));
                }
                InputEvent::PointerLeave => renderer.clear_preview(),
            }
        }
    }
}
