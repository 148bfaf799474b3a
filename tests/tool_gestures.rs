mod common;

use egui::Pos2;
use sticker_sketchpad::input::{InputEvent, InputRouter, PointerLocation};
use sticker_sketchpad::{MarkerTool, Renderer, Sketch, StickerTool, Tool, ToolPreview};

fn at(x: f32, y: f32) -> PointerLocation {
    PointerLocation {
        position: Pos2::new(x, y),
        is_in_canvas: true,
    }
}

fn outside(x: f32, y: f32) -> PointerLocation {
    PointerLocation {
        position: Pos2::new(x, y),
        is_in_canvas: false,
    }
}

fn route(events: Vec<InputEvent>, tool: &mut dyn Tool, sketch: &mut Sketch) -> Renderer {
    let mut renderer = Renderer::new();
    InputRouter::route(&events, tool, sketch, &mut renderer);
    renderer
}

#[test]
fn a_drag_draws_one_stroke_with_every_point() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    route(
        vec![
            InputEvent::PointerDown { location: at(0.0, 0.0) },
            InputEvent::PointerMove {
                location: at(1.0, 1.0),
                primary_held: true,
            },
            InputEvent::PointerMove {
                location: at(2.0, 2.0),
                primary_held: true,
            },
            InputEvent::PointerUp { location: at(2.0, 2.0) },
        ],
        &mut tool,
        &mut sketch,
    );

    assert_eq!(sketch.history().len(), 1);
    let stroke = sketch.history()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 3);
    assert!(!sketch.has_active());
}

#[test]
fn hovering_without_the_button_never_grows_the_stroke() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    route(
        vec![
            InputEvent::PointerDown { location: at(0.0, 0.0) },
            InputEvent::PointerMove {
                location: at(5.0, 5.0),
                primary_held: false,
            },
            InputEvent::PointerUp { location: at(5.0, 5.0) },
            InputEvent::PointerMove {
                location: at(9.0, 9.0),
                primary_held: false,
            },
        ],
        &mut tool,
        &mut sketch,
    );

    let stroke = sketch.history()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 1);
}

#[test]
fn moves_after_release_do_not_grow_the_sealed_stroke() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    route(
        vec![
            InputEvent::PointerDown { location: at(0.0, 0.0) },
            InputEvent::PointerUp { location: at(0.0, 0.0) },
            InputEvent::PointerMove {
                location: at(4.0, 4.0),
                primary_held: true,
            },
        ],
        &mut tool,
        &mut sketch,
    );

    let stroke = sketch.history()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 1);
}

#[test]
fn a_press_outside_the_canvas_is_ignored() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    route(
        vec![InputEvent::PointerDown {
            location: outside(-5.0, -5.0),
        }],
        &mut tool,
        &mut sketch,
    );

    assert!(sketch.history().is_empty());
}

#[test]
fn dragging_a_sticker_repositions_it() {
    let mut tool = StickerTool::default();
    let mut sketch = Sketch::new();
    route(
        vec![
            InputEvent::PointerDown { location: at(3.0, 3.0) },
            InputEvent::PointerMove {
                location: at(6.0, 6.0),
                primary_held: true,
            },
            InputEvent::PointerMove {
                location: at(8.0, 8.0),
                primary_held: true,
            },
            InputEvent::PointerUp { location: at(8.0, 8.0) },
        ],
        &mut tool,
        &mut sketch,
    );

    assert_eq!(sketch.history().len(), 1);
    let placed = sketch.history()[0].as_sticker().unwrap();
    assert_eq!(placed.anchor(), Pos2::new(8.0, 8.0));
}

#[test]
fn leaving_the_canvas_clears_the_preview_but_not_the_gesture() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    let renderer = route(
        vec![
            InputEvent::PointerDown { location: at(0.0, 0.0) },
            InputEvent::PointerMove {
                location: at(1.0, 1.0),
                primary_held: true,
            },
            InputEvent::PointerLeave,
        ],
        &mut tool,
        &mut sketch,
    );

    assert!(renderer.preview().is_none());
    assert!(sketch.has_active());
}

#[test]
fn entering_the_canvas_shows_the_active_tool_preview() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    let renderer = route(
        vec![InputEvent::PointerEnter { location: at(12.0, 34.0) }],
        &mut tool,
        &mut sketch,
    );

    assert_eq!(
        renderer.preview(),
        Some(&ToolPreview::Marker {
            pos: Pos2::new(12.0, 34.0),
            thickness: tool.thickness,
            color: tool.color,
        })
    );
}

#[test]
fn two_drags_produce_two_separate_drawables() {
    let mut tool = MarkerTool::default();
    let mut sketch = Sketch::new();
    route(
        vec![
            InputEvent::PointerDown { location: at(0.0, 0.0) },
            InputEvent::PointerMove {
                location: at(1.0, 0.0),
                primary_held: true,
            },
            InputEvent::PointerUp { location: at(1.0, 0.0) },
            InputEvent::PointerDown { location: at(5.0, 5.0) },
            InputEvent::PointerMove {
                location: at(6.0, 5.0),
                primary_held: true,
            },
            InputEvent::PointerUp { location: at(6.0, 5.0) },
        ],
        &mut tool,
        &mut sketch,
    );

    assert_eq!(sketch.history().len(), 2);
    assert_eq!(sketch.history()[0].as_stroke().unwrap().points().len(), 2);
    assert_eq!(sketch.history()[1].as_stroke().unwrap().points().len(), 2);
}
