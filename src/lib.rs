#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod drawable;
pub mod export;
pub mod input;
pub mod renderer;
pub mod sketch;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use drawable::{Drawable, Sticker, Stroke};
pub use input::{InputEvent, InputHandler, InputRouter, PointerLocation};
pub use renderer::{Renderer, ToolPreview};
pub use sketch::Sketch;
pub use surface::{PainterSurface, Surface};
pub use tools::{MarkerTool, StickerTool, Tool, ToolKind, Tools};
