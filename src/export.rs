use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{ColorImage, Context, Rect, UserData, ViewportCommand};
use thiserror::Error;

/// Failures while writing the exported picture.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("screenshot buffer had unexpected dimensions")]
    BadDimensions,
    #[error("failed to write PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Ask the backend for a capture of the viewport. The result arrives as an
/// `Event::Screenshot` on a later frame; poll with [`take_screenshot`].
pub fn request_screenshot(ctx: &Context) {
    ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
}

/// Pull a pending screenshot out of this frame's events, if any.
pub fn take_screenshot(ctx: &Context) -> Option<Arc<ColorImage>> {
    ctx.input(|input| {
        input.events.iter().rev().find_map(|event| match event {
            egui::Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    })
}

/// Crop a viewport capture down to the canvas rect and write it as a PNG.
/// The capture already contains the replayed history at physical-pixel
/// resolution; nothing is re-rendered here.
pub fn save_png(
    capture: &ColorImage,
    canvas_rect: Rect,
    pixels_per_point: f32,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    let canvas = capture.region(&canvas_rect, Some(pixels_per_point));
    let [width, height] = canvas.size;
    let pixels: Vec<u8> = canvas.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .ok_or(ExportError::BadDimensions)?;
    buffer.save(path)?;
    log::info!("exported sketch to {}", path.display());
    Ok(path.to_path_buf())
}
