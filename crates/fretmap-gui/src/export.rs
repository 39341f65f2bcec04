//! PNG export of the diagram region

use std::path::Path;

use anyhow::Context as _;
use egui::{ColorImage, Rect};

/// Write a captured frame to `path`, cropped to `region` (in points)
/// when one is known.
pub fn save_png(
    image: &ColorImage,
    region: Option<Rect>,
    pixels_per_point: f32,
    path: &Path,
) -> anyhow::Result<()> {
    let cropped = match region {
        Some(rect) => image.region(&rect, Some(pixels_per_point)),
        None => image.clone(),
    };
    let [width, height] = cropped.size;
    image::save_buffer(
        path,
        cropped.as_raw(),
        width as u32,
        height as u32,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", path.display()))
}
