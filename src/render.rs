//! Grayscale image output for generated patterns.

use std::path::Path;

use crate::plate::ChladniPattern;

/// Write a pattern as an 8-bit grayscale image, one pixel per sample.
///
/// The pattern is already two-level, so no scaling, axes, or other
/// decoration is applied; matrix rows map to image rows top-down.
pub fn save_grayscale(pattern: &ChladniPattern, path: &Path) -> Result<(), image::ImageError> {
    let (rows, cols) = pattern.dim();
    let pixels: Vec<u8> = pattern.iter().copied().collect();

    image::save_buffer(
        path,
        &pixels,
        cols as u32,
        rows as u32,
        image::ColorType::L8,
    )
}
