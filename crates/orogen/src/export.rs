//! File export for generated heightmaps.
//!
//! A heightmap is usually handed to a renderer, but it is often useful to
//! drop it to disk instead: a colormapped PNG for a quick look, or JSON for
//! downstream tooling.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::{ImageBuffer, Rgb};
use orogen_core::{Heightmap, OrogenError, Result};

use crate::color_maps::ColorMap;

/// Saves a heightmap as a colormapped RGB PNG.
///
/// Elevations are normalized against the grid's min/max range, then mapped
/// through `color_map`. A completely flat grid samples the middle of the
/// color map. Rows of the grid become rows of the image, top to bottom.
///
/// # Errors
/// Returns an error if the grid is empty or the image cannot be encoded
/// or written.
#[allow(clippy::cast_possible_truncation)]
pub fn save_png(
    map: &Heightmap,
    color_map: &ColorMap,
    path: impl AsRef<Path>,
) -> Result<()> {
    if map.is_empty() {
        return Err(OrogenError::ImageWriteError(
            "cannot export an empty heightmap".to_string(),
        ));
    }
    let side = u32::try_from(map.side())
        .map_err(|_| OrogenError::ImageWriteError("grid side exceeds u32".to_string()))?;

    let (min, max) = map.min_max();
    let range = max - min;
    let flat = range <= f32::EPSILON;

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(side, side, |x, y| {
        let v = map.get(y as usize, x as usize);
        let t = if flat { 0.5 } else { (v - min) / range };
        let c = color_map.sample(t);
        Rgb([to_channel(c.x), to_channel(c.y), to_channel(c.z)])
    });

    img.save_with_format(path.as_ref(), image::ImageFormat::Png)
        .map_err(|e| OrogenError::ImageWriteError(e.to_string()))?;

    log::info!(
        "heightmap saved to {} ({side}x{side} px)",
        path.as_ref().display()
    );
    Ok(())
}

/// Saves a heightmap as JSON (side length plus row-major elevations).
///
/// # Errors
/// Returns an error if the file cannot be created or serialization fails.
pub fn save_json(map: &Heightmap, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer(BufWriter::new(file), map)?;
    log::info!("heightmap saved to {}", path.as_ref().display());
    Ok(())
}

/// Loads a heightmap previously written by [`save_json`].
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid heightmap
/// JSON.
pub fn load_json(path: impl AsRef<Path>) -> Result<Heightmap> {
    let file = File::open(path.as_ref())?;
    let map = serde_json::from_reader(BufReader::new(file))?;
    Ok(map)
}

/// Converts a color channel from `[0, 1]` float to `u8`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
