//! Image sinks for finished pixel buffers.
//!
//! The primary artifact is a binary PPM whose header and byte layout are
//! reproduced exactly (`P6\n<width> <height>\n255\n` followed by raw
//! row-major RGB bytes, top row first) for compatibility with existing
//! viewers. PNG output goes through the `image` crate.

use anyhow::{Context, Result};
use image::RgbImage;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes a square basin map as a binary (P6) PPM file.
pub fn write_ppm(path: &Path, grid_size: usize, pixels: &[u8]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_ppm_to(&mut w, grid_size, pixels)?;
    w.flush()
}

/// Writes the P6 header and pixel bytes to an arbitrary writer.
pub fn write_ppm_to(w: &mut impl Write, grid_size: usize, pixels: &[u8]) -> io::Result<()> {
    debug_assert_eq!(pixels.len(), 3 * grid_size * grid_size);
    write!(w, "P6\n{grid_size} {grid_size}\n255\n")?;
    w.write_all(pixels)
}

/// Writes a square basin map as a PNG file.
pub fn write_png(path: &Path, grid_size: usize, pixels: &[u8]) -> Result<()> {
    let side = grid_size as u32;
    let img = RgbImage::from_raw(side, side, pixels.to_vec())
        .context("pixel buffer length does not match the image dimensions")?;
    img.save(path)?;
    Ok(())
}
