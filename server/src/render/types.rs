use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageOutputFormat, RgbImage};

pub type Rgb = [u8; 3];

/// Off-screen RGB surface the frame is drawn onto, row-major, one byte per
/// channel. Coordinates are world units, so cells paint as
/// cell_size x cell_size pixel blocks.
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 3) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: Rgb) {
        for chunk in self.pixels.chunks_exact_mut(3) {
            chunk.copy_from_slice(&color);
        }
    }

    /// Paint a filled rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        for py in y.max(0)..(y + h as i32).min(self.height as i32) {
            for px in x.max(0)..(x + w as i32).min(self.width as i32) {
                let idx = ((py as u32 * self.width + px as u32) * 3) as usize;
                self.pixels[idx..idx + 3].copy_from_slice(&color);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = ((y * self.width + x) * 3) as usize;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    pub fn into_image(self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.pixels)
            .expect("pixel buffer matches surface dimensions")
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let image = RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("pixel buffer does not match surface dimensions")?;
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .context("Failed to encode frame as PNG")?;
        Ok(bytes)
    }
}
