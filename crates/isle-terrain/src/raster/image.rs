//! A 2D raster represented as a flat array of RGBA pixels.

use crate::band::Rgb;
use crate::field::Dimensions;

/// An island raster, stored as row-major RGBA pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new transparent black (all-zero) raster.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            width: dims.width(),
            height: dims.height(),
            pixels: vec![0; dims.cell_count() * 4],
        }
    }

    /// Create an opaque raster with every pixel set to `color`.
    pub fn filled(dims: Dimensions, color: Rgb) -> Self {
        let (r, g, b) = color;
        Self {
            width: dims.width(),
            height: dims.height(),
            pixels: [r, g, b, 255].repeat(dims.cell_count()),
        }
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let idx = self.offset(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = self.offset(x, y);
        (
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels in the raster.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Count the number of unique colors (ignoring alpha) in the raster.
    #[cfg(test)]
    pub(crate) fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }
}
