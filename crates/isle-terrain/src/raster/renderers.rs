//! Renderers that turn pipeline fields into displayable rasters.

use super::image::Raster;
use crate::band::{BiomeBand, Rgb};
use crate::classify::{BandMap, LandMask};
use crate::field::ScalarField;

/// Color of land-mask cells.
pub const MASK_SET_COLOR: Rgb = (0, 0, 0);

/// Render an intensity field as opaque grayscale.
///
/// Values are clamped to `[0, 255]` and truncated to 8 bits.
pub fn render_grayscale(field: &ScalarField) -> Raster {
    let dims = field.dimensions();
    let mut raster = Raster::new(dims);
    for (pixel, &value) in raster.pixels.chunks_exact_mut(4).zip(field.values()) {
        let v = intensity_to_u8(value);
        pixel.copy_from_slice(&[v, v, v, 255]);
    }
    raster
}

/// Render the land mask: set cells black, the rest in the water color.
pub fn render_land_mask(mask: &LandMask) -> Raster {
    let mut raster = Raster::filled(mask.dimensions(), BiomeBand::Water.color());
    let (r, g, b) = MASK_SET_COLOR;
    for (pixel, _) in raster
        .pixels
        .chunks_exact_mut(4)
        .zip(mask.cells())
        .filter(|(_, set)| **set)
    {
        pixel.copy_from_slice(&[r, g, b, 255]);
    }
    raster
}

/// Render the band map with the reference palette.
pub fn render_bands(bands: &BandMap) -> Raster {
    let mut raster = Raster::new(bands.dimensions());
    for (pixel, band) in raster.pixels.chunks_exact_mut(4).zip(bands.bands()) {
        let (r, g, b) = band.color();
        pixel.copy_from_slice(&[r, g, b, 255]);
    }
    raster
}

/// Truncate an intensity to a gray level.
pub fn intensity_to_u8(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    value.clamp(0.0, 255.0) as u8
}
