//! Single-octave Perlin noise rasterized onto the canvas.
//!
//! The sampling window spans `scale` noise periods across the canvas, so a
//! larger scale produces more, smaller land segments. Samples are mapped from
//! `[-1, 1]` to the `[0, 255]` intensity range.

use noise::{NoiseFn, Perlin};

use crate::error::TerrainError;
use crate::field::{Dimensions, ScalarField};

/// Largest intensity a field sample can take.
pub const MAX_INTENSITY: f32 = 255.0;

/// Configuration for the noise stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseFieldParams {
    /// Seed of the Perlin permutation table.
    pub seed: u32,
    /// Horizontal translation of the sampling window, in pixels.
    pub offset_x: f64,
    /// Vertical translation of the sampling window, in pixels.
    pub offset_y: f64,
    /// Number of noise periods across the canvas. Must be positive.
    pub scale: f64,
}

impl Default for NoiseFieldParams {
    fn default() -> Self {
        Self {
            seed: 0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 10.0,
        }
    }
}

/// Produces coherent noise intensity fields.
pub struct NoiseField {
    noise: Perlin,
    params: NoiseFieldParams,
}

impl NoiseField {
    pub fn new(params: NoiseFieldParams) -> Self {
        Self {
            noise: Perlin::new(params.seed),
            params,
        }
    }

    /// Sample the intensity at pixel `(x, y)` of a canvas with the given dimensions.
    ///
    /// Returns a value in `[0, 255]`.
    pub fn sample(&self, dims: Dimensions, x: u32, y: u32) -> f32 {
        let nx = (x as f64 + self.params.offset_x) * (self.params.scale / dims.width() as f64);
        let ny = (y as f64 + self.params.offset_y) * (self.params.scale / dims.height() as f64);
        let p = self.noise.get([nx, ny]).clamp(-1.0, 1.0);
        (((p + 1.0) * 0.5) as f32 * MAX_INTENSITY).clamp(0.0, MAX_INTENSITY)
    }

    /// Rasterize the noise over the whole canvas.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::ParameterOutOfRange`] if the offsets are not
    /// finite or the scale is not a positive finite number.
    pub fn generate(&self, dims: Dimensions) -> Result<ScalarField, TerrainError> {
        let NoiseFieldParams {
            offset_x,
            offset_y,
            scale,
            ..
        } = self.params;
        if !offset_x.is_finite() {
            return Err(out_of_range("offset_x", offset_x));
        }
        if !offset_y.is_finite() {
            return Err(out_of_range("offset_y", offset_y));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(out_of_range("noise_scale", scale));
        }

        Ok(ScalarField::from_fn(dims, |x, y| self.sample(dims, x, y)))
    }
}

fn out_of_range(name: &'static str, value: f64) -> TerrainError {
    TerrainError::ParameterOutOfRange {
        name,
        value: value as f32,
    }
}
