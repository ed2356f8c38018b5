//! Tunable generation parameters.

use std::ops::RangeInclusive;

use crate::error::TerrainError;
use crate::field::Dimensions;

/// Slider bounds for [`Parameters::land_threshold`].
pub const LAND_THRESHOLD_RANGE: RangeInclusive<f32> = 1.0..=255.0;
/// Slider bounds for [`Parameters::land_radius`]. 10 spreads the falloff over the full canvas.
pub const LAND_RADIUS_RANGE: RangeInclusive<f32> = 1.0..=10.0;
/// Slider bounds for [`Parameters::noise_offset`].
pub const NOISE_OFFSET_RANGE: RangeInclusive<f32> = 0.0..=1000.0;
/// Slider bounds for [`Parameters::noise_scale`].
pub const NOISE_SCALE_RANGE: RangeInclusive<f32> = 1.0..=20.0;

/// Everything the pipeline needs for one run.
///
/// The struct is `Copy`, so a run always works on a snapshot taken at
/// invocation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Canvas width in pixels.
    pub world_width: u32,
    /// Canvas height in pixels.
    pub world_height: u32,
    /// Base intensity cutoff. Raise it for less land above sea level.
    pub land_threshold: f32,
    /// Radius factor of the falloff mask. Raise it for a wider island area.
    pub land_radius: f32,
    /// Origin of the sampling window in the noise domain, used for both axes.
    pub noise_offset: f32,
    /// Number of noise periods across the canvas. Raise it for more, smaller islands.
    pub noise_scale: f32,
    /// Seed of the Perlin permutation table.
    pub seed: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            world_width: 1024,
            world_height: 1024,
            land_threshold: 100.0,
            land_radius: 10.0,
            noise_offset: 0.0,
            noise_scale: 10.0,
            seed: 0,
        }
    }
}

impl Parameters {
    /// Canvas dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidDimension`] for a zero width or height.
    pub fn dimensions(&self) -> Result<Dimensions, TerrainError> {
        Dimensions::new(self.world_width, self.world_height)
    }

    /// Check the hard constraints the pipeline relies on.
    ///
    /// Values outside the slider ranges are accepted; only values the math
    /// cannot handle (non-finite, non-positive radius or scale, negative
    /// offset) are rejected.
    pub fn validate(&self) -> Result<(), TerrainError> {
        self.dimensions()?;
        check(
            "land_threshold",
            self.land_threshold,
            self.land_threshold.is_finite(),
        )?;
        check(
            "land_radius",
            self.land_radius,
            self.land_radius.is_finite() && self.land_radius > 0.0,
        )?;
        check(
            "noise_offset",
            self.noise_offset,
            self.noise_offset.is_finite() && self.noise_offset >= 0.0,
        )?;
        check(
            "noise_scale",
            self.noise_scale,
            self.noise_scale.is_finite() && self.noise_scale > 0.0,
        )?;
        Ok(())
    }

    /// A copy with every tunable pulled into its slider range.
    ///
    /// NaN inputs land on the lower bound.
    pub fn clamped(&self) -> Self {
        Self {
            land_threshold: clamp_to(self.land_threshold, &LAND_THRESHOLD_RANGE),
            land_radius: clamp_to(self.land_radius, &LAND_RADIUS_RANGE),
            noise_offset: clamp_to(self.noise_offset, &NOISE_OFFSET_RANGE),
            noise_scale: clamp_to(self.noise_scale, &NOISE_SCALE_RANGE),
            ..*self
        }
    }
}

fn check(name: &'static str, value: f32, ok: bool) -> Result<(), TerrainError> {
    if ok {
        Ok(())
    } else {
        Err(TerrainError::ParameterOutOfRange { name, value })
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
