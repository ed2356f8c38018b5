//! The island generation pipeline and the orchestrator that owns its state.
//!
//! A run goes noise → radial mask → combine → classify and renders the four
//! output rasters. Intermediate fields are dropped as soon as the next stage
//! has consumed them.

use std::sync::Arc;

use tracing::{debug, info_span};

use crate::band::BiomeBand;
use crate::classify::classify;
use crate::combine::combine;
use crate::error::TerrainError;
use crate::noise_field::{NoiseField, NoiseFieldParams};
use crate::params::Parameters;
use crate::radial_mask::RadialMask;
use crate::raster::{Raster, RasterKind, render_bands, render_grayscale, render_land_mask};

/// Everything one run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputRasterSet {
    /// The parameter snapshot the run used.
    pub params: Parameters,
    /// Raw noise, grayscale.
    pub noise: Raster,
    /// Noise attenuated by the radial mask, grayscale.
    pub combined: Raster,
    /// Land mask, black on blue.
    pub land_mask: Raster,
    /// Classified island map.
    pub classified: Raster,
    /// Cell count per band, indexed by [`BiomeBand::index`].
    pub band_counts: [usize; BiomeBand::COUNT],
}

impl OutputRasterSet {
    /// The raster for `kind`.
    pub fn get(&self, kind: RasterKind) -> &Raster {
        match kind {
            RasterKind::Noise => &self.noise,
            RasterKind::Combined => &self.combined,
            RasterKind::LandMask => &self.land_mask,
            RasterKind::Classified => &self.classified,
        }
    }

    /// Fraction of cells in `band`.
    pub fn coverage(&self, band: BiomeBand) -> f64 {
        let total: usize = self.band_counts.iter().sum();
        if total == 0 {
            0.0
        } else {
            self.band_counts[band.index()] as f64 / total as f64
        }
    }
}

/// Run the whole pipeline for one parameter snapshot.
///
/// # Errors
///
/// Returns [`TerrainError::InvalidDimension`] or
/// [`TerrainError::ParameterOutOfRange`] before any field is produced if the
/// parameters fail validation.
pub fn generate_island(params: &Parameters) -> Result<OutputRasterSet, TerrainError> {
    generate_island_cancellable(params, || false)
}

/// Run the pipeline, polling `cancelled` between stages.
///
/// Returns [`TerrainError::Cancelled`] as soon as `cancelled` reports true;
/// nothing from the abandoned run escapes.
pub(crate) fn generate_island_cancellable(
    params: &Parameters,
    cancelled: impl Fn() -> bool,
) -> Result<OutputRasterSet, TerrainError> {
    let params = *params;
    params.validate()?;
    let dims = params.dimensions()?;

    let _span = info_span!(
        "generate_island",
        width = dims.width(),
        height = dims.height(),
        seed = params.seed
    )
    .entered();

    let check = || {
        if cancelled() {
            Err(TerrainError::Cancelled)
        } else {
            Ok(())
        }
    };

    let offset = f64::from(params.noise_offset);
    let noise = NoiseField::new(NoiseFieldParams {
        seed: params.seed,
        offset_x: offset,
        offset_y: offset,
        scale: f64::from(params.noise_scale),
    })
    .generate(dims)?;
    debug!("noise field generated");
    check()?;

    let mask = RadialMask::new(params.land_radius)?.generate(dims);
    debug!(radius = params.land_radius, "radial mask generated");
    check()?;

    let combined = combine(&noise, &mask)?;
    drop(mask);
    let noise_raster = render_grayscale(&noise);
    drop(noise);
    let (min, max) = combined.min_max();
    debug!(min, max, "combined field generated");
    check()?;

    let classification = classify(&combined, params.land_threshold);
    let combined_raster = render_grayscale(&combined);
    drop(combined);
    let band_counts = classification.bands.histogram();
    debug!(
        threshold = params.land_threshold,
        land_cells = classification.land_mask.count(),
        "field classified"
    );
    check()?;

    Ok(OutputRasterSet {
        params,
        noise: noise_raster,
        combined: combined_raster,
        land_mask: render_land_mask(&classification.land_mask),
        classified: render_bands(&classification.bands),
        band_counts,
    })
}

/// Owns the tunable parameters and the latest complete output set.
///
/// [`IslandGenerator::run`] is the only operation that replaces the outputs.
/// Consumers hold the set through an [`Arc`], so a set on screen stays valid
/// while the next one is generated and swapped in.
#[derive(Debug, Default)]
pub struct IslandGenerator {
    params: Parameters,
    outputs: Option<Arc<OutputRasterSet>>,
}

impl IslandGenerator {
    pub fn new(params: Parameters) -> Self {
        Self {
            params,
            outputs: None,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Mutable access for the UI layer. Changes apply on the next run.
    pub fn params_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    pub fn set_params(&mut self, params: Parameters) {
        self.params = params;
    }

    /// Run the pipeline on a snapshot of the current parameters.
    ///
    /// On success the new set replaces the held one. On failure the previous
    /// set stays in place and the error is returned.
    pub fn run(&mut self) -> Result<Arc<OutputRasterSet>, TerrainError> {
        let snapshot = self.params;
        let outputs = Arc::new(generate_island(&snapshot)?);
        self.outputs = Some(Arc::clone(&outputs));
        Ok(outputs)
    }

    /// Store `params` and run with them.
    pub fn run_with(&mut self, params: Parameters) -> Result<Arc<OutputRasterSet>, TerrainError> {
        self.params = params;
        self.run()
    }

    /// Swap in a set produced elsewhere, e.g. by
    /// [`AsyncIslandGenerator`](crate::AsyncIslandGenerator).
    pub fn install(&mut self, outputs: OutputRasterSet) -> Arc<OutputRasterSet> {
        let outputs = Arc::new(outputs);
        self.outputs = Some(Arc::clone(&outputs));
        outputs
    }

    /// The latest complete output set, if any run has succeeded.
    pub fn outputs(&self) -> Option<&Arc<OutputRasterSet>> {
        self.outputs.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> Parameters {
        Parameters {
            world_width: 64,
            world_height: 48,
            seed: 7,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_rasters_share_dimensions() {
        let outputs = generate_island(&small_params()).unwrap();
        for kind in RasterKind::ALL {
            let raster = outputs.get(kind);
            assert_eq!(raster.dimensions(), (64, 48), "{kind:?}");
            assert_eq!(raster.pixels.len(), 64 * 48 * 4, "{kind:?}");
        }
        assert_eq!(outputs.band_counts.iter().sum::<usize>(), 64 * 48);
    }

    #[test]
    fn test_identical_params_bit_identical_outputs() {
        let a = generate_island(&small_params()).unwrap();
        let b = generate_island(&small_params()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_edges_are_water_at_full_radius() {
        // At radius 10 the mask is negative near the corners, so they come out as zero.
        let outputs = generate_island(&small_params()).unwrap();
        let (r, g, b) = BiomeBand::Water.color();
        for (x, y) in [(0, 0), (63, 0), (0, 47), (63, 47)] {
            assert_eq!(outputs.classified.get_pixel(x, y), (r, g, b, 255));
            assert_eq!(outputs.combined.get_pixel(x, y), (0, 0, 0, 255));
        }
    }

    #[test]
    fn test_invalid_params_rejected_before_output() {
        let params = Parameters {
            world_height: 0,
            ..small_params()
        };
        assert!(matches!(
            generate_island(&params),
            Err(TerrainError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_cancellation_discards_run() {
        let result = generate_island_cancellable(&small_params(), || true);
        assert_eq!(result, Err(TerrainError::Cancelled));
    }

    #[test]
    fn test_failed_run_keeps_previous_outputs() {
        let mut generator = IslandGenerator::new(small_params());
        let first = generator.run().unwrap();

        generator.params_mut().land_radius = -1.0;
        assert!(generator.run().is_err());
        assert!(Arc::ptr_eq(generator.outputs().unwrap(), &first));
    }

    #[test]
    fn test_run_replaces_outputs_and_old_set_stays_valid() {
        let mut generator = IslandGenerator::new(small_params());
        let first = generator.run().unwrap();

        let second = generator
            .run_with(Parameters {
                seed: 8,
                ..small_params()
            })
            .unwrap();
        assert!(Arc::ptr_eq(generator.outputs().unwrap(), &second));
        assert_eq!(first.params.seed, 7);
        assert_eq!(second.params.seed, 8);
        assert_eq!(first.noise.dimensions(), (64, 48));
    }

    #[test]
    fn test_higher_threshold_means_more_water() {
        let water = |threshold: f32| {
            generate_island(&Parameters {
                land_threshold: threshold,
                ..small_params()
            })
            .unwrap()
            .coverage(BiomeBand::Water)
        };
        assert!(water(200.0) >= water(50.0));
    }
}
