//! Thresholds a combined field into a land mask and a biome band map.

use crate::band::BiomeBand;
use crate::field::{Dimensions, ScalarField};

/// Per-cell flag, set where the combined intensity is below the land threshold.
///
/// Lower intensity counts as "land" here even though the same cells are
/// painted as [`BiomeBand::Water`] in the band map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandMask {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl LandMask {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Whether the cell at `(x, y)` is set.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.cells[self.dims.index(x, y)]
    }

    /// All flags in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }
}

/// Per-cell biome band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandMap {
    dims: Dimensions,
    bands: Vec<BiomeBand>,
}

impl BandMap {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Band of the cell at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> BiomeBand {
        self.bands[self.dims.index(x, y)]
    }

    /// All bands in row-major order.
    pub fn bands(&self) -> &[BiomeBand] {
        &self.bands
    }

    /// Cell count per band, indexed by [`BiomeBand::index`].
    pub fn histogram(&self) -> [usize; BiomeBand::COUNT] {
        let mut counts = [0; BiomeBand::COUNT];
        for band in &self.bands {
            counts[band.index()] += 1;
        }
        counts
    }
}

/// Both outputs of the classifier. They always share the input's dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub land_mask: LandMask,
    pub bands: BandMap,
}

/// Classify every cell of `combined` against `land_threshold`.
pub fn classify(combined: &ScalarField, land_threshold: f32) -> Classification {
    let dims = combined.dimensions();
    let values = combined.values();

    let cells = values.iter().map(|&v| v < land_threshold).collect();
    let bands = values
        .iter()
        .map(|&v| BiomeBand::classify(v, land_threshold))
        .collect();

    Classification {
        land_mask: LandMask { dims, cells },
        bands: BandMap { dims, bands },
    }
}
