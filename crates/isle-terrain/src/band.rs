//! Biome bands: ordered elevation classes and their display palette.
//!
//! Bands are selected by scanning [`BAND_TABLE`] in ascending order. A value
//! belongs to the first band whose upper bound (`threshold + offset`) it is
//! strictly below, so a value sitting exactly on a boundary falls into the
//! next band.

/// An RGB display color.
pub type Rgb = (u8, u8, u8);

/// One of the eight ordered terrain classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BiomeBand {
    Water,
    Shallow,
    Beach,
    Sand,
    Grass,
    ForestGreen,
    Mountain,
    Snow,
}

/// `(upper bound offset from the land threshold, band, color)`, ascending.
///
/// The last row is unbounded above.
pub const BAND_TABLE: [(f32, BiomeBand, Rgb); 8] = [
    (0.0, BiomeBand::Water, (65, 105, 225)),
    (10.0, BiomeBand::Shallow, (88, 153, 237)),
    (12.0, BiomeBand::Beach, (238, 214, 175)),
    (14.0, BiomeBand::Sand, (210, 180, 140)),
    (25.0, BiomeBand::Grass, (34, 139, 34)),
    (55.0, BiomeBand::ForestGreen, (0, 100, 0)),
    (80.0, BiomeBand::Mountain, (139, 137, 137)),
    (f32::INFINITY, BiomeBand::Snow, (255, 250, 250)),
];

impl BiomeBand {
    /// Every band in ascending order.
    pub const ALL: [BiomeBand; 8] = [
        BiomeBand::Water,
        BiomeBand::Shallow,
        BiomeBand::Beach,
        BiomeBand::Sand,
        BiomeBand::Grass,
        BiomeBand::ForestGreen,
        BiomeBand::Mountain,
        BiomeBand::Snow,
    ];

    /// Number of bands.
    pub const COUNT: usize = Self::ALL.len();

    /// Select the band for a combined intensity relative to the land threshold.
    ///
    /// Values that compare false against every bound (NaN) land in the last band.
    pub fn classify(value: f32, land_threshold: f32) -> Self {
        BAND_TABLE
            .iter()
            .find(|(offset, _, _)| value < land_threshold + offset)
            .map_or(BiomeBand::Snow, |&(_, band, _)| band)
    }

    /// Position of the band in [`BiomeBand::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper bound offset from the land threshold; infinite for the last band.
    pub fn upper_offset(self) -> f32 {
        BAND_TABLE[self.index()].0
    }

    /// Display color from the reference palette.
    pub fn color(self) -> Rgb {
        BAND_TABLE[self.index()].2
    }

    /// Lowercase name for reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            BiomeBand::Water => "water",
            BiomeBand::Shallow => "shallow",
            BiomeBand::Beach => "beach",
            BiomeBand::Sand => "sand",
            BiomeBand::Grass => "grass",
            BiomeBand::ForestGreen => "forest",
            BiomeBand::Mountain => "mountain",
            BiomeBand::Snow => "snow",
        }
    }
}
