//! Procedural island generation: coherent noise, radial falloff, and biome
//! band classification rendered into displayable rasters.

mod async_generation;
mod band;
mod classify;
mod combine;
mod error;
mod field;
mod noise_field;
mod params;
mod pipeline;
mod radial_mask;

pub mod raster;

pub use async_generation::{AsyncIslandGenerator, GeneratedIsland, RunTicket};
pub use band::{BAND_TABLE, BiomeBand, Rgb};
pub use classify::{BandMap, Classification, LandMask, classify};
pub use combine::combine;
pub use error::TerrainError;
pub use field::{Dimensions, ScalarField};
pub use noise_field::{MAX_INTENSITY, NoiseField, NoiseFieldParams};
pub use params::{
    LAND_RADIUS_RANGE, LAND_THRESHOLD_RANGE, NOISE_OFFSET_RANGE, NOISE_SCALE_RANGE, Parameters,
};
pub use pipeline::{IslandGenerator, OutputRasterSet, generate_island};
pub use radial_mask::{FULL_CANVAS_RADIUS, RadialMask};
pub use raster::{DisplaySelector, Raster, RasterKind};
