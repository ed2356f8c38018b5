//! Output rasters: RGBA images rendered from pipeline fields.
//!
//! Provides [`Raster`], the renderers that produce the four outputs of a run,
//! and [`DisplaySelector`], the wrap-around index a viewer uses to pick which
//! output to show. The selector is presentation state only and never feeds
//! back into generation.

mod image;
mod renderers;

pub use self::image::Raster;
pub use renderers::{
    MASK_SET_COLOR, intensity_to_u8, render_bands, render_grayscale, render_land_mask,
};

/// The four outputs of a generation run, in display cycling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RasterKind {
    /// Raw noise, grayscale.
    Noise,
    /// Noise attenuated by the radial mask, grayscale.
    Combined,
    /// Black/blue land mask.
    LandMask,
    /// Fully classified island map.
    Classified,
}

impl RasterKind {
    /// All kinds in cycling order.
    pub const ALL: [RasterKind; 4] = [
        RasterKind::Noise,
        RasterKind::Combined,
        RasterKind::LandMask,
        RasterKind::Classified,
    ];

    /// Short name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            RasterKind::Noise => "noise",
            RasterKind::Combined => "combined",
            RasterKind::LandMask => "land",
            RasterKind::Classified => "island",
        }
    }

    /// Parse a name produced by [`RasterKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn position(self) -> usize {
        self as usize
    }
}

/// Which output raster is currently on screen.
///
/// Cycles through [`RasterKind::ALL`] with wraparound in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySelector {
    index: usize,
}

impl DisplaySelector {
    /// Create a selector showing the classified island.
    pub fn new() -> Self {
        Self::showing(RasterKind::Classified)
    }

    /// Create a selector showing `kind`.
    pub fn showing(kind: RasterKind) -> Self {
        Self {
            index: kind.position(),
        }
    }

    /// The raster currently selected.
    pub fn current(&self) -> RasterKind {
        RasterKind::ALL[self.index]
    }

    /// Jump straight to `kind`.
    pub fn select(&mut self, kind: RasterKind) {
        self.index = kind.position();
    }

    /// Advance to the next raster, wrapping after the last one.
    pub fn next(&mut self) -> RasterKind {
        self.index = (self.index + 1) % RasterKind::ALL.len();
        self.current()
    }

    /// Step back to the previous raster, wrapping before the first one.
    pub fn previous(&mut self) -> RasterKind {
        let len = RasterKind::ALL.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }
}

impl Default for DisplaySelector {
    fn default() -> Self {
        Self::new()
    }
}
