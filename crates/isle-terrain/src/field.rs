//! Canvas dimensions and write-once scalar fields.

use crate::error::TerrainError;

/// Width and height of every field and raster produced by one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create a new pair of dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidDimension`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in a grid of these dimensions.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of the cell at `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// The center cell, rounded down on odd sides.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Returns `(width, height)`.
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// A dense row-major grid of `f32` samples.
///
/// Fields are built in one pass and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    dims: Dimensions,
    values: Vec<f32>,
}

impl ScalarField {
    /// Build a field by evaluating `f(x, y)` for every cell in row-major order.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let mut values = Vec::with_capacity(dims.cell_count());
        for y in 0..dims.height() {
            for x in 0..dims.width() {
                values.push(f(x, y));
            }
        }
        Self { dims, values }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::DimensionMismatch`] if the buffer length does not
    /// match `dims`.
    pub fn from_vec(dims: Dimensions, values: Vec<f32>) -> Result<Self, TerrainError> {
        if values.len() != dims.cell_count() {
            return Err(TerrainError::DimensionMismatch {
                expected: dims.as_tuple(),
                found: (values.len() as u32, 1),
            });
        }
        Ok(Self { dims, values })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the field.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        assert!(
            x < self.dims.width() && y < self.dims.height(),
            "cell ({x}, {y}) outside {}x{} field",
            self.dims.width(),
            self.dims.height()
        );
        self.values[self.dims.index(x, y)]
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}
