//! Error types for the island generation pipeline.

/// Errors that can occur while generating an island.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// A width or height of zero was requested.
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Two fields with different shapes were combined.
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        /// `(width, height)` of the first operand.
        expected: (u32, u32),
        /// `(width, height)` of the second operand.
        found: (u32, u32),
    },

    /// A generation parameter has a value the pipeline cannot work with.
    #[error("parameter `{name}` out of range: {value}")]
    ParameterOutOfRange {
        /// Parameter name as it appears in [`Parameters`](crate::Parameters).
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The run was cancelled before it produced a complete output set.
    #[error("generation cancelled")]
    Cancelled,
}
