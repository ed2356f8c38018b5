//! Radial falloff mask centered on the canvas.
//!
//! The mask is a multiplier that is `1` at the center, `0` at half the
//! falloff width and negative beyond. Square roots go through `libm` so the
//! mask is bit-identical across platforms.

use crate::error::TerrainError;
use crate::field::{Dimensions, ScalarField};

/// Radius factor at which the falloff spans the full canvas.
pub const FULL_CANVAS_RADIUS: f32 = 10.0;

/// Generates radial falloff fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialMask {
    radius_factor: f32,
}

impl RadialMask {
    /// Create a mask generator.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::ParameterOutOfRange`] unless `radius_factor` is
    /// a positive finite number.
    pub fn new(radius_factor: f32) -> Result<Self, TerrainError> {
        if !(radius_factor.is_finite() && radius_factor > 0.0) {
            return Err(TerrainError::ParameterOutOfRange {
                name: "land_radius",
                value: radius_factor,
            });
        }
        Ok(Self { radius_factor })
    }

    /// Distance from the center at which the multiplier reaches `-1`.
    ///
    /// Half of this distance is where the mask crosses zero.
    pub fn max_width(&self, dims: Dimensions) -> f32 {
        let (cx, cy) = dims.center();
        let (cx, cy) = (cx as f32, cy as f32);
        libm::sqrtf(cx * cx + cy * cy) * (self.radius_factor / FULL_CANVAS_RADIUS)
    }

    /// Multiplier for the cell at `(x, y)`.
    pub fn sample(&self, dims: Dimensions, x: u32, y: u32) -> f32 {
        multiplier(dims, self.max_width(dims), x, y)
    }

    /// Rasterize the mask over the whole canvas.
    pub fn generate(&self, dims: Dimensions) -> ScalarField {
        let max_width = self.max_width(dims);
        ScalarField::from_fn(dims, |x, y| multiplier(dims, max_width, x, y))
    }
}

fn multiplier(dims: Dimensions, max_width: f32, x: u32, y: u32) -> f32 {
    let (cx, cy) = dims.center();
    let dx = x.abs_diff(cx) as f32;
    let dy = y.abs_diff(cy) as f32;
    // A 1x1 canvas has a zero falloff width; its only cell is the center.
    let dist = if max_width > 0.0 {
        libm::sqrtf(dx * dx + dy * dy) / max_width
    } else {
        0.0
    };
    -((dist - 0.5) * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn dims(w: u32, h: u32) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_center_is_one() {
        let mask = RadialMask::new(10.0).unwrap();
        let d = dims(64, 48);
        let (cx, cy) = d.center();
        assert!((mask.sample(d, cx, cy) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_at_half_width() {
        let mask = RadialMask::new(10.0).unwrap();
        // Center (50, 0) gives max_width 50, so the zero crossing is 25 px out.
        let d = dims(100, 1);
        assert!((mask.max_width(d) - 50.0).abs() < EPSILON);
        assert!(mask.sample(d, 75, 0).abs() < EPSILON);
        assert!(mask.sample(d, 25, 0).abs() < EPSILON);
        assert!((mask.sample(d, 0, 0) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_radial_symmetry() {
        let mask = RadialMask::new(7.5).unwrap();
        // Odd sides so every offset has a mirrored cell inside the canvas.
        let d = dims(33, 21);
        let field = mask.generate(d);
        let (cx, cy) = d.center();

        for dy in 0..=cy {
            for dx in 0..=cx {
                let a = field.get(cx + dx, cy + dy);
                let b = field.get(cx - dx, cy - dy);
                assert!(
                    (a - b).abs() < EPSILON,
                    "Asymmetry at offset ({dx}, {dy}): {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_monotonic_along_rays() {
        let mask = RadialMask::new(4.0).unwrap();
        let d = dims(64, 64);
        let (cx, cy) = d.center();

        for (step_x, step_y) in [(1i64, 0i64), (0, 1), (-1, 0), (0, -1), (1, 1), (-1, -1)] {
            let mut previous = f32::MAX;
            let (mut x, mut y) = (cx as i64, cy as i64);
            while (0..64).contains(&x) && (0..64).contains(&y) {
                let value = mask.sample(d, x as u32, y as u32);
                assert!(
                    value <= previous + EPSILON,
                    "Mask increased along ray ({step_x}, {step_y}) at ({x}, {y})"
                );
                previous = value;
                x += step_x;
                y += step_y;
            }
        }
    }

    #[test]
    fn test_smaller_radius_shrinks_footprint() {
        let d = dims(128, 128);
        let positive = |radius: f32| {
            RadialMask::new(radius)
                .unwrap()
                .generate(d)
                .values()
                .iter()
                .filter(|&&m| m > 0.0)
                .count()
        };
        assert!(positive(3.0) < positive(10.0));
    }

    #[test]
    fn test_single_cell_canvas() {
        let field = RadialMask::new(10.0).unwrap().generate(dims(1, 1));
        assert_eq!(field.values(), &[1.0]);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for radius in [0.0, -1.0, f32::INFINITY, f32::NAN] {
            assert!(RadialMask::new(radius).is_err(), "radius {radius}");
        }
    }
}
