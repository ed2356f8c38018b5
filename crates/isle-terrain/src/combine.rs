//! Attenuates a noise field by a falloff mask.

use crate::error::TerrainError;
use crate::field::ScalarField;
use crate::noise_field::MAX_INTENSITY;

/// Multiply `noise` by `mask` cell by cell, clamping to `[0, 255]`.
///
/// Cells where the mask is negative come out as zero, which is what turns
/// uniform noise into a single landmass around the center.
///
/// # Errors
///
/// Returns [`TerrainError::DimensionMismatch`] if the fields differ in shape.
pub fn combine(noise: &ScalarField, mask: &ScalarField) -> Result<ScalarField, TerrainError> {
    let dims = noise.dimensions();
    if mask.dimensions() != dims {
        return Err(TerrainError::DimensionMismatch {
            expected: dims.as_tuple(),
            found: mask.dimensions().as_tuple(),
        });
    }

    let values = noise
        .values()
        .iter()
        .zip(mask.values())
        .map(|(&n, &m)| (n * m).clamp(0.0, MAX_INTENSITY))
        .collect();
    ScalarField::from_vec(dims, values)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::field::Dimensions;

    fn random_field(rng: &mut ChaCha8Rng, dims: Dimensions, lo: f32, hi: f32) -> ScalarField {
        ScalarField::from_fn(dims, |_, _| rng.random_range(lo..hi))
    }

    #[test]
    fn test_pointwise_product_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let dims = Dimensions::new(rng.random_range(1..40), rng.random_range(1..40)).unwrap();
            let noise = random_field(&mut rng, dims, 0.0, 255.0);
            let mask = random_field(&mut rng, dims, -3.0, 3.0);

            let combined = combine(&noise, &mask).unwrap();
            assert_eq!(combined.dimensions(), dims);
            for ((&c, &n), &m) in combined
                .values()
                .iter()
                .zip(noise.values())
                .zip(mask.values())
            {
                assert_eq!(c, (n * m).clamp(0.0, 255.0));
                assert!((0.0..=255.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_negative_mask_zeroes_noise() {
        let dims = Dimensions::new(2, 1).unwrap();
        let noise = ScalarField::from_vec(dims, vec![200.0, 200.0]).unwrap();
        let mask = ScalarField::from_vec(dims, vec![-0.5, 0.5]).unwrap();
        let combined = combine(&noise, &mask).unwrap();
        assert_eq!(combined.values(), &[0.0, 100.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = ScalarField::from_fn(Dimensions::new(4, 4).unwrap(), |_, _| 1.0);
        let b = ScalarField::from_fn(Dimensions::new(4, 5).unwrap(), |_, _| 1.0);
        assert_eq!(
            combine(&a, &b),
            Err(TerrainError::DimensionMismatch {
                expected: (4, 4),
                found: (4, 5),
            })
        );
    }
}
