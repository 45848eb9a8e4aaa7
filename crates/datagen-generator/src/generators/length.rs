//! Picking element counts for batches.

use datagen_core::{DatagenError, LengthSpec};
use rand::Rng;

/// Choose how many elements a batch should have.
///
/// Reuses [`LengthSpec`] since a count range has the same shape and rules as
/// a length range.
pub fn pick_count<R: Rng + ?Sized>(
    rng: &mut R,
    counts: &LengthSpec,
) -> Result<usize, DatagenError> {
    counts
        .pick(rng)
        .map_err(|e| DatagenError::invalid(format!("element count: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_count_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = LengthSpec::Range { min: 1, max: 5 };

        for _ in 0..100 {
            let n = pick_count(&mut rng, &counts).unwrap();
            assert!((1..=5).contains(&n));
        }
    }

    #[test]
    fn test_pick_count_inverted() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = LengthSpec::Range { min: 5, max: 1 };
        let err = pick_count(&mut rng, &counts).unwrap_err();
        assert!(err.to_string().contains("element count"));
    }
}
