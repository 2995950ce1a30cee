//! Cosine similarity over fixed-dimension float vectors.
//!
//! Malformed input is a typed error, never a silent 0.0 — defaulting a
//! broken comparison to zero similarity would bias ranking.

use thermal_core::constants::DEGENERATE_NORM_EPSILON;
use thermal_core::errors::VectorError;

/// Cosine similarity of `a` and `b`, in [-1.0, 1.0].
///
/// Requires equal, non-zero lengths and non-zero norms. Accumulates in
/// f64 and clamps so floating error cannot push the result out of range.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < DEGENERATE_NORM_EPSILON {
        return Err(VectorError::DegenerateVector);
    }
    Ok((dot / denom).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_vectors_have_similarity_minus_one() {
        let a = vec![1.0, 2.0, 3.0];
        let b: Vec<f32> = a.iter().map(|x| -x).collect();
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!((sim + 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!(sim.abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_are_an_error() {
        let err = cosine_similarity(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            VectorError::DimensionMismatch {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn zero_norm_is_an_error_not_nan() {
        let err = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, VectorError::DegenerateVector));
    }

    #[test]
    fn empty_vectors_are_degenerate() {
        let err = cosine_similarity(&[], &[]).unwrap_err();
        assert!(matches!(err, VectorError::DegenerateVector));
    }

    #[test]
    fn result_is_clamped_to_unit_interval() {
        // Norms that would drift past 1.0 without clamping.
        let a = vec![1e-3f32; 512];
        let sim = cosine_similarity(&a, &a).unwrap();
        assert!(sim <= 1.0);
    }
}
