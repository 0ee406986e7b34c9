use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SimilarityConfig;
use crate::error::{Result, VectorError, VectorOp};

/// Qualitative bucket of a cosine score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// exactly 1
    Identical,
    /// exactly 0
    Orthogonal,
    /// at or above the similar threshold
    Similar,
    /// at or below the opposite threshold
    Opposite,
    Unrelated,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Identical => "Identical",
            Classification::Orthogonal => "Orthogonal",
            Classification::Similar => "Similar",
            Classification::Opposite => "Opposite",
            Classification::Unrelated => "Unrelated",
        };
        f.write_str(name)
    }
}

/// Cosine similarity
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Works on any fixed-length numeric vectors: counts, TF-IDF weights or
/// embeddings from an external provider.
///
/// Each operand is divided by its largest absolute element before
/// accumulating, so finite inputs of any magnitude neither overflow nor
/// underflow, and `cos(v, v)` is exactly `1.0`.
/// If either vector has zero magnitude the score is exactly `0.0`.
/// The result is clamped to `[-1, 1]` against rounding drift.
///
/// # Errors
/// `LengthMismatch` when `a.len() != b.len()`. Vectors are never truncated or padded.
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> Result<f64>
where
    N: Copy + Into<f64>,
{
    VectorError::check_len(VectorOp::Cosine, a.len(), b.len())?;
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Ok(0.0);
    }
    let mut dot = 0_f64;
    let mut norm_a = 0_f64;
    let mut norm_b = 0_f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let x = x.into() / scale_a;
        let y = y.into() / scale_b;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    // both squared norms lie in [1, len]; sqrt of the product keeps cos(v, v) exactly 1
    Ok((dot / (norm_a * norm_b).sqrt()).clamp(-1.0, 1.0))
}

#[inline]
fn max_abs<N>(v: &[N]) -> f64
where
    N: Copy + Into<f64>,
{
    v.iter().fold(0_f64, |m, &x| m.max(x.into().abs()))
}

/// Classify with the default thresholds (0.8 / -0.8)
pub fn classify(score: f64) -> Classification {
    classify_with(score, &SimilarityConfig::default())
}

/// Classify a score.
/// Exact 1 and exact 0 are checked before the thresholds.
pub fn classify_with(score: f64, config: &SimilarityConfig) -> Classification {
    if score == 1.0 {
        Classification::Identical
    } else if score == 0.0 {
        Classification::Orthogonal
    } else if score >= config.similar_threshold {
        Classification::Similar
    } else if score <= config.opposite_threshold {
        Classification::Opposite
    } else {
        Classification::Unrelated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;

    #[test]
    fn scaled_vectors_point_the_same_way() {
        let a = [10.0, 20.0, 30.0, 40.0, 50.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        let s = cosine_similarity(&a, &b).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
        assert_ne!(classify(s), Classification::Unrelated);
    }

    #[test]
    fn self_similarity_is_exactly_one() {
        let vs: [&[f64]; 4] = [
            &[1.0, 2.0],
            &[0.1, 0.2, 0.3],
            &[3.0, -7.5, 1e-3, 42.0],
            &[1.0, 1.0, 1.0],
        ];
        for v in vs {
            assert_eq!(cosine_similarity(v, v).unwrap(), 1.0);
        }
        let counts = [2u32, 0, 5, 1];
        assert_eq!(cosine_similarity(&counts, &counts).unwrap(), 1.0);
    }

    #[test]
    fn extreme_magnitudes_stay_exact() {
        let huge = [1e100, 1e100];
        assert_eq!(cosine_similarity(&huge, &huge).unwrap(), 1.0);
        let big = [1e200, -3e200, 5e199];
        assert_eq!(cosine_similarity(&big, &big).unwrap(), 1.0);

        let tiny = [1e-160, 1e-300];
        assert_eq!(cosine_similarity(&tiny, &tiny).unwrap(), 1.0);
        assert_eq!(cosine_similarity(&[1e-160, 0.0], &[0.0, 1e-160]).unwrap(), 0.0);

        let s = cosine_similarity(&[1e-160, 2e-160], &[2e-160, 1e-160]).unwrap();
        assert!((s - 0.8).abs() < 1e-12);
        // same pair at ordinary scale
        let t = cosine_similarity(&[1.0, 2.0], &[2.0, 1.0]).unwrap();
        assert!((s - t).abs() < 1e-12);

        let s = cosine_similarity(&[1e300, 1e-300], &[-1e-300, -1e300]).unwrap();
        assert!((-1.0..=1.0).contains(&s));
        assert!(s.abs() < 1e-12);
    }

    #[test]
    fn symmetric_and_bounded() {
        let pairs: [(&[f64], &[f64]); 4] = [
            (&[1.0, 0.0, 2.0], &[0.5, 3.0, -1.0]),
            (&[-1.0, -2.0], &[1.0, 2.0]),
            (&[0.3, 0.3, 0.3], &[0.1, 0.7, 0.2]),
            (&[5.0, -5.0], &[5.0, 5.0]),
        ];
        for (a, b) in pairs {
            let ab = cosine_similarity(a, b).unwrap();
            let ba = cosine_similarity(b, a).unwrap();
            assert_eq!(ab, ba);
            assert!((-1.0..=1.0).contains(&ab));
        }
    }

    #[test]
    fn opposite_vectors() {
        let s = cosine_similarity(&[-1.0, -2.0], &[1.0, 2.0]).unwrap();
        assert_eq!(s, -1.0);
        assert_eq!(classify(s), Classification::Opposite);
    }

    #[test]
    fn zero_vector_scores_zero() {
        let zero = [0.0f64; 3];
        let v = [1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &v).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&v, &zero).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero).unwrap(), 0.0);
        let empty: [f64; 0] = [];
        assert_eq!(cosine_similarity(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = cosine_similarity(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            VectorError::LengthMismatch { op: VectorOp::Cosine, left: 2, right: 1 }
        );
    }

    #[test]
    fn classify_checks_exact_values_first() {
        assert_eq!(classify(1.0), Classification::Identical);
        assert_eq!(classify(0.0), Classification::Orthogonal);
        assert_eq!(classify(-0.0), Classification::Orthogonal);
        assert_eq!(classify(0.8), Classification::Similar);
        assert_eq!(classify(0.95), Classification::Similar);
        assert_eq!(classify(-0.8), Classification::Opposite);
        assert_eq!(classify(-1.0), Classification::Opposite);
        assert_eq!(classify(0.6667), Classification::Unrelated);
        assert_eq!(classify(-0.5), Classification::Unrelated);
    }

    #[test]
    fn classify_with_custom_thresholds() {
        let config = SimilarityConfig {
            similar_threshold: 0.5,
            opposite_threshold: -0.5,
            ..SimilarityConfig::default()
        };
        assert_eq!(classify_with(0.6667, &config), Classification::Similar);
        assert_eq!(classify_with(-0.6, &config), Classification::Opposite);
        assert_eq!(classify_with(1.0, &config), Classification::Identical);
    }

    #[test]
    fn display_names() {
        assert_eq!(Classification::Unrelated.to_string(), "Unrelated");
        assert_eq!(Classification::Identical.to_string(), "Identical");
    }
}
