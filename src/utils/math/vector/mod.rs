pub mod math;

use std::fmt;

use num::Num;
use serde::{Deserialize, Serialize};

/// TermVector is a dense, fixed-length vector over a vocabulary.
/// Index `i` corresponds to the vocabulary entry with index `i`.
///
/// The same shape carries one-hot vectors, count vectors (bag-of-words) and
/// TF-IDF weights; only the element type differs:
/// - `u32` for one-hot and counts
/// - `f64` for TF-IDF weights
/// - `f32` for embeddings widened into this crate
///
/// Vectors are values. Every operation returns a new vector and never mutates
/// its operands.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector<N> {
    vec: Vec<N>,
}

impl<N> TermVector<N>
where
    N: Num + Copy,
{
    /// all-zero vector of `len` dimensions
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self {
            vec: vec![N::zero(); len],
        }
    }

    /// number of dimensions
    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// value at `index`, `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        self.vec.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.vec
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.vec.iter()
    }

    /// Iterate `(index, value)` over non-zero entries only, in index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> {
        self.vec
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
    }

    /// number of non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.vec.iter().filter(|v| !v.is_zero()).count()
    }

    /// true when every entry is zero (also true for the empty vector)
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vec.iter().all(|v| v.is_zero())
    }

    /// true when entry `index` is non-zero
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.vec.get(index).map_or(false, |v| !v.is_zero())
    }

    #[inline]
    pub fn into_vec(self) -> Vec<N> {
        self.vec
    }

    /// Add one to entry `index`.
    /// Only used while a vector is being built; out-of-range indices are ignored.
    #[inline]
    pub(crate) fn increment(&mut self, index: usize) {
        if let Some(v) = self.vec.get_mut(index) {
            *v = *v + N::one();
        }
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy + Into<f64>,
{
    /// widen every entry to f64
    pub fn to_f64(&self) -> TermVector<f64> {
        TermVector {
            vec: self.vec.iter().map(|&v| v.into()).collect(),
        }
    }
}

impl<N> From<Vec<N>> for TermVector<N> {
    fn from(vec: Vec<N>) -> Self {
        Self { vec }
    }
}

impl<N> From<TermVector<N>> for Vec<N> {
    fn from(v: TermVector<N>) -> Self {
        v.vec
    }
}

impl<N> AsRef<[N]> for TermVector<N> {
    fn as_ref(&self) -> &[N] {
        &self.vec
    }
}

impl<N> FromIterator<N> for TermVector<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            vec: iter.into_iter().collect(),
        }
    }
}

impl<'a, N> IntoIterator for &'a TermVector<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<N> fmt::Debug for TermVector<N>
where
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.vec).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_len_and_no_entries() {
        let v: TermVector<u32> = TermVector::zeros(4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.nnz(), 0);
        assert!(v.is_zero());
        assert_eq!(v.raw_iter().count(), 0);
    }

    #[test]
    fn raw_iter_skips_zeros_in_index_order() {
        let v = TermVector::from(vec![0u32, 3, 0, 1]);
        let entries: Vec<(usize, u32)> = v.raw_iter().map(|(i, x)| (i, *x)).collect();
        assert_eq!(entries, vec![(1, 3), (3, 1)]);
        assert!(v.contains(1));
        assert!(!v.contains(2));
        assert!(!v.contains(99));
    }

    #[test]
    fn increment_ignores_out_of_range() {
        let mut v: TermVector<u32> = TermVector::zeros(2);
        v.increment(1);
        v.increment(1);
        v.increment(5);
        assert_eq!(v.as_slice(), &[0, 2]);
    }

    #[test]
    fn to_f64_widens_counts_and_embeddings() {
        let counts = TermVector::from(vec![1u32, 0, 2]);
        assert_eq!(counts.to_f64().as_slice(), &[1.0, 0.0, 2.0]);
        let emb = TermVector::from(vec![0.5f32, -0.25]);
        assert_eq!(emb.to_f64().as_slice(), &[0.5, -0.25]);
    }
}
