use num::{Float, Num, Signed};

use crate::error::{Result, VectorError, VectorOp};

use super::TermVector;

/// Dot product and squared norms of two equal-length slices in one pass.
///
/// # Returns
/// * `(dot, |a|^2, |b|^2)`
#[inline]
pub fn dot_and_norms<N>(a: &[N], b: &[N], op: VectorOp) -> Result<(f64, f64, f64)>
where
    N: Copy + Into<f64>,
{
    VectorError::check_len(op, a.len(), b.len())?;
    let mut dot = 0_f64;
    let mut norm_a = 0_f64;
    let mut norm_b = 0_f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let x: f64 = x.into();
        let y: f64 = y.into();
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    Ok((dot, norm_a, norm_b))
}

impl<N> TermVector<N>
where
    N: Num + Copy,
{
    #[inline]
    fn zip_with(&self, other: &Self, op: VectorOp, f: impl Fn(N, N) -> N) -> Result<Self> {
        VectorError::check_len(op, self.len(), other.len())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// element-wise sum
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, VectorOp::Add, |a, b| a + b)
    }

    /// Element-wise (Hadamard) product
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, VectorOp::Multiply, |a, b| a * b)
    }
}

impl<N> TermVector<N>
where
    N: Num + Signed + Copy,
{
    /// element-wise difference `self - other`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, VectorOp::Subtract, |a, b| a - b)
    }
}

impl<N> TermVector<N>
where
    N: Float,
{
    /// Element-wise quotient `self / other`.
    /// Division by a zero entry follows IEEE 754 (inf or NaN), it is not an error.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, VectorOp::Divide, |a, b| a / b)
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy + Into<f64>,
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> Result<f64> {
        dot_and_norms(self.as_slice(), other.as_slice(), VectorOp::Dot).map(|(dot, _, _)| dot)
    }

    /// euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    pub fn magnitude(&self) -> f64 {
        self.iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// true when the dot product is exactly zero
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool> {
        Ok(self.dot(other)? == 0.0)
    }
}
