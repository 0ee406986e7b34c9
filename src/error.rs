use std::fmt;

use thiserror::Error;

/// Pairwise vector operations that require equal-length operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Dot,
    Cosine,
    TfIdf,
}

impl fmt::Display for VectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorOp::Add => "add",
            VectorOp::Subtract => "subtract",
            VectorOp::Multiply => "multiply",
            VectorOp::Divide => "divide",
            VectorOp::Dot => "dot",
            VectorOp::Cosine => "cosine similarity",
            VectorOp::TfIdf => "tf-idf",
        };
        f.write_str(name)
    }
}

/// Errors raised by vector math and frequency statistics.
///
/// `LengthMismatch` and `CandidateLengthMismatch` are contract violations of the
/// caller (vectors from different vocabularies or embedding spaces).
/// `ZeroDocumentFrequency` and `DocumentFrequencyExceedsCorpus` mean the DF table
/// was not derived from the corpus it is paired with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("{op}: vector length mismatch (left = {left}, right = {right})")]
    LengthMismatch {
        op: VectorOp,
        left: usize,
        right: usize,
    },

    #[error("candidate {candidate} has length {found}, query has length {expected}")]
    CandidateLengthMismatch {
        candidate: usize,
        expected: usize,
        found: usize,
    },

    #[error("document frequency of term {index} is zero, idf is undefined")]
    ZeroDocumentFrequency { index: usize },

    #[error("document frequency of term {index} is {df}, corpus only has {num_documents} documents")]
    DocumentFrequencyExceedsCorpus {
        index: usize,
        df: u32,
        num_documents: usize,
    },
}

impl VectorError {
    pub(crate) fn check_len(op: VectorOp, left: usize, right: usize) -> Result<()> {
        if left != right {
            return Err(VectorError::LengthMismatch { op, left, right });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
