use serde::{Deserialize, Serialize};

/// Tokenizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Single delimiter the document is split on.
    /// Consecutive delimiters produce empty tokens.
    pub delimiter: char,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { delimiter: ' ' }
    }
}

/// Classification thresholds and ranking defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// score >= this is `Similar` (exact 1.0 is always `Identical`)
    pub similar_threshold: f64,
    /// score <= this is `Opposite`
    pub opposite_threshold: f64,
    /// default number of hits kept by `DocumentIndex::search`
    pub top_k: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            similar_threshold: 0.8,
            opposite_threshold: -0.8,
            top_k: 5,
        }
    }
}

/// Which vector a document is represented by in a `DocumentIndex`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weighting {
    /// raw term counts (bag-of-words)
    Count,
    /// term counts scaled by inverse document frequency
    #[default]
    TfIdf,
}

/// Top-level configuration shared by the build and query phases
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub tokenizer: TokenizerConfig,
    pub similarity: SimilarityConfig,
    pub weighting: Weighting,
}
