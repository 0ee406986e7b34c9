use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{SimilarityConfig, VectorizerConfig, Weighting};
use crate::error::Result;
use crate::utils::math::vector::TermVector;
use crate::vectorizer::{
    evaluate::{
        scoring::{rank, Hits},
        similarity::cosine_similarity,
    },
    frequency::{tf_idf, term_frequency},
    token::Corpus,
    TfIdfModel,
};

/// DocumentIndex
/// Query-phase view over a corpus: one vector per document, built once from a
/// shared [`TfIdfModel`] and then only read.
///
/// Documents are identified by their position in the corpus the index was
/// built from.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    model: Arc<TfIdfModel>,
    weighting: Weighting,
    config: SimilarityConfig,
    /// raw counts, kept for term inspection
    tf_vecs: Vec<TermVector<u32>>,
    /// vectors ranked against queries
    vectors: Vec<TermVector<f64>>,
}

impl DocumentIndex {
    /// Vectorize every document of `corpus` with `model`.
    /// `corpus` does not have to be the one the model was fitted on; its
    /// tokens outside the vocabulary are ignored.
    pub fn build(model: Arc<TfIdfModel>, corpus: &Corpus, config: &VectorizerConfig) -> Result<Self> {
        let tf_vecs: Vec<TermVector<u32>> = corpus
            .documents()
            .par_iter()
            .map(|doc| term_frequency(doc, model.vocabulary()))
            .collect();
        let vectors: Vec<TermVector<f64>> = match config.weighting {
            Weighting::Count => tf_vecs.iter().map(TermVector::to_f64).collect(),
            Weighting::TfIdf => tf_vecs
                .par_iter()
                .map(|tf| tf_idf(tf, model.idf()))
                .collect::<Result<Vec<_>>>()?,
        };
        debug!(documents = vectors.len(), dim = model.dim(), weighting = ?config.weighting, "document index built");
        Ok(Self {
            model,
            weighting: config.weighting,
            config: config.similarity,
            tf_vecs,
            vectors,
        })
    }

    /// Fit a model on `documents` and index the same documents
    pub fn from_documents<S>(documents: &[S], config: &VectorizerConfig) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let model = TfIdfModel::fit(documents, &config.tokenizer)?;
        let corpus = Corpus::from_documents(documents, model.tokenizer());
        Self::build(Arc::new(model), &corpus, config)
    }

    #[inline]
    pub fn model(&self) -> &Arc<TfIdfModel> {
        &self.model
    }

    #[inline]
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    #[inline]
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// indexed vector of document `doc`
    #[inline]
    pub fn vector(&self, doc: usize) -> Option<&TermVector<f64>> {
        self.vectors.get(doc)
    }

    /// Best `config.top_k` documents for a raw query
    pub fn search(&self, query: &str) -> Result<Hits> {
        self.search_top_k(query, self.config.top_k)
    }

    /// Best `k` documents for a raw query
    pub fn search_top_k(&self, query: &str, k: usize) -> Result<Hits> {
        let query = self.model.vectorize(query, self.weighting)?;
        let mut hits = self.rank_vector(&query)?;
        hits.truncate(k);
        Ok(hits)
    }

    /// Rank every document against an already vectorized query
    pub fn rank_vector(&self, query: &TermVector<f64>) -> Result<Hits> {
        rank(query.as_slice(), &self.vectors)
    }

    /// Cosine similarity between two indexed documents, `None` if either is out of range
    pub fn similarity(&self, a: usize, b: usize) -> Result<Option<f64>> {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(va), Some(vb)) => cosine_similarity(va.as_slice(), vb.as_slice()).map(Some),
            _ => Ok(None),
        }
    }

    /// Documents containing `term`, ascending
    pub fn documents_containing(&self, term: &str) -> Vec<usize> {
        match self.model.vocabulary().index_of(term) {
            Some(idx) => self
                .tf_vecs
                .iter()
                .enumerate()
                .filter(|(_, tf)| tf.contains(idx))
                .map(|(doc, _)| doc)
                .collect(),
            None => Vec::new(),
        }
    }

    /// How often `term` occurs in document `doc`.
    /// `None` if the document or the term is unknown.
    pub fn term_count(&self, doc: usize, term: &str) -> Option<u32> {
        let idx = self.model.vocabulary().index_of(term)?;
        self.tf_vecs.get(doc)?.get(idx)
    }

    /// TF-IDF weight of `term` in document `doc`, whatever the index weighting
    pub fn term_weight(&self, doc: usize, term: &str) -> Option<f64> {
        let idx = self.model.vocabulary().index_of(term)?;
        let count = self.tf_vecs.get(doc)?.get(idx)?;
        Some(count as f64 * self.model.idf().get(idx)?)
    }
}
