use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::error::VectorError;
use crate::vectorizer::{
    evaluate::scoring::{rank, Hits},
    TfIdfModel,
};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("embedding provider unavailable: {0}")]
    Unavailable(String),

    #[error("embedding provider rejected credentials: {0}")]
    Auth(String),

    #[error("asked for {expected} embeddings, provider returned {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// Turns text into fixed-dimensionality dense vectors.
///
/// Remote providers implement this over their own client. The similarity side
/// only needs the vectors to share one dimensionality, not how they were made.
pub trait EmbeddingProvider {
    /// dimensionality of every returned vector
    fn dimensions(&self) -> usize;

    /// one vector per document, in input order
    fn embed_documents(&self, documents: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError>;

    fn embed_query(&self, query: &str) -> Result<Vec<f32>, ProviderError>;
}

/// EmbeddingProvider backed by a fitted TF-IDF model.
/// Embeddings are TF-IDF vectors narrowed to f32, one dimension per vocabulary token.
#[derive(Debug, Clone)]
pub struct ModelEmbedder {
    model: Arc<TfIdfModel>,
}

impl ModelEmbedder {
    pub fn new(model: Arc<TfIdfModel>) -> Self {
        Self { model }
    }

    #[inline]
    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let v = self.model.tf_idf(text)?;
        Ok(v.iter().map(|&w| w as f32).collect())
    }
}

impl EmbeddingProvider for ModelEmbedder {
    fn dimensions(&self) -> usize {
        self.model.dim()
    }

    fn embed_documents(&self, documents: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError> {
        documents.iter().map(|doc| self.embed(doc)).collect()
    }

    fn embed_query(&self, query: &str) -> Result<Vec<f32>, ProviderError> {
        self.embed(query)
    }
}

/// Embed `documents` and `query` with `provider` and rank the documents
/// against the query. Hit indices refer to positions in `documents`.
pub fn rank_documents<P>(provider: &P, query: &str, documents: &[&str]) -> Result<Hits, ProviderError>
where
    P: EmbeddingProvider + ?Sized,
{
    let embeddings = provider.embed_documents(documents)?;
    if embeddings.len() != documents.len() {
        return Err(ProviderError::CountMismatch {
            expected: documents.len(),
            found: embeddings.len(),
        });
    }
    let query = provider.embed_query(query)?;
    debug!(documents = documents.len(), dim = query.len(), "embedded documents and query");
    Ok(rank(&query, &embeddings)?)
}
