//! This crate turns text documents into vocabulary-sized vectors and ranks them by cosine similarity.
pub mod config;
pub mod error;
pub mod external;
pub mod utils;
pub mod vectorizer;

/// Tokenizer and Corpus
/// `Tokenizer` splits a document on a single delimiter (a space by default),
/// keeping token order and making no normalization at all.
/// `Corpus` is an ordered collection of tokenized documents.
pub use vectorizer::token::{Corpus, Tokenizer};

/// Vocabulary
/// Token to index mapping assigned in first-seen order over a corpus.
/// Immutable once built; two builds over the same corpus are identical.
pub use vectorizer::vocabulary::Vocabulary;

/// Term Vector
/// Dense vector with one entry per vocabulary token.
/// Used for one-hot vectors, counts (bag-of-words) and TF-IDF weights.
/// Provides element-wise arithmetic, dot product and magnitude; every pairwise
/// operation rejects operands of different length.
pub use utils::math::vector::TermVector;

/// Frequency statistics
/// - `term_frequency`: per-document token counts
/// - `document_frequency`: number of documents containing each token
/// - `inverse_document_frequency`: `ln(N / df)`, rejecting `df == 0`
/// - `tf_idf`: element-wise product of TF and IDF
pub use vectorizer::frequency::{
    document_frequency, inverse_document_frequency, term_frequencies, term_frequency, tf_idf,
    DocumentFrequencyTable, IdfTable,
};

/// One-hot and bag-of-words encoders
/// Out-of-vocabulary tokens encode to the all-zero vector.
pub use vectorizer::encode::{bag_of_words, bag_of_words_from_one_hots, one_hot, one_hot_sequence};

/// TF-IDF Model
/// Build-phase artifact holding the tokenizer, vocabulary, DF and IDF tables of
/// one corpus. Shared read-only (`Arc<TfIdfModel>`) by the query side.
pub use vectorizer::TfIdfModel;

/// Document Index
/// Query-phase structure: one vector per document, ranked against queries.
pub use vectorizer::index::DocumentIndex;

/// Similarity
/// - `cosine_similarity`: zero-magnitude operands score exactly 0
/// - `classify`: Identical / Orthogonal / Similar / Opposite / Unrelated
/// - `rank`: descending score, ties by ascending candidate index
/// - `top_k`: first `min(k, len)` ranked entries
pub use vectorizer::evaluate::similarity::{classify, classify_with, cosine_similarity, Classification};
pub use vectorizer::evaluate::scoring::{rank, top_k, HitEntry, Hits};

/// Configuration
pub use config::{SimilarityConfig, TokenizerConfig, VectorizerConfig, Weighting};

/// Errors
pub use error::{Result, VectorError, VectorOp};

/// External collaborators
/// Traits for embedding providers and vector stores, with implementations
/// backed by this crate (`ModelEmbedder`, `InMemoryVectorStore`).
pub use external::provider::{rank_documents, EmbeddingProvider, ModelEmbedder, ProviderError};
pub use external::store::{Distance, InMemoryVectorStore, Point, ScoredPoint, StoreError, VectorStore};
