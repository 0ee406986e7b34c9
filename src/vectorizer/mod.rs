pub mod token;
pub mod vocabulary;
pub mod frequency;
pub mod encode;
pub mod index;
pub mod evaluate;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{TokenizerConfig, Weighting};
use crate::error::Result;
use crate::utils::math::vector::TermVector;
use crate::vectorizer::{
    frequency::{document_frequency, tf_idf, term_frequency, DocumentFrequencyTable, IdfTable},
    token::{Corpus, Tokenizer},
    vocabulary::Vocabulary,
};

/// TfIdfModel
/// The build-phase artifact: tokenizer, vocabulary, document frequencies and
/// IDF weights fitted on one corpus.
///
/// A fitted model is immutable. Every query-side method takes `&self`, so
/// one model can be shared (e.g. in an `Arc`) by any number of indexes,
/// embedders and threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfModel {
    tokenizer: Tokenizer,
    vocabulary: Vocabulary,
    df: DocumentFrequencyTable,
    idf: IdfTable,
}

impl TfIdfModel {
    /// Tokenize raw documents and fit
    pub fn fit<S>(documents: &[S], config: &TokenizerConfig) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let tokenizer = Tokenizer::new(*config);
        let corpus = Corpus::from_documents(documents, &tokenizer);
        Self::fit_corpus(&corpus, tokenizer)
    }

    /// Fit on an already tokenized corpus.
    /// `tokenizer` is kept to tokenize later queries the same way.
    pub fn fit_corpus(corpus: &Corpus, tokenizer: Tokenizer) -> Result<Self> {
        let vocabulary = Vocabulary::build_par(corpus.documents());
        let df = document_frequency(corpus.documents(), &vocabulary);
        let idf = df.idf()?;
        debug!(documents = corpus.len(), terms = vocabulary.len(), "tf-idf model fitted");
        Ok(Self {
            tokenizer,
            vocabulary,
            df,
            idf,
        })
    }

    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn document_frequency(&self) -> &DocumentFrequencyTable {
        &self.df
    }

    #[inline]
    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    /// number of documents the model was fitted on
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.df.doc_num()
    }

    /// vector length of everything this model produces
    #[inline]
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        self.tokenizer.tokenize(document)
    }

    /// count vector of a raw document
    pub fn term_frequency(&self, document: &str) -> TermVector<u32> {
        term_frequency(&self.tokenize(document), &self.vocabulary)
    }

    /// one-hot vector of a single token
    pub fn one_hot(&self, token: &str) -> TermVector<u32> {
        encode::one_hot(token, &self.vocabulary)
    }

    /// TF-IDF vector of a raw document
    pub fn tf_idf(&self, document: &str) -> Result<TermVector<f64>> {
        self.tf_idf_tokens(&self.tokenize(document))
    }

    /// TF-IDF vector of an already tokenized document
    pub fn tf_idf_tokens<T>(&self, tokens: &[T]) -> Result<TermVector<f64>>
    where
        T: AsRef<str>,
    {
        tf_idf(&term_frequency(tokens, &self.vocabulary), &self.idf)
    }

    /// Vector of a tokenized document under `weighting`
    pub fn vectorize_tokens<T>(&self, tokens: &[T], weighting: Weighting) -> Result<TermVector<f64>>
    where
        T: AsRef<str>,
    {
        let tf = term_frequency(tokens, &self.vocabulary);
        match weighting {
            Weighting::Count => Ok(tf.to_f64()),
            Weighting::TfIdf => tf_idf(&tf, &self.idf),
        }
    }

    /// Vector of a raw document under `weighting`
    pub fn vectorize(&self, document: &str, weighting: Weighting) -> Result<TermVector<f64>> {
        self.vectorize_tokens(&self.tokenize(document), weighting)
    }
}
